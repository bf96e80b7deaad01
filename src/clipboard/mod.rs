//! Best-effort system clipboard mirroring
//!
//! Yanks mirror the register to the system clipboard when one is available.
//! Clipboard trouble is never allowed to interfere with the engine: a
//! missing provider or a failed write leaves the register update intact.

/// Handle to the system clipboard, if one could be opened
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Try to open the system clipboard; headless environments yield an
    /// inert handle
    #[must_use]
    pub fn detect() -> Self {
        SystemClipboard {
            inner: arboard::Clipboard::new().ok(),
        }
    }

    /// An inert handle that never touches the system clipboard (for tests
    /// and embedded hosts)
    #[must_use]
    pub fn disabled() -> Self {
        SystemClipboard { inner: None }
    }

    /// Whether a real clipboard backs this handle
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    /// Copy `text` to the system clipboard; failures are swallowed
    pub fn copy(&mut self, text: &str) {
        if let Some(clipboard) = self.inner.as_mut() {
            let _ = clipboard.set_text(text.to_owned());
        }
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("available", &self.is_available())
            .finish()
    }
}
