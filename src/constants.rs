//! Global constants for the vimode crate

pub mod ui {
    /// Display text for pages with no title heading
    pub const NO_NAME: &str = "[No Name]";

    /// Spaces inserted for a Tab key press in the demo host
    pub const TAB_SPACES: &str = "    ";
}

pub mod timing {
    /// Main loop poll timeout in milliseconds
    pub const POLL_TIMEOUT_MS: u64 = 16;

    /// Idle time after the last buffer change before autosave fires
    pub const AUTOSAVE_DEBOUNCE_MS: u64 = 500;
}

pub mod errors {
    // Error codes
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const OFFSET_OUT_OF_BOUNDS: &str = "OFFSET_OUT_OF_BOUNDS";
    pub const NOT_CHAR_BOUNDARY: &str = "NOT_CHAR_BOUNDARY";
    pub const INVALID_RANGE: &str = "INVALID_RANGE";
    pub const SNAPSHOT_DECODE: &str = "SNAPSHOT_DECODE";
    pub const TERMINAL_IO: &str = "TERMINAL_IO";
}
