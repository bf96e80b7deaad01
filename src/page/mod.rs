//! Page snapshot encoding and title extraction
//!
//! Pages persist as a compact, shareable encoding of their full text:
//! raw-deflate compressed, then base64 with the URL-safe alphabet so a
//! snapshot can travel inside a URL fragment. Decoding is strict; callers
//! that load a page fall back to an empty buffer on any decode failure.

use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::constants::errors;
use crate::error::{ErrorKind, Result, VimodeError};

/// Encode page text as url-safe base64 over raw deflate
pub fn encode_snapshot(text: &str) -> Result<String> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(URL_SAFE.encode(compressed))
}

/// Decode a snapshot produced by [`encode_snapshot`]
pub fn decode_snapshot(encoded: &str) -> Result<String> {
    let compressed = URL_SAFE.decode(encoded.trim()).map_err(|e| {
        VimodeError::new(ErrorKind::Encoding, errors::SNAPSHOT_DECODE, e.to_string())
    })?;
    let mut text = String::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_string(&mut text)
        .map_err(|e| {
            VimodeError::new(ErrorKind::Encoding, errors::SNAPSHOT_DECODE, e.to_string())
        })?;
    Ok(text)
}

/// Extract the page title: a `#`-led first line (leading blank lines
/// permitted) terminated by a newline
#[must_use]
pub fn title_of(text: &str) -> Option<&str> {
    let rest = text.trim_start_matches('\n');
    let line = rest.strip_prefix('#')?;
    let end = line.find('\n')?;
    let title = &line[..end];
    (!title.is_empty()).then_some(title)
}
