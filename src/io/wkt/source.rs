//! Reading WKT source text from disk

use crate::error::Result;
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Decode raw source bytes into trimmed text.
///
/// UTF-8 is tried first; anything else is decoded as Windows-1252, which
/// maps every byte. A leading byte order mark is dropped.
pub fn decode_source(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(e) => {
            log::warn!(
                "source is not valid UTF-8 (at byte {}), decoding as Windows-1252",
                e.valid_up_to()
            );
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded
        }
    };

    text.trim_start_matches('\u{feff}').trim().to_string()
}

/// Read and decode a WKT source file
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_source(&bytes))
}
