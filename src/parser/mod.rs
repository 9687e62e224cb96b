//! Reader layer for semicolon-delimited text files

mod csv;

use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use crate::error::{ProbeError, Result};

pub use self::csv::DelimitedReader;

/// Resolve an encoding label such as `utf-8`, `latin1` or `windows-1252`
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    let label = label.trim();
    if label.eq_ignore_ascii_case("utf-8-sig") || label.eq_ignore_ascii_case("utf8-sig") {
        return Ok(UTF_8);
    }

    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ProbeError::UnknownEncoding(label.to_string()))?;

    // Fields are split on a single delimiter byte before decoding
    if !encoding.is_ascii_compatible() {
        return Err(ProbeError::UnsupportedEncoding(encoding.name()));
    }
    Ok(encoding)
}

/// Open a file with an encoding label
pub fn open(path: &Path, encoding: &str, delimiter: u8) -> Result<DelimitedReader> {
    DelimitedReader::open(path, resolve_encoding(encoding)?, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_encoding() {
        assert_eq!(resolve_encoding("utf-8").unwrap(), UTF_8);
        assert_eq!(resolve_encoding("UTF-8-SIG").unwrap(), UTF_8);
        assert_eq!(resolve_encoding("latin1").unwrap().name(), "windows-1252");
    }

    #[test]
    fn test_reject_unknown_and_utf16() {
        assert!(matches!(
            resolve_encoding("klingon"),
            Err(ProbeError::UnknownEncoding(_))
        ));
        assert!(matches!(
            resolve_encoding("utf-16le"),
            Err(ProbeError::UnsupportedEncoding(_))
        ));
    }
}
