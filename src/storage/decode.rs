//! Tolerant decoding of hand-edited data files

use std::borrow::Cow;
use std::io::{self, Read};

/// Read everything from `source`, replacing invalid UTF-8 with U+FFFD
///
/// A stray byte only spoils the token it sits in; the parsers drop or clean
/// that token instead of refusing the whole file.
pub(crate) fn read_lossy<R: Read>(mut source: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;

    Ok(match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            log::debug!("Replaced invalid UTF-8 in a {}-byte data file", bytes.len());
            text
        }
    })
}
