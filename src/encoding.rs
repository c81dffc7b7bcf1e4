use std::fmt;

use crate::algorithm::MAX_DIGEST_LEN;

/// Lowercase hexadecimal, two characters per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Writes a digest as lowercase hex without allocating.
pub(crate) fn write_hex(f: &mut fmt::Formatter<'_>, digest: &[u8]) -> fmt::Result {
    let mut buf = [0u8; 2 * MAX_DIGEST_LEN];
    let buf = &mut buf[..2 * digest.len()];
    hex::encode_to_slice(digest, buf).map_err(|_| fmt::Error)?;
    // hex digits are ASCII
    let text = std::str::from_utf8(buf).map_err(|_| fmt::Error)?;
    f.write_str(text)
}
