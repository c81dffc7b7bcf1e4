use std::fmt;
use std::ops::Deref;

use crate::algorithm::{Algorithm, MAX_DIGEST_LEN};
use crate::encoding::{to_hex, write_hex};

/// A finished digest. Holds exactly `algorithm().digest_len()` bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Output {
    algorithm: Algorithm,
    bytes: [u8; MAX_DIGEST_LEN],
}

impl Output {
    pub(crate) fn new(algorithm: Algorithm) -> Output {
        Output { algorithm, bytes: [0; MAX_DIGEST_LEN] }
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.algorithm.digest_len()]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.digest_len()]
    }

    pub fn len(&self) -> usize {
        self.algorithm.digest_len()
    }

    /// Always false; every algorithm has a non-empty digest.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn to_hex(&self) -> String {
        to_hex(self.as_bytes())
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Deref for Output {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.as_bytes())
    }
}

impl fmt::LowerHex for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.as_bytes())
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Output({}, ", self.algorithm)?;
        write_hex(f, self.as_bytes())?;
        f.write_str(")")
    }
}
