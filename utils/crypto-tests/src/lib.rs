//! Helpers used by the hash crates' tests. Not part of the public surface.

pub extern crate crypto_digest;

pub mod hash;
