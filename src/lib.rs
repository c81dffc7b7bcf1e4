//! The FIPS 180-2 secure hash algorithms: SHA-1, SHA-224, SHA-256, SHA-384
//! and SHA-512.
//!
//! Two interfaces are provided. The typed hashers re-exported from the
//! `crypto_sha1` and `crypto_sha2` crates implement [`Digest`] and are picked
//! at compile time:
//!
//! ```rust
//! use fips180::{Digest, Sha256};
//!
//! let mut hasher = Sha256::new();
//! hasher.input(b"a");
//! hasher.input(b"bc");
//! assert_eq!(hasher.result()[..2], [0xba, 0x78]);
//! ```
//!
//! [`HashContext`] selects the algorithm at runtime and reports misuse, such
//! as updating a finalized context, as a [`HashError`]:
//!
//! ```rust
//! use fips180::{Algorithm, HashContext, HashError};
//!
//! let algorithm: Algorithm = "sha-1".parse()?;
//! let mut ctx = HashContext::new(algorithm);
//! ctx.update(b"abc")?;
//! assert_eq!(ctx.finalize_hex()?, "a9993e364706816aba3e25717850c26c9cd0d89d");
//! assert!(ctx.update(b"more").is_err());
//! # Ok::<(), HashError>(())
//! ```

pub extern crate crypto_digest;
pub extern crate crypto_sha1;
pub extern crate crypto_sha2;

pub use crypto_digest::Digest;
pub use crypto_sha1::Sha1;
pub use crypto_sha2::{Sha224, Sha256, Sha384, Sha512};

mod algorithm;
mod context;
mod encoding;
mod error;
mod output;

pub use algorithm::{Algorithm, Family, MAX_DIGEST_LEN};
pub use context::{digest, digest_hex, HashContext};
pub use encoding::to_hex;
pub use error::HashError;
pub use output::Output;
