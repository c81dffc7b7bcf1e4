//! An implementation of the SHA-2 cryptographic hash algorithms.
//!
//! There are 4 algorithms of FIPS 180-2 implemented here:
//!
//! `Sha224`, which is the 32-bit `Sha256` algorithm with the result truncated
//! to 224 bits.
//! `Sha256`, which is the 32-bit `Sha256` algorithm.
//! `Sha384`, which is the 64-bit `Sha512` algorithm with the result truncated
//! to 384 bits.
//! `Sha512`, which is the 64-bit `Sha512` algorithm.
//!
//! Algorithmically, there are only 2 core algorithms: `Sha256` and `Sha512`.
//! All other algorithms are just applications of these with different initial
//! hash values, and truncated to different digest bit lengths. The shared
//! cores are exposed as [`Engine256`] and [`Engine512`].
//!
//! # Usage
//!
//! An example of using `Sha256` is:
//!
//! ```rust
//! use crypto_sha2::{Digest, Sha256};
//!
//! // create a Sha256 object
//! let mut hasher = Sha256::new();
//!
//! // write input message
//! hasher.input(b"hello world");
//!
//! // read hash digest
//! let out = hasher.result();
//!
//! assert_eq!(out[..4], [0xb9, 0x4d, 0x27, 0xb9]);
//! ```
//!
//! An example of using `Sha512` is:
//!
//! ```rust
//! use crypto_sha2::{Digest, Sha512};
//!
//! let out = Sha512::digest(b"hello world");
//!
//! assert_eq!(out.len(), 64);
//! assert_eq!(out[..4], [0x30, 0x9e, 0xcc, 0x48]);
//! ```

#![cfg_attr(not(test), no_std)]

pub use crypto_digest::Digest;

mod consts;
pub use consts::{STATE_LEN, BLOCK_LEN, H224, H256, H384, H512};

mod sha256;
pub use sha256::{Engine256, Sha224, Sha256, sha256_digest_block, sha256_digest_block_u32};

mod sha512;
pub use sha512::{Engine512, Sha384, Sha512, sha512_digest_block, sha512_digest_block_u64};
