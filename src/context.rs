use std::fmt;

use crypto_sha1::Engine160;
use crypto_sha2::{Engine256, Engine512, H224, H256, H384, H512};
use tracing::{debug, trace, warn};

use crate::algorithm::Algorithm;
use crate::error::HashError;
use crate::output::Output;

/// The engine behind a context. SHA-224 and SHA-384 run on the SHA-256 and
/// SHA-512 engines with their own initial hash values.
#[derive(Clone)]
enum Engine {
    Sha1(Engine160),
    Sha256(Engine256),
    Sha512(Engine512),
}

impl Engine {
    fn new(algorithm: Algorithm) -> Engine {
        match algorithm {
            Algorithm::Sha1 => Engine::Sha1(Engine160::new()),
            Algorithm::Sha224 => Engine::Sha256(Engine256::new(&H224)),
            Algorithm::Sha256 => Engine::Sha256(Engine256::new(&H256)),
            Algorithm::Sha384 => Engine::Sha512(Engine512::new(&H384)),
            Algorithm::Sha512 => Engine::Sha512(Engine512::new(&H512)),
        }
    }

    fn input(&mut self, data: &[u8]) {
        match self {
            Engine::Sha1(e) => e.input(data),
            Engine::Sha256(e) => e.input(data),
            Engine::Sha512(e) => e.input(data),
        }
    }

    fn length_bits(&self) -> u128 {
        match self {
            Engine::Sha1(e) => u128::from(e.length_bits()),
            Engine::Sha256(e) => u128::from(e.length_bits()),
            Engine::Sha512(e) => e.length_bits(),
        }
    }

    /// `out` must already have the digest length of the engine's algorithm.
    fn finish_into(self, out: &mut [u8]) {
        match self {
            Engine::Sha1(e) => e.finish_into(out),
            Engine::Sha256(e) => e.finish_into(out),
            Engine::Sha512(e) => e.finish_into(out),
        }
    }
}

/// A streaming hash computation whose algorithm is chosen at runtime.
///
/// Feed the message with any number of [`update`](HashContext::update)
/// calls, then call one of the `finalize` methods or
/// [`discard`](HashContext::discard). Either way the engine state is wiped
/// and the context refuses further input until [`reset`](HashContext::reset).
///
/// ```rust
/// use fips180::{Algorithm, HashContext};
///
/// let mut ctx = HashContext::new(Algorithm::Sha256);
/// ctx.update(b"ab").unwrap();
/// ctx.update(b"c").unwrap();
/// let out = ctx.finalize().unwrap();
/// assert_eq!(out.len(), 32);
/// assert!(out.to_hex().starts_with("ba7816bf"));
/// ```
#[derive(Clone)]
pub struct HashContext {
    algorithm: Algorithm,
    // None once finalized or discarded.
    engine: Option<Engine>,
}

impl HashContext {
    pub fn new(algorithm: Algorithm) -> HashContext {
        trace!(%algorithm, "hash context initialized");
        HashContext { algorithm, engine: Some(Engine::new(algorithm)) }
    }

    /// Absorb `data`. Empty input is accepted and changes nothing.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        match self.engine.as_mut() {
            Some(engine) => {
                engine.input(data);
                Ok(())
            }
            None => Err(refuse(self.algorithm, "update")),
        }
    }

    /// Pad the message and return its digest.
    pub fn finalize(&mut self) -> Result<Output, HashError> {
        let mut out = Output::new(self.algorithm);
        self.finalize_into(out.as_mut_bytes())?;
        Ok(out)
    }

    /// Pad the message and write its digest to `out`, which must be exactly
    /// `algorithm().digest_len()` bytes long. A wrong length is reported
    /// before anything else happens, so the context can still be finalized
    /// afterwards.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), HashError> {
        let expected = self.algorithm.digest_len();
        if self.engine.is_some() && out.len() != expected {
            warn!(algorithm = %self.algorithm, operation = "finalize", expected, actual = out.len(),
                  "refused digest destination of the wrong length");
            return Err(HashError::OutputLength {
                algorithm: self.algorithm,
                expected,
                actual: out.len(),
            });
        }

        let engine = self.engine.take().ok_or_else(|| refuse(self.algorithm, "finalize"))?;
        let bits = engine.length_bits();
        engine.finish_into(out);
        debug!(algorithm = %self.algorithm, bits, discarded = false, "hash context finalized");
        Ok(())
    }

    /// Finalize and return the digest as lowercase hex.
    pub fn finalize_hex(&mut self) -> Result<String, HashError> {
        self.finalize().map(|out| out.to_hex())
    }

    /// Finalize without producing a digest. The engine state is wiped just
    /// the same.
    pub fn discard(&mut self) -> Result<(), HashError> {
        let engine = self.engine.take().ok_or_else(|| refuse(self.algorithm, "discard"))?;
        let bits = engine.length_bits();
        drop(engine);
        debug!(algorithm = %self.algorithm, bits, discarded = true, "hash context finalized");
        Ok(())
    }

    /// Start a new message with the same algorithm. Valid in any state.
    pub fn reset(&mut self) {
        trace!(algorithm = %self.algorithm, finalized = self.is_finalized(), "hash context reset");
        self.engine = Some(Engine::new(self.algorithm));
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn is_finalized(&self) -> bool {
        self.engine.is_none()
    }

    /// Bits absorbed since the last reset, or 0 once finalized.
    pub fn bit_len(&self) -> u128 {
        self.engine.as_ref().map_or(0, Engine::length_bits)
    }
}

impl fmt::Debug for HashContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashContext")
            .field("algorithm", &self.algorithm)
            .field("finalized", &self.is_finalized())
            .finish_non_exhaustive()
    }
}

fn refuse(algorithm: Algorithm, operation: &'static str) -> HashError {
    warn!(%algorithm, operation, "refused operation on a finalized hash context");
    HashError::Finalized { algorithm }
}

/// Hash `data` in one call.
pub fn digest(algorithm: Algorithm, data: &[u8]) -> Output {
    let mut engine = Engine::new(algorithm);
    engine.input(data);
    let mut out = Output::new(algorithm);
    engine.finish_into(out.as_mut_bytes());
    out
}

/// Hash `data` in one call and return the digest as lowercase hex.
pub fn digest_hex(algorithm: Algorithm, data: &[u8]) -> String {
    digest(algorithm, data).to_hex()
}
