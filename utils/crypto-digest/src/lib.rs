#![no_std]
pub extern crate generic_array;

use generic_array::{GenericArray, ArrayLength};
use generic_array::typenum::Unsigned;

/// The Digest trait specifies an interface common to digest functions.
///
/// `R` is the output size and `B` the block size, both in bytes.
pub trait Digest: Default + Clone {
    type R: ArrayLength<u8>;
    type B: ArrayLength<u8>;

    /// Create new digest instance.
    fn new() -> Self {
        Default::default()
    }

    /// Digest input data. This method can be called repeatedly
    /// for use with streaming messages. Empty input is allowed.
    fn input(&mut self, input: &[u8]);

    /// Retrieve the digest result. This method consumes the digest instance,
    /// whose state is wiped on the way out.
    fn result(self) -> GenericArray<u8, Self::R>;

    /// Discard any absorbed input and start over with the initial state.
    fn reset(&mut self) {
        *self = Self::new();
    }

    /// Hash `data` in one call.
    fn digest(data: &[u8]) -> GenericArray<u8, Self::R> {
        let mut hasher = Self::new();
        hasher.input(data);
        hasher.result()
    }

    /// Get the block size in bytes.
    fn block_bytes(&self) -> usize { Self::B::to_usize() }

    /// Get the block size in bits.
    fn block_bits(&self) -> usize { 8 * Self::B::to_usize() }

    /// Get the output size in bytes.
    fn output_bytes(&self) -> usize { Self::R::to_usize() }

    /// Get the output size in bits.
    fn output_bits(&self) -> usize { 8 * Self::R::to_usize() }
}
