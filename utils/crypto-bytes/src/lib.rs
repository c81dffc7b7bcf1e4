//! Byte and word helpers shared by the block hash crates.
//!
//! Hash state is always kept as native integers. The functions here are the
//! only places where bytes become words or words become bytes, and all of
//! them use big-endian order regardless of the host.

#![cfg_attr(not(test), no_std)]

/// Write a u64 into an 8 byte buffer in big-endian order.
#[inline]
pub fn write_u64_be(dst: &mut [u8], n: u64) {
    assert!(dst.len() == 8);
    dst.copy_from_slice(&n.to_be_bytes());
}

/// Write a slice of u32s into a byte buffer in big-endian order. The
/// destination decides how many words are written, which is how truncated
/// digests are produced: `dst` must hold a whole number of words and no more
/// words than `src` has.
pub fn write_u32v_be(dst: &mut [u8], src: &[u32]) {
    assert!(dst.len() % 4 == 0);
    assert!(dst.len() <= src.len() * 4);
    for (chunk, word) in dst.chunks_exact_mut(4).zip(src) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Write a slice of u64s into a byte buffer in big-endian order. Same
/// contract as [`write_u32v_be`].
pub fn write_u64v_be(dst: &mut [u8], src: &[u64]) {
    assert!(dst.len() % 8 == 0);
    assert!(dst.len() <= src.len() * 8);
    for (chunk, word) in dst.chunks_exact_mut(8).zip(src) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Read a vector of bytes into a vector of u32s. The values are read in
/// big-endian format.
pub fn read_u32v_be(dst: &mut [u32], src: &[u8]) {
    assert!(dst.len() * 4 == src.len());
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Read a vector of bytes into a vector of u64s. The values are read in
/// big-endian format.
pub fn read_u64v_be(dst: &mut [u64], src: &[u8]) {
    assert!(dst.len() * 8 == src.len());
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_be_bytes(bytes);
    }
}

/// Adds the specified number of bytes to the bit count. The count wraps
/// modulo 2^64, the width of the length field written by the 64 byte block
/// hashes.
#[inline]
pub fn add_bytes_to_bits(bits: u64, bytes: u64) -> u64 {
    bits.wrapping_add(bytes << 3)
}

/// Adds the specified number of bytes to a 128 bit count held as
/// `(high, low)`. A carry out of the low word increments the high word and
/// the whole count wraps modulo 2^128.
#[inline]
pub fn add_bytes_to_bits_tuple(bits: (u64, u64), bytes: u64) -> (u64, u64) {
    let (hi, low) = bits;
    let new_high_bits = bytes >> 61;
    let new_low_bits = bytes << 3;

    let (low, carry) = low.overflowing_add(new_low_bits);
    let hi = hi.wrapping_add(new_high_bits).wrapping_add(carry as u64);
    (hi, low)
}
