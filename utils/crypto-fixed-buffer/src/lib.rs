//! Block buffering for the Merkle-Damgard hashes.
//!
//! A hash engine owns one of these buffers and hands it a compression
//! closure. The buffer takes care of bytes that do not yet form a whole
//! block and of the final padding.

#![cfg_attr(not(test), no_std)]
use zeroize::Zeroize;

/// A block sized buffer plus a fill position.
///
/// `input` compresses whole blocks as they form. The other methods touch the
/// buffer directly and leave compression to the caller; every byte they
/// write or hand out counts as used.
pub trait FixedBuffer {
    /// Feed `input` through the buffer. Each complete block is passed to
    /// `func` once, taken straight from `input` where possible, and whatever
    /// is left over (less than one block) stays buffered.
    fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], func: F);

    /// Zero from the current position up to `idx`, which becomes the new
    /// position. Panics if the position is already past `idx`.
    fn zero_until(&mut self, idx: usize);

    /// The next `len` unused bytes, now counted as used.
    fn next(&mut self, len: usize) -> &mut [u8];

    /// The whole block. The buffer must be full and is empty afterwards.
    fn full_buffer(&mut self) -> &[u8];

    /// Bytes currently held.
    fn position(&self) -> usize;

    /// Bytes that can be added before the block is full.
    fn remaining(&self) -> usize;

    /// Block size in bytes.
    fn size(&self) -> usize;
}

macro_rules! impl_fixed_buffer( ($name:ident, $size:expr) => (
    impl FixedBuffer for $name {
        fn input<F: FnMut(&[u8])>(&mut self, mut input: &[u8], mut func: F) {
            if self.buffer_idx != 0 {
                let take = input.len().min($size - self.buffer_idx);
                let (head, rest) = input.split_at(take);
                self.next(take).copy_from_slice(head);
                if self.buffer_idx < $size {
                    return;
                }
                func(self.full_buffer());
                input = rest;
            }

            let mut blocks = input.chunks_exact($size);
            for block in &mut blocks {
                func(block);
            }

            let tail = blocks.remainder();
            self.buffer[..tail.len()].copy_from_slice(tail);
            self.buffer_idx = tail.len();
        }

        fn zero_until(&mut self, idx: usize) {
            assert!(idx >= self.buffer_idx);
            self.buffer[self.buffer_idx..idx].fill(0);
            self.buffer_idx = idx;
        }

        fn next(&mut self, len: usize) -> &mut [u8] {
            let start = self.buffer_idx;
            self.buffer_idx += len;
            &mut self.buffer[start..self.buffer_idx]
        }

        fn full_buffer(&mut self) -> &[u8] {
            assert_eq!(self.buffer_idx, $size);
            self.buffer_idx = 0;
            &self.buffer
        }

        fn position(&self) -> usize { self.buffer_idx }

        fn remaining(&self) -> usize { $size - self.buffer_idx }

        fn size(&self) -> usize { $size }
    }

    impl Zeroize for $name {
        fn zeroize(&mut self) {
            self.buffer.zeroize();
            self.buffer_idx.zeroize();
        }
    }

    impl Default for $name {
        fn default() -> Self { Self::new() }
    }
));

/// A fixed size buffer of 64 bytes, the block size of SHA-1, SHA-224 and
/// SHA-256.
#[derive(Clone)]
pub struct FixedBuffer64 {
    buffer: [u8; 64],
    buffer_idx: usize,
}

impl FixedBuffer64 {
    pub const fn new() -> FixedBuffer64 {
        FixedBuffer64 {
            buffer: [0u8; 64],
            buffer_idx: 0,
        }
    }
}

impl_fixed_buffer!(FixedBuffer64, 64);

/// A fixed size buffer of 128 bytes, the block size of SHA-384 and SHA-512.
#[derive(Clone)]
pub struct FixedBuffer128 {
    buffer: [u8; 128],
    buffer_idx: usize,
}

impl FixedBuffer128 {
    pub const fn new() -> FixedBuffer128 {
        FixedBuffer128 {
            buffer: [0u8; 128],
            buffer_idx: 0,
        }
    }
}

impl_fixed_buffer!(FixedBuffer128, 128);

/// FIPS 180 message padding on top of a `FixedBuffer`.
pub trait StandardPadding {
    /// Append the `0x80` marker and zeros so that exactly `rem` bytes are
    /// left for the length field. The buffer must not be full on entry.
    ///
    /// When fewer than `rem` bytes are left after the marker, the block is
    /// zero filled and passed to `func`, and the padding continues in an
    /// empty block. Returns the number of calls to `func`, 0 or 1.
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, func: F) -> usize;
}

impl<T: FixedBuffer> StandardPadding for T {
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, mut func: F) -> usize {
        let size = self.size();
        let mut processed = 0;

        self.next(1)[0] = 0x80;

        if self.remaining() < rem {
            self.zero_until(size);
            func(self.full_buffer());
            processed += 1;
        }

        self.zero_until(size - rem);
        processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_blocks<B: FixedBuffer>(buf: &mut B, chunks: &[&[u8]]) -> Vec<Vec<u8>> {
        let mut blocks = Vec::new();
        for chunk in chunks {
            buf.input(chunk, |block| blocks.push(block.to_vec()));
        }
        blocks
    }

    #[test]
    fn partial_input_stays_buffered() {
        let mut buf = FixedBuffer64::new();
        let blocks = collect_blocks(&mut buf, &[&[1u8; 10], &[2u8; 20]]);
        assert!(blocks.is_empty());
        assert_eq!(buf.position(), 30);
        assert_eq!(buf.remaining(), 34);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut buf = FixedBuffer64::new();
        let blocks = collect_blocks(&mut buf, &[&[], &[7u8; 3], &[]]);
        assert!(blocks.is_empty());
        assert_eq!(buf.position(), 3);
    }

    #[test]
    fn topping_up_emits_one_block() {
        let mut buf = FixedBuffer64::new();
        let data: Vec<u8> = (0..100u8).collect();
        let blocks = collect_blocks(&mut buf, &[&data[..40], &data[40..]]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(&blocks[0][..], &data[..64]);
        assert_eq!(buf.position(), 36);

        // the tail is the start of the next block
        let next = collect_blocks(&mut buf, &[&data[..28]]);
        assert_eq!(&next[0][..36], &data[64..]);
    }

    #[test]
    fn block_sequence_does_not_depend_on_chunking() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();

        let mut whole = FixedBuffer128::new();
        let expected = collect_blocks(&mut whole, &[&data]);
        assert_eq!(expected.len(), 7);

        for split in [1usize, 7, 127, 128, 129, 300] {
            let mut buf = FixedBuffer128::new();
            let chunks: Vec<&[u8]> = data.chunks(split).collect();
            assert_eq!(collect_blocks(&mut buf, &chunks), expected, "split {}", split);
            assert_eq!(buf.position(), whole.position());
        }
    }

    fn padding_calls<B: FixedBuffer + Default>(used: usize, rem: usize) -> (usize, usize) {
        let mut buf = B::default();
        let data = vec![0xaau8; used];
        buf.input(&data, |_| panic!("no full block expected"));
        let mut calls = 0;
        let processed = buf.standard_padding(rem, |block| {
            calls += 1;
            assert_eq!(block[used], 0x80);
            assert!(block[used + 1..].iter().all(|&b| b == 0));
        });
        assert_eq!(processed, calls);
        assert_eq!(buf.remaining(), rem);
        (processed, buf.position())
    }

    #[test]
    fn padding_fits_in_current_block() {
        assert_eq!(padding_calls::<FixedBuffer64>(0, 8), (0, 56));
        assert_eq!(padding_calls::<FixedBuffer64>(55, 8), (0, 56));
        assert_eq!(padding_calls::<FixedBuffer128>(111, 16), (0, 112));
    }

    #[test]
    fn padding_spills_into_second_block() {
        assert_eq!(padding_calls::<FixedBuffer64>(56, 8), (1, 56));
        assert_eq!(padding_calls::<FixedBuffer64>(63, 8), (1, 56));
        assert_eq!(padding_calls::<FixedBuffer128>(112, 16), (1, 112));
        assert_eq!(padding_calls::<FixedBuffer128>(127, 16), (1, 112));
    }

    #[test]
    fn padding_writes_marker_then_zeros() {
        let mut buf = FixedBuffer64::new();
        buf.input(b"abc", |_| unreachable!());
        buf.standard_padding(8, |_| unreachable!());
        buf.next(8).copy_from_slice(&24u64.to_be_bytes());
        let block = buf.full_buffer();
        assert_eq!(&block[..4], b"abc\x80");
        assert!(block[4..56].iter().all(|&b| b == 0));
        assert_eq!(block[63], 24);
    }

    #[test]
    fn zeroize_clears_contents_and_position() {
        let mut buf = FixedBuffer128::new();
        buf.input(&[0xffu8; 50], |_| unreachable!());
        buf.zeroize();
        assert_eq!(buf.position(), 0);
        assert!(buf.next(128).iter().all(|&b| b == 0));
    }
}
