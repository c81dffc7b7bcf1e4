//! An implementation of the SHA-1 cryptographic hash algorithm.
//!
//! To use this module, first create a `Sha1` object using the `Sha1`
//! constructor, then feed it an input message using the `input` method,
//! which may be called any number of times.
//!
//! After the entire input has been fed to the hash read the result using
//! the `result` method. `result` consumes the hasher and wipes its state;
//! call `reset` instead of dropping it to hash another message with the same
//! instance.
//!
//! # Usage
//!
//! ```rust
//! use crypto_digest::Digest;
//! use crypto_sha1::Sha1;
//!
//! let mut hasher = Sha1::new();
//! hasher.input(b"hello ");
//! hasher.input(b"world");
//!
//! let out = hasher.result();
//! assert_eq!(out[..4], [0x2a, 0xae, 0x6c, 0x35]);
//! ```

#![cfg_attr(not(test), no_std)]

use crypto_bytes::{add_bytes_to_bits, read_u32v_be, write_u32v_be, write_u64_be};
pub use crypto_digest::Digest;
use crypto_fixed_buffer::{FixedBuffer, FixedBuffer64, StandardPadding};
use generic_array::GenericArray;
use generic_array::typenum::{U20, U64};
use zeroize::{Zeroize, ZeroizeOnDrop};

mod consts;
pub use consts::{STATE_LEN, BLOCK_LEN, H};
use consts::{K_0_TO_19, K_20_TO_39, K_40_TO_59, K_60_TO_79};

/// Size of the digest in bytes.
pub const DIGEST_LEN: usize = 20;

#[inline(always)]
fn ch(b: u32, c: u32, d: u32) -> u32 { d ^ (b & (c ^ d)) }

#[inline(always)]
fn parity(b: u32, c: u32, d: u32) -> u32 { b ^ c ^ d }

#[inline(always)]
fn maj(b: u32, c: u32, d: u32) -> u32 { (b & c) ^ (b & d) ^ (c & d) }

/// Process a block with the SHA-1 algorithm.
///
/// The message schedule lives in a 16 word ring: from round 16 on, slot
/// `t & 15` holds `W[t - 16]` until it is overwritten with `W[t]`.
#[cfg(not(feature = "unroll"))]
pub fn sha1_digest_block_u32(state: &mut [u32; STATE_LEN], block: &[u32; BLOCK_LEN]) {
    let mut w = *block;
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for t in 0..80 {
        if t >= 16 {
            let x = w[(t + 13) & 15] ^ w[(t + 8) & 15] ^ w[(t + 2) & 15] ^ w[t & 15];
            w[t & 15] = x.rotate_left(1);
        }

        let (f, k) = match t {
            0..=19 => (ch(b, c, d), K_0_TO_19),
            20..=39 => (parity(b, c, d), K_20_TO_39),
            40..=59 => (maj(b, c, d), K_40_TO_59),
            _ => (parity(b, c, d), K_60_TO_79),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(w[t & 15]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Process a block with the SHA-1 algorithm, unrolled five rounds at a time.
///
/// Instead of shifting the working registers after every round, each round
/// writes its result into the register that would have been discarded and
/// the next round renames the registers.
#[cfg(feature = "unroll")]
pub fn sha1_digest_block_u32(state: &mut [u32; STATE_LEN], block: &[u32; BLOCK_LEN]) {
    let mut w = *block;
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    macro_rules! schedule {
        ($t:expr) => {{
            if $t >= 16 {
                let x = w[($t + 13) & 15] ^ w[($t + 8) & 15] ^ w[($t + 2) & 15] ^ w[$t & 15];
                w[$t & 15] = x.rotate_left(1);
            }
            w[$t & 15]
        }};
    }

    macro_rules! round {
        ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $k:expr, $t:expr) => {
            $e = $e
                .wrapping_add($a.rotate_left(5))
                .wrapping_add($f($b, $c, $d))
                .wrapping_add($k)
                .wrapping_add(schedule!($t));
            $b = $b.rotate_left(30);
        };
    }

    macro_rules! rounds5 {
        ($f:ident, $k:expr, $t:expr) => {
            round!(a, b, c, d, e, $f, $k, $t);
            round!(e, a, b, c, d, $f, $k, $t + 1);
            round!(d, e, a, b, c, $f, $k, $t + 2);
            round!(c, d, e, a, b, $f, $k, $t + 3);
            round!(b, c, d, e, a, $f, $k, $t + 4);
        };
    }

    // Rounds 0..20
    rounds5!(ch, K_0_TO_19, 0);
    rounds5!(ch, K_0_TO_19, 5);
    rounds5!(ch, K_0_TO_19, 10);
    rounds5!(ch, K_0_TO_19, 15);

    // Rounds 20..40
    rounds5!(parity, K_20_TO_39, 20);
    rounds5!(parity, K_20_TO_39, 25);
    rounds5!(parity, K_20_TO_39, 30);
    rounds5!(parity, K_20_TO_39, 35);

    // Rounds 40..60
    rounds5!(maj, K_40_TO_59, 40);
    rounds5!(maj, K_40_TO_59, 45);
    rounds5!(maj, K_40_TO_59, 50);
    rounds5!(maj, K_40_TO_59, 55);

    // Rounds 60..80
    rounds5!(parity, K_60_TO_79, 60);
    rounds5!(parity, K_60_TO_79, 65);
    rounds5!(parity, K_60_TO_79, 70);
    rounds5!(parity, K_60_TO_79, 75);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Process a 64 byte block with the SHA-1 algorithm. The block is read as
/// sixteen big-endian words.
pub fn sha1_digest_block(state: &mut [u32; STATE_LEN], block: &[u8]) {
    assert_eq!(block.len(), BLOCK_LEN * 4);
    let mut block2 = [0u32; BLOCK_LEN];
    read_u32v_be(&mut block2[..], block);
    sha1_digest_block_u32(state, &block2);
}

/// The buffering, length counting and padding around the SHA-1 compression
/// function. Dropping an engine wipes it.
#[derive(Clone)]
pub struct Engine160 {
    length_bits: u64,
    buffer: FixedBuffer64,
    h: [u32; STATE_LEN],
}

impl Engine160 {
    pub fn new() -> Engine160 {
        Engine160 {
            length_bits: 0,
            buffer: FixedBuffer64::new(),
            h: H,
        }
    }

    pub fn input(&mut self, input: &[u8]) {
        self.length_bits = add_bytes_to_bits(self.length_bits, input.len() as u64);
        let h = &mut self.h;
        self.buffer.input(input, |block: &[u8]| sha1_digest_block(h, block));
    }

    /// Number of message bits absorbed so far, modulo 2^64.
    pub fn length_bits(&self) -> u64 {
        self.length_bits
    }

    /// Pad the message, run the last one or two compressions and write the
    /// first `out.len() / 4` state words to `out`. The engine is wiped when
    /// it goes out of scope here.
    pub fn finish_into(mut self, out: &mut [u8]) {
        assert!(out.len() <= DIGEST_LEN);

        let h = &mut self.h;
        self.buffer.standard_padding(8, |block: &[u8]| sha1_digest_block(h, block));
        write_u64_be(self.buffer.next(8), self.length_bits);
        sha1_digest_block(&mut self.h, self.buffer.full_buffer());

        write_u32v_be(out, &self.h);
    }
}

impl Default for Engine160 {
    fn default() -> Self { Self::new() }
}

impl Zeroize for Engine160 {
    fn zeroize(&mut self) {
        self.length_bits.zeroize();
        self.buffer.zeroize();
        self.h.zeroize();
    }
}

impl Drop for Engine160 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Engine160 {}

/// Structure representing the state of a Sha1 computation
#[derive(Clone, Default)]
pub struct Sha1 {
    engine: Engine160,
}

impl Sha1 {
    /// Construct a `Sha1` object
    pub fn new() -> Sha1 { Sha1 { engine: Engine160::new() } }
}

impl Digest for Sha1 {
    type R = U20;
    type B = U64;

    fn input(&mut self, msg: &[u8]) { self.engine.input(msg); }

    fn result(self) -> GenericArray<u8, U20> {
        let mut out = GenericArray::default();
        self.engine.finish_into(&mut out);
        out
    }
}
