use crypto_bytes::{add_bytes_to_bits, read_u32v_be, write_u32v_be, write_u64_be};
use crypto_digest::Digest;
use crypto_fixed_buffer::{FixedBuffer, FixedBuffer64, StandardPadding};
use generic_array::GenericArray;
use generic_array::typenum::{U28, U32, U64};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{STATE_LEN, BLOCK_LEN, K32, H224, H256};

#[inline(always)]
fn big_sigma0(a: u32) -> u32 { a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22) }

#[inline(always)]
fn big_sigma1(a: u32) -> u32 { a.rotate_right(6) ^ a.rotate_right(11) ^ a.rotate_right(25) }

#[inline(always)]
fn sigma0(a: u32) -> u32 { a.rotate_right(7) ^ a.rotate_right(18) ^ (a >> 3) }

#[inline(always)]
fn sigma1(a: u32) -> u32 { a.rotate_right(17) ^ a.rotate_right(19) ^ (a >> 10) }

// Choose
#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 { g ^ (e & (f ^ g)) }

// Majority
#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 { (a & b) ^ (a & c) ^ (b & c) }

/// Replace `w[t & 15]`, which holds `W[t - 16]`, with `W[t]`.
#[inline(always)]
fn schedule(w: &mut [u32; BLOCK_LEN], t: usize) -> u32 {
    if t >= 16 {
        w[t & 15] = sigma1(w[(t + 14) & 15])
            .wrapping_add(w[(t + 9) & 15])
            .wrapping_add(sigma0(w[(t + 1) & 15]))
            .wrapping_add(w[t & 15]);
    }
    w[t & 15]
}

/// Process a block with the SHA-256 algorithm.
#[cfg(not(feature = "unroll"))]
pub fn sha256_digest_block_u32(state: &mut [u32; STATE_LEN], block: &[u32; BLOCK_LEN]) {
    let mut w = *block;
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..64 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K32[t])
            .wrapping_add(schedule(&mut w, t));
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Process a block with the SHA-256 algorithm, eight rounds per step.
///
/// Each round is
///
/// ```ignore
/// h += big_sigma1(e) + ch(e, f, g) + K32[t] + w[t]; d += h;
/// h += big_sigma0(a) + maj(a, b, c);
/// ```
///
/// and the following round is called with the registers renamed to
/// `(h, a, b, c, d, e, f, g)`, so nothing is moved between rounds.
#[cfg(feature = "unroll")]
pub fn sha256_digest_block_u32(state: &mut [u32; STATE_LEN], block: &[u32; BLOCK_LEN]) {
    let mut w = *block;
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    macro_rules! round {
        ($a:ident, $b:ident, $c:ident, $d:ident,
         $e:ident, $f:ident, $g:ident, $h:ident, $t:expr) => {
            $h = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(K32[$t])
                .wrapping_add(schedule(&mut w, $t));
            $d = $d.wrapping_add($h);
            $h = $h
                .wrapping_add(big_sigma0($a))
                .wrapping_add(maj($a, $b, $c));
        };
    }

    macro_rules! rounds8 {
        ($t:expr) => {
            round!(a, b, c, d, e, f, g, h, $t);
            round!(h, a, b, c, d, e, f, g, $t + 1);
            round!(g, h, a, b, c, d, e, f, $t + 2);
            round!(f, g, h, a, b, c, d, e, $t + 3);
            round!(e, f, g, h, a, b, c, d, $t + 4);
            round!(d, e, f, g, h, a, b, c, $t + 5);
            round!(c, d, e, f, g, h, a, b, $t + 6);
            round!(b, c, d, e, f, g, h, a, $t + 7);
        };
    }

    rounds8!(0);
    rounds8!(8);
    rounds8!(16);
    rounds8!(24);
    rounds8!(32);
    rounds8!(40);
    rounds8!(48);
    rounds8!(56);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Process a 64 byte block with the SHA-256 algorithm. The block is read as
/// sixteen big-endian words.
pub fn sha256_digest_block(state: &mut [u32; STATE_LEN], block: &[u8]) {
    assert_eq!(block.len(), BLOCK_LEN * 4);
    let mut block2 = [0u32; BLOCK_LEN];
    read_u32v_be(&mut block2[..], block);
    sha256_digest_block_u32(state, &block2);
}

/// A structure that keeps track of the state of the Sha-256 operation and
/// contains the logic necessary to perform the final calculations. SHA-224
/// and SHA-256 share it and differ only in the initial hash value and in how
/// much of the final state they read out.
#[derive(Clone)]
pub struct Engine256 {
    length_bits: u64,
    buffer: FixedBuffer64,
    h: [u32; STATE_LEN],
}

impl Engine256 {
    pub fn new(h: &[u32; STATE_LEN]) -> Engine256 {
        Engine256 {
            length_bits: 0,
            buffer: FixedBuffer64::new(),
            h: *h,
        }
    }

    pub fn input(&mut self, input: &[u8]) {
        self.length_bits = add_bytes_to_bits(self.length_bits, input.len() as u64);
        let h = &mut self.h;
        self.buffer.input(input, |block: &[u8]| sha256_digest_block(h, block));
    }

    /// Number of message bits absorbed so far, modulo 2^64.
    pub fn length_bits(&self) -> u64 {
        self.length_bits
    }

    /// Pad the message, run the last one or two compressions and write the
    /// first `out.len() / 4` state words to `out`. The engine is wiped when
    /// it goes out of scope here.
    pub fn finish_into(mut self, out: &mut [u8]) {
        assert!(out.len() <= STATE_LEN * 4);

        let h = &mut self.h;
        self.buffer.standard_padding(8, |block: &[u8]| sha256_digest_block(h, block));
        write_u64_be(self.buffer.next(8), self.length_bits);
        sha256_digest_block(&mut self.h, self.buffer.full_buffer());

        write_u32v_be(out, &self.h);
    }
}

impl Zeroize for Engine256 {
    fn zeroize(&mut self) {
        self.length_bits.zeroize();
        self.buffer.zeroize();
        self.h.zeroize();
    }
}

impl Drop for Engine256 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Engine256 {}


/// The SHA-256 hash algorithm with the SHA-256 initial hash value.
#[derive(Clone)]
pub struct Sha256 {
    engine: Engine256,
}

impl Sha256 {
    /// Construct an new instance of a SHA-256 digest.
    pub fn new() -> Sha256 { Sha256 { engine: Engine256::new(&H256) } }
}

impl Default for Sha256 {
    fn default() -> Self { Self::new() }
}

impl Digest for Sha256 {
    type R = U32;
    type B = U64;

    fn input(&mut self, msg: &[u8]) { self.engine.input(msg); }

    fn result(self) -> GenericArray<u8, U32> {
        let mut out = GenericArray::default();
        self.engine.finish_into(&mut out);
        out
    }
}

/// The SHA-256 hash algorithm with the SHA-224 initial hash value. The result
/// is truncated to 224 bits.
#[derive(Clone)]
pub struct Sha224 {
    engine: Engine256,
}

impl Sha224 {
    /// Construct an new instance of a SHA-224 digest.
    pub fn new() -> Sha224 { Sha224 { engine: Engine256::new(&H224) } }
}

impl Default for Sha224 {
    fn default() -> Self { Self::new() }
}

impl Digest for Sha224 {
    type R = U28;
    type B = U64;

    fn input(&mut self, msg: &[u8]) { self.engine.input(msg); }

    fn result(self) -> GenericArray<u8, U28> {
        let mut out = GenericArray::default();
        self.engine.finish_into(&mut out);
        out
    }
}
