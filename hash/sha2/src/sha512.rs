use crypto_bytes::{add_bytes_to_bits_tuple, read_u64v_be, write_u64v_be, write_u64_be};
use crypto_digest::Digest;
use crypto_fixed_buffer::{FixedBuffer, FixedBuffer128, StandardPadding};
use generic_array::GenericArray;
use generic_array::typenum::{U48, U64, U128};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{STATE_LEN, BLOCK_LEN, K64, H384, H512};

#[inline(always)]
fn big_sigma0(a: u64) -> u64 { a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39) }

#[inline(always)]
fn big_sigma1(a: u64) -> u64 { a.rotate_right(14) ^ a.rotate_right(18) ^ a.rotate_right(41) }

#[inline(always)]
fn sigma0(a: u64) -> u64 { a.rotate_right(1) ^ a.rotate_right(8) ^ (a >> 7) }

#[inline(always)]
fn sigma1(a: u64) -> u64 { a.rotate_right(19) ^ a.rotate_right(61) ^ (a >> 6) }

#[inline(always)]
fn ch(e: u64, f: u64, g: u64) -> u64 { g ^ (e & (f ^ g)) }

#[inline(always)]
fn maj(a: u64, b: u64, c: u64) -> u64 { (a & b) ^ (a & c) ^ (b & c) }

#[inline(always)]
fn schedule(w: &mut [u64; BLOCK_LEN], t: usize) -> u64 {
    if t >= 16 {
        w[t & 15] = sigma1(w[(t + 14) & 15])
            .wrapping_add(w[(t + 9) & 15])
            .wrapping_add(sigma0(w[(t + 1) & 15]))
            .wrapping_add(w[t & 15]);
    }
    w[t & 15]
}

/// Process a block with the SHA-512 algorithm.
#[cfg(not(feature = "unroll"))]
pub fn sha512_digest_block_u64(state: &mut [u64; STATE_LEN], block: &[u64; BLOCK_LEN]) {
    let mut w = *block;
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..80 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K64[t])
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

/// Process a block with the SHA-512 algorithm, eight rounds per step. Same
/// register renaming as the unrolled SHA-256 block function.
#[cfg(feature = "unroll")]
pub fn sha512_digest_block_u64(state: &mut [u64; STATE_LEN], block: &[u64; BLOCK_LEN]) {
    let mut w = *block;
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    macro_rules! round {
        ($a:ident, $b:ident, $c:ident, $d:ident,
         $e:ident, $f:ident, $g:ident, $h:ident, $t:expr) => {
            $h = $h
                .wrapping_add(big_sigma1($e))
                .wrapping_add(ch($e, $f, $g))
                .wrapping_add(K64[$t])
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

    // Rounds 0..40
    rounds8!(0);
    rounds8!(8);
    rounds8!(16);
    rounds8!(24);
    rounds8!(32);

    // Rounds 40..80
    rounds8!(40);
    rounds8!(48);
    rounds8!(56);
    rounds8!(64);
    rounds8!(72);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Process a 128 byte block with the SHA-512 algorithm. The block is read as
/// sixteen big-endian words.
pub fn sha512_digest_block(state: &mut [u64; STATE_LEN], block: &[u8]) {
    assert_eq!(block.len(), BLOCK_LEN * 8);
    let mut block2 = [0u64; BLOCK_LEN];
    read_u64v_be(&mut block2[..], block);
    sha512_digest_block_u64(state, &block2);
}

/// A structure that keeps track of the state of the Sha-512 operation and
/// contains the logic necessary to perform the final calculations.
///
/// The message length is a 128 bit quantity kept as `(high, low)` words,
/// because the SHA-512 padding reserves 16 bytes for it.
#[derive(Clone)]
pub struct Engine512 {
    length_bits: (u64, u64),
    buffer: FixedBuffer128,
    h: [u64; STATE_LEN],
}

impl Engine512 {
    pub fn new(h: &[u64; STATE_LEN]) -> Engine512 {
        Engine512 {
            length_bits: (0, 0),
            buffer: FixedBuffer128::new(),
            h: *h,
        }
    }

    pub fn input(&mut self, input: &[u8]) {
        self.length_bits = add_bytes_to_bits_tuple(self.length_bits, input.len() as u64);
        let h = &mut self.h;
        self.buffer.input(input, |block: &[u8]| sha512_digest_block(h, block));
    }

    /// Number of message bits absorbed so far, modulo 2^128.
    pub fn length_bits(&self) -> u128 {
        let (hi, low) = self.length_bits;
        (u128::from(hi) << 64) | u128::from(low)
    }

    /// Pad the message, run the last one or two compressions and write the
    /// first `out.len() / 8` state words to `out`. The engine is wiped when
    /// it goes out of scope here.
    pub fn finish_into(mut self, out: &mut [u8]) {
        assert!(out.len() <= STATE_LEN * 8);

        let h = &mut self.h;
        self.buffer.standard_padding(16, |block: &[u8]| sha512_digest_block(h, block));
        let (hi, low) = self.length_bits;
        write_u64_be(self.buffer.next(8), hi);
        write_u64_be(self.buffer.next(8), low);
        sha512_digest_block(&mut self.h, self.buffer.full_buffer());

        write_u64v_be(out, &self.h);
    }
}

impl Zeroize for Engine512 {
    fn zeroize(&mut self) {
        self.length_bits.0.zeroize();
        self.length_bits.1.zeroize();
        self.buffer.zeroize();
        self.h.zeroize();
    }
}

impl Drop for Engine512 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Engine512 {}


/// The SHA-512 hash algorithm with the SHA-512 initial hash value.
#[derive(Clone)]
pub struct Sha512 {
    engine: Engine512,
}

impl Sha512 {
    /// Construct an new instance of a SHA-512 digest.
    pub fn new() -> Sha512 { Sha512 { engine: Engine512::new(&H512) } }
}

impl Default for Sha512 {
    fn default() -> Self { Self::new() }
}

impl Digest for Sha512 {
    type R = U64;
    type B = U128;

    fn input(&mut self, msg: &[u8]) { self.engine.input(msg); }

    fn result(self) -> GenericArray<u8, U64> {
        let mut out = GenericArray::default();
        self.engine.finish_into(&mut out);
        out
    }
}


/// The SHA-512 hash algorithm with the SHA-384 initial hash value. The result
/// is truncated to 384 bits.
#[derive(Clone)]
pub struct Sha384 {
    engine: Engine512,
}

impl Sha384 {
    /// Construct an new instance of a SHA-384 digest.
    pub fn new() -> Sha384 { Sha384 { engine: Engine512::new(&H384) } }
}

impl Default for Sha384 {
    fn default() -> Self { Self::new() }
}

impl Digest for Sha384 {
    type R = U48;
    type B = U128;

    fn input(&mut self, msg: &[u8]) { self.engine.input(msg); }

    fn result(self) -> GenericArray<u8, U48> {
        let mut out = GenericArray::default();
        self.engine.finish_into(&mut out);
        out
    }
}
