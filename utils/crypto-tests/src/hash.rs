use crypto_digest::Digest;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

/// Builds a `[Test; N]` from `data/<name>.input` and `data/<name>.output`
/// next to the invoking source file. Outputs are raw digest bytes.
#[macro_export]
macro_rules! new_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            $crate::hash::Test {
                name: $name,
                input: include_bytes!(concat!("data/", $name, ".input")),
                output: include_bytes!(concat!("data/", $name, ".output")),
            },
        )*]
    };
}

fn check<D: Digest>(t: &Test, sh: D, how: &str) {
    assert_eq!(sh.output_bytes(), t.output.len(), "{}: output length", t.name);
    let out = sh.result();
    assert_eq!(out[..], t.output[..], "{} ({})", t.name, how);
}

pub fn main_test<D: Digest>(tests: &[Test]) {
    // Test that it works when accepting the message all at once
    for t in tests.iter() {
        let mut sh = D::new();
        sh.input(t.input);
        check(t, sh, "all at once");
    }

    // Test that it works when accepting the message in pieces
    for t in tests.iter() {
        let mut sh = D::new();
        let len = t.input.len();
        let mut left = len;
        while left > 0 {
            let take = (left + 1) / 2;
            sh.input(&t.input[len - left..take + len - left]);
            left -= take;
        }
        check(t, sh, "halving pieces");
    }

    // One byte at a time, with empty updates in between
    for t in tests.iter() {
        let mut sh = D::new();
        for byte in t.input.chunks(1) {
            sh.input(byte);
            sh.input(&[]);
        }
        check(t, sh, "byte at a time");
    }

    // The one-shot helper and a reused, reset instance agree
    for t in tests.iter() {
        assert_eq!(D::digest(t.input)[..], t.output[..], "{} (one shot)", t.name);

        let mut sh = D::new();
        sh.input(b"residue from an earlier message");
        sh.reset();
        sh.input(t.input);
        check(t, sh, "after reset");
    }
}

pub fn one_million_a<D: Digest>(expected: &[u8]) {
    let mut sh = D::new();
    for _ in 0..50000 {
        sh.input(&[b'a'; 10]);
    }
    sh.input(&[b'a'; 500000]);
    let out = sh.result();
    assert_eq!(out[..], expected[..]);
}

/// Feed 1,000,000 'a's into the digest with varying input sizes and check that
/// the result is correct.
pub fn one_million_random<D: Digest>(expected: &[u8]) {
    let total_size = 1000000;
    let mut sh = D::new();
    let blocksize = sh.block_bytes();
    let buffer = vec![b'a'; blocksize * 2];
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut count = 0;

    while count < total_size {
        let next = rng.gen_range(0..=2 * blocksize);
        let size = next.min(total_size - count);
        sh.input(&buffer[..size]);
        count += size;
    }

    let out = sh.result();
    assert_eq!(out[..], expected[..]);
}
