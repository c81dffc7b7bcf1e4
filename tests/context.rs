//! Runtime context behaviour: published vectors, lifecycle and misuse.

use fips180::{digest, digest_hex, to_hex, Algorithm, HashContext, HashError};

const TWO_BLOCK_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const TWO_BLOCK_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
                               hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

struct Vector {
    algorithm: Algorithm,
    input: &'static [u8],
    output: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector { algorithm: Algorithm::Sha1, input: b"",
             output: "da39a3ee5e6b4b0d3255bfef95601890afd80709" },
    Vector { algorithm: Algorithm::Sha1, input: b"abc",
             output: "a9993e364706816aba3e25717850c26c9cd0d89d" },
    Vector { algorithm: Algorithm::Sha1, input: TWO_BLOCK_448,
             output: "84983e441c3bd26ebaae4aa1f95129e5e54670f1" },
    Vector { algorithm: Algorithm::Sha1, input: TWO_BLOCK_896,
             output: "a49b2446a02c645bf419f995b67091253a04a259" },

    Vector { algorithm: Algorithm::Sha224, input: b"",
             output: "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f" },
    Vector { algorithm: Algorithm::Sha224, input: b"abc",
             output: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7" },
    Vector { algorithm: Algorithm::Sha224, input: TWO_BLOCK_448,
             output: "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525" },
    Vector { algorithm: Algorithm::Sha224, input: TWO_BLOCK_896,
             output: "c97ca9a559850ce97a04a96def6d99a9e0e0e2ab14e6b8df265fc0b3" },

    Vector { algorithm: Algorithm::Sha256, input: b"",
             output: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855" },
    Vector { algorithm: Algorithm::Sha256, input: b"abc",
             output: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad" },
    Vector { algorithm: Algorithm::Sha256, input: TWO_BLOCK_448,
             output: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1" },
    Vector { algorithm: Algorithm::Sha256, input: TWO_BLOCK_896,
             output: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1" },

    Vector { algorithm: Algorithm::Sha384, input: b"",
             output: "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
                      274edebfe76f65fbd51ad2f14898b95b" },
    Vector { algorithm: Algorithm::Sha384, input: b"abc",
             output: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
                      8086072ba1e7cc2358baeca134c825a7" },
    Vector { algorithm: Algorithm::Sha384, input: TWO_BLOCK_448,
             output: "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6\
                      b0455a8520bc4e6f5fe95b1fe3c8452b" },
    Vector { algorithm: Algorithm::Sha384, input: TWO_BLOCK_896,
             output: "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712\
                      fcc7c71a557e2db966c3e9fa91746039" },

    Vector { algorithm: Algorithm::Sha512, input: b"",
             output: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                      47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e" },
    Vector { algorithm: Algorithm::Sha512, input: b"abc",
             output: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                      2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f" },
    Vector { algorithm: Algorithm::Sha512, input: TWO_BLOCK_448,
             output: "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c335\
                      96fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445" },
    Vector { algorithm: Algorithm::Sha512, input: TWO_BLOCK_896,
             output: "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
                      501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909" },
];

/// Route the context's tracing events to the test output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("fips180=trace"))
        .with_test_writer()
        .try_init();
}

#[test]
fn published_vectors() {
    init_tracing();
    for v in VECTORS {
        let mut ctx = HashContext::new(v.algorithm);
        ctx.update(v.input).unwrap();
        assert_eq!(ctx.finalize_hex().unwrap(), v.output, "{}", v.algorithm);

        assert_eq!(digest_hex(v.algorithm, v.input), v.output, "{} one shot", v.algorithm);
    }
}

#[test]
fn two_block_vector_split_at_every_offset() {
    for v in VECTORS.iter().filter(|v| v.input.len() > 3) {
        for split in 0..=v.input.len() {
            let (head, tail) = v.input.split_at(split);
            let mut ctx = HashContext::new(v.algorithm);
            ctx.update(head).unwrap();
            ctx.update(tail).unwrap();
            assert_eq!(ctx.finalize_hex().unwrap(), v.output, "{} split {}", v.algorithm, split);
        }
    }
}

#[test]
fn digest_length_and_hex_round_trip() {
    for alg in Algorithm::ALL {
        let out = digest(alg, b"The quick brown fox jumps over the lazy dog");
        assert_eq!(out.len(), alg.digest_len());
        assert_eq!(out.algorithm(), alg);

        let text = out.to_hex();
        assert_eq!(text.len(), 2 * alg.digest_len());
        assert_eq!(text, text.to_lowercase());
        assert_eq!(text, to_hex(&out));
        assert_eq!(text, format!("{}", out));
        assert_eq!(hex::decode(&text).unwrap(), out.as_bytes());
    }
}

#[test]
fn one_million_a_streamed() {
    let chunk = [b'a'; 1000];
    let mut ctx = HashContext::new(Algorithm::Sha256);
    for _ in 0..1000 {
        ctx.update(&chunk).unwrap();
    }
    assert_eq!(ctx.bit_len(), 8_000_000);
    assert_eq!(
        ctx.finalize_hex().unwrap(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn finalized_context_refuses_input() {
    init_tracing();
    for alg in Algorithm::ALL {
        let mut ctx = HashContext::new(alg);
        ctx.update(b"abc").unwrap();
        let first = ctx.finalize().unwrap();
        assert!(ctx.is_finalized());

        let refused = HashError::Finalized { algorithm: alg };
        assert_eq!(ctx.update(b"abc"), Err(refused.clone()));
        assert_eq!(ctx.finalize(), Err(refused.clone()));
        assert_eq!(ctx.finalize_hex(), Err(refused.clone()));
        assert_eq!(ctx.discard(), Err(refused));

        ctx.reset();
        ctx.update(b"abc").unwrap();
        assert_eq!(ctx.finalize().unwrap(), first);
    }
}

#[test]
fn reset_forgets_the_previous_message() {
    let mut ctx = HashContext::new(Algorithm::Sha512);
    ctx.update(b"some earlier message that never gets finalized").unwrap();
    ctx.reset();
    assert_eq!(ctx.bit_len(), 0);
    ctx.update(b"abc").unwrap();
    assert_eq!(ctx.finalize().unwrap(), digest(Algorithm::Sha512, b"abc"));

    // and after a completed message
    ctx.reset();
    ctx.update(b"").unwrap();
    assert_eq!(ctx.finalize().unwrap(), digest(Algorithm::Sha512, b""));
}

#[test]
fn discard_finalizes_without_output() {
    init_tracing();
    let mut ctx = HashContext::new(Algorithm::Sha224);
    ctx.update(b"secret").unwrap();
    ctx.discard().unwrap();
    assert!(ctx.is_finalized());
    assert_eq!(ctx.bit_len(), 0);
    assert_eq!(
        ctx.update(b"more"),
        Err(HashError::Finalized { algorithm: Algorithm::Sha224 })
    );
}

#[test]
fn finalize_into_checks_destination_length() {
    for alg in Algorithm::ALL {
        let mut ctx = HashContext::new(alg);
        ctx.update(b"abc").unwrap();

        let mut long = [0u8; 65];
        assert_eq!(
            ctx.finalize_into(&mut long),
            Err(HashError::OutputLength {
                algorithm: alg,
                expected: alg.digest_len(),
                actual: 65,
            })
        );
        assert_eq!(long, [0u8; 65]);

        let mut out = vec![0u8; alg.digest_len()];
        ctx.finalize_into(&mut out).unwrap();
        assert_eq!(out, digest(alg, b"abc").as_bytes());
    }
}

#[test]
fn clone_forks_a_context() {
    let mut ctx = HashContext::new(Algorithm::Sha1);
    ctx.update(b"The quick brown fox jumps over the lazy ").unwrap();
    let mut fork = ctx.clone();
    ctx.update(b"dog").unwrap();
    fork.update(b"cog").unwrap();
    assert_eq!(ctx.finalize_hex().unwrap(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
    assert_eq!(fork.finalize_hex().unwrap(), "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3");
}

#[test]
fn contexts_run_on_separate_threads() {
    let handles: Vec<_> = Algorithm::ALL
        .into_iter()
        .map(|alg| {
            std::thread::spawn(move || {
                let mut ctx = HashContext::new(alg);
                for _ in 0..100 {
                    ctx.update(b"abc").unwrap();
                }
                (alg, ctx.finalize().unwrap())
            })
        })
        .collect();

    let input = b"abc".repeat(100);
    for handle in handles {
        let (alg, out) = handle.join().unwrap();
        assert_eq!(out, digest(alg, &input));
    }
}
