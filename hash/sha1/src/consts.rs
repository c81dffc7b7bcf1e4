pub const STATE_LEN: usize = 5;
pub const BLOCK_LEN: usize = 16;

/// Initial hash value H(0) for SHA-1.
pub const H: [u32; STATE_LEN] = [
    0x67452301,
    0xefcdab89,
    0x98badcfe,
    0x10325476,
    0xc3d2e1f0,
];

// Round constants, one per group of 20 rounds.
pub const K_0_TO_19: u32 = 0x5a827999;
pub const K_20_TO_39: u32 = 0x6ed9eba1;
pub const K_40_TO_59: u32 = 0x8f1bbcdc;
pub const K_60_TO_79: u32 = 0xca62c1d6;
