/// Initial digest state.
pub(crate) const S0: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// Round 2 additive constant, derived from the square root of 2.
pub(crate) const K1: u32 = 0x5a82_7999;

/// Round 3 additive constant, derived from the square root of 3.
pub(crate) const K2: u32 = 0x6ed9_eba1;
