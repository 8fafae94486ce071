//! Module: protocols
//!
//! Purpose: Built-in timing specifications for common 433/315 MHz
//! remote control chipsets, usable as-is or as calibration reference
//! for custom tables.
//!
//! All entries are evaluated at compile time; referencing this table
//! costs nothing on the transmit path.

use crate::timing::{TimingSpec, TimingSpecTable};

/// Timing specifications for well-known OOK remote control protocols.
///
/// Index stability is part of the contract: existing indices keep their
/// meaning when new protocols are appended.
pub static DEFAULT_PROTOCOLS: [TimingSpec; 11] = [
    //                              clk, syA, syB, d0A, d0B, d1A, d1B, inverse
    TimingSpec::from_clock_multiples(350, 1, 31, 1, 3, 3, 1, false), // 0: PT2262
    TimingSpec::from_clock_multiples(650, 1, 10, 1, 3, 3, 1, false), // 1
    TimingSpec::from_clock_multiples(100, 30, 71, 4, 11, 9, 6, false), // 2
    TimingSpec::from_clock_multiples(380, 1, 6, 1, 3, 3, 1, false),  // 3
    TimingSpec::from_clock_multiples(500, 6, 14, 1, 2, 2, 1, false), // 4
    TimingSpec::from_clock_multiples(450, 1, 23, 1, 2, 2, 1, true),  // 5: HT6P20B
    TimingSpec::from_clock_multiples(150, 2, 62, 1, 6, 6, 1, false), // 6: HS2303-PT
    TimingSpec::from_clock_multiples(200, 3, 130, 7, 16, 3, 16, false), // 7: Conrad RS-200
    TimingSpec::from_clock_multiples(365, 1, 18, 3, 1, 1, 3, true),  // 8: 1ByOne Doorbell
    TimingSpec::from_clock_multiples(270, 1, 36, 1, 2, 2, 1, true),  // 9: HT12E
    TimingSpec::from_clock_multiples(320, 1, 36, 1, 2, 2, 1, true),  // 10: SM5212
];

/// Table over [`DEFAULT_PROTOCOLS`].
pub fn default_table() -> TimingSpecTable<'static> {
    TimingSpecTable::new(&DEFAULT_PROTOCOLS)
}
