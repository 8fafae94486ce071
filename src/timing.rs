//! Module: timing
//!
//! Purpose: Protocol timing model for OOK pulse-pair transmission.
//! A protocol is a pair of phase durations for the synchronization
//! frame and for each of the two data-bit shapes, plus a polarity flag.
//!
//! Architecture:
//! - All durations derive from a protocol clock unit multiplied by small
//!   integers, computed once via `const fn` (zero cost on the send path)
//! - Tables are plain slices: no heap, no runtime construction
//!
//! Safety: Safe. No unsafe blocks. Copy types only.

use core::fmt;

/// Two consecutive line-level phases (A then B) of specified durations.
///
/// The atomic unit of transmission. Phase levels are not stored here;
/// they follow from the owning [`TimingSpec`]'s polarity flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulsePair {
    /// Duration of the first phase (pulse A) in microseconds.
    pub duration_a_us: u32,

    /// Duration of the second phase (pulse B) in microseconds.
    pub duration_b_us: u32,
}

impl PulsePair {
    /// Create a pulse pair from explicit microsecond durations.
    pub const fn new(duration_a_us: u32, duration_b_us: u32) -> Self {
        Self {
            duration_a_us,
            duration_b_us,
        }
    }
}

/// One remote-control protocol's complete transmit timing.
///
/// Normal level protocols drive pulse A high and pulse B low:
///
/// ```text
///      ___________
/// XXXX|           |____________|XXXX
///     ^  pulse A  ^  pulse B   ^
/// ```
///
/// Inverse level protocols start with a low level instead; pulse B is
/// always the complementary level of pulse A.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingSpec {
    /// True if pulse A is logic-low (inverse level protocol).
    pub inverse_level: bool,

    /// Synchronization pulse pair framing each message repetition.
    pub synch: PulsePair,

    /// Pulse pair encoding a logical 0 data bit.
    pub data0: PulsePair,

    /// Pulse pair encoding a logical 1 data bit.
    pub data1: PulsePair,
}

impl TimingSpec {
    /// Calculate a timing specification from a protocol definition.
    ///
    /// Every duration is `clock_us * multiple`. Being a `const fn`, a
    /// table of specs built from protocol constants is fully evaluated
    /// at compile time, which keeps the transmit loop free of any
    /// derivation work.
    ///
    /// # Arguments
    ///
    /// * `clock_us` - Protocol clock unit in microseconds
    /// * `synch_a`, `synch_b` - Clock multiples of the synch pulse pair
    /// * `data0_a`, `data0_b` - Clock multiples of the logical-0 pair
    /// * `data1_a`, `data1_b` - Clock multiples of the logical-1 pair
    /// * `inverse_level` - Whether pulse A is logic-low
    #[allow(clippy::too_many_arguments)]
    pub const fn from_clock_multiples(
        clock_us: u32,
        synch_a: u32,
        synch_b: u32,
        data0_a: u32,
        data0_b: u32,
        data1_a: u32,
        data1_b: u32,
        inverse_level: bool,
    ) -> Self {
        Self {
            inverse_level,
            synch: PulsePair::new(clock_us * synch_a, clock_us * synch_b),
            data0: PulsePair::new(clock_us * data0_a, clock_us * data0_b),
            data1: PulsePair::new(clock_us * data1_a, clock_us * data1_b),
        }
    }
}

/// Ordered, read-only collection of timing specifications.
///
/// A thin wrapper over a borrowed slice: index-addressable, never
/// reallocates, and `Copy` so it can be handed to an engine by value.
/// Out-of-bounds lookup yields `None`, never a panic; the transmission
/// engine turns that into a request failure.
#[derive(Clone, Copy, Debug)]
pub struct TimingSpecTable<'a> {
    specs: &'a [TimingSpec],
}

impl<'a> TimingSpecTable<'a> {
    /// Wrap a slice of timing specifications.
    pub const fn new(specs: &'a [TimingSpec]) -> Self {
        Self { specs }
    }

    /// Number of protocols in the table.
    pub const fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if the table holds no protocols.
    pub const fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Look up the timing specification at `index`.
    pub fn get(&self, index: usize) -> Option<&'a TimingSpec> {
        self.specs.get(index)
    }

    /// Dump the table as a human-readable grid, one row per protocol.
    ///
    /// Row format: index, polarity digit, then the three pulse pairs in
    /// fixed-width microsecond fields. Diagnostic aid only; has no
    /// effect on transmission.
    ///
    /// ```text
    ///  i,p,{<----SYNCH-->}{<---DATA 0-->}{<---DATA 1-->}
    ///      PulseA,PulseB  PulseA,PulseB  PulseA,PulseB
    ///  0,0,{   350, 10850}{   350,  1050}{  1050,   350}
    /// ```
    pub fn dump(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, " i,p,{{<----SYNCH-->}}{{<---DATA 0-->}}{{<---DATA 1-->}}")?;
        writeln!(w, "      PulseA,PulseB  PulseA,PulseB  PulseA,PulseB")?;

        for (i, spec) in self.specs.iter().enumerate() {
            write!(w, "{:2},{},", i, if spec.inverse_level { 1 } else { 0 })?;
            for pair in [&spec.synch, &spec.data0, &spec.data1] {
                write!(w, "{{{:6},{:6}}}", pair.duration_a_us, pair.duration_b_us)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}
