//! Module: transmitter
//!
//! Purpose: Bit-transmission engine. Walks a payload MSB first and
//! drives an output line through the synch/data/synch pulse framing of
//! a selected timing specification, blocking until the whole train has
//! been emitted.
//!
//! Architecture:
//! - `Engine` holds the installed table, repeat count and timing
//!   correction; it owns no hardware
//! - The output line and the busy-wait delay are passed in per call as
//!   `embedded-hal` traits, so the engine is testable on host with mocks
//! - `RcSwitchTransmitter` binds one engine to one pin/delay pair by
//!   composition and forwards calls
//!
//! Timing: `send` consumes wall-clock time equal to the sum of all
//! emitted pulse durations. That blocking IS the transmission; there is
//! no background task and no cancellation. On a preemptible host,
//! scheduler jitter directly degrades pulse-width accuracy.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::TxError;
use crate::timing::{PulsePair, TimingSpec, TimingSpecTable};

/// Width of one payload word in bits.
pub const WORD_BITS: usize = 32;

/// How many times the data portion (plus trailing synch) is repeated
/// per `send` when not configured otherwise.
///
/// A single unrepeated frame is rarely picked up reliably over a noisy
/// OOK channel; three repetitions is a workable floor for the cheap
/// receivers these protocols target.
pub const DEFAULT_REPEAT_COUNT: usize = 3;

/// Platform-dependent transmit configuration, resolved at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxConfig {
    /// Fixed per-platform timing correction in microseconds.
    ///
    /// Subtracted from every pulse phase before the busy-wait to
    /// compensate for the constant overhead of driving the line
    /// (floor at zero). Zero on platforms fast enough not to care.
    pub timing_correction_us: u32,
}

/// Blocking pulse-train transmission engine.
///
/// Owns the protocol table reference and the per-send framing
/// parameters, but no hardware: the output pin and delay provider are
/// supplied on each call. One engine serves one logical transmitter;
/// `&self` receivers keep the state read-only during a transmission.
pub struct Engine<'a> {
    table: Option<TimingSpecTable<'a>>,
    repeat_count: usize,
    config: TxConfig,
}

impl<'a> Engine<'a> {
    /// Create an engine with no table installed and default config.
    ///
    /// [`Engine::begin`] must be called before the first send.
    pub const fn new() -> Self {
        Self::with_config(TxConfig {
            timing_correction_us: 0,
        })
    }

    /// Create an engine with an explicit platform configuration.
    pub const fn with_config(config: TxConfig) -> Self {
        Self {
            table: None,
            repeat_count: DEFAULT_REPEAT_COUNT,
            config,
        }
    }

    /// Install the timing spec table used by all subsequent sends.
    pub fn begin(&mut self, table: TimingSpecTable<'a>) {
        log::debug!("timing spec table installed ({} protocols)", table.len());
        self.table = Some(table);
    }

    /// Set the repetition count, effective from the next send.
    ///
    /// Zero is clamped to one: every send emits the data at least once.
    pub fn set_repeat_count(&mut self, repeat_count: usize) {
        let repeat_count = repeat_count.max(1);
        log::debug!("repeat count set to {}", repeat_count);
        self.repeat_count = repeat_count;
    }

    /// Current repetition count.
    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    /// Current platform configuration.
    pub fn config(&self) -> TxConfig {
        self.config
    }

    /// Replace the platform configuration.
    pub fn set_config(&mut self, config: TxConfig) {
        self.config = config;
    }

    /// Transmit the low `bit_count` bits of `code`, MSB first.
    ///
    /// Blocks until the full pulse train (leading synch, then
    /// `repeat_count` times the data bits plus a trailing synch) has
    /// been emitted. `bit_count` must be in `1..=32`.
    pub fn send<P, D>(
        &self,
        pin: &mut P,
        delay: &mut D,
        protocol_index: usize,
        code: u32,
        bit_count: usize,
    ) -> Result<(), TxError>
    where
        P: OutputPin,
        D: DelayNs,
    {
        self.send_words(pin, delay, protocol_index, &[code], bit_count)
    }

    /// Transmit a payload spanning multiple 32-bit words, MSB first.
    ///
    /// The first word carries the most-significant bits: it contributes
    /// `bit_count - 32 * (words.len() - 1)` bits (taken from its low
    /// end), every following word a full 32. `bit_count` must satisfy
    /// `32 * (len - 1) < bit_count <= 32 * len`.
    ///
    /// Validation happens before any line activity; a failed call has
    /// no observable hardware effect. The exception is [`TxError::Gpio`],
    /// which reports a line driver fault and can cut a train short.
    pub fn send_words<P, D>(
        &self,
        pin: &mut P,
        delay: &mut D,
        protocol_index: usize,
        words: &[u32],
        bit_count: usize,
    ) -> Result<(), TxError>
    where
        P: OutputPin,
        D: DelayNs,
    {
        let Some(table) = self.table else {
            log::warn!("send rejected: no timing spec table installed");
            return Err(TxError::NotInitialized);
        };

        let Some(spec) = table.get(protocol_index) else {
            log::warn!(
                "send rejected: protocol index {} out of bounds (table has {})",
                protocol_index,
                table.len()
            );
            return Err(TxError::InvalidProtocolIndex);
        };

        if words.is_empty()
            || bit_count > words.len() * WORD_BITS
            || bit_count <= (words.len() - 1) * WORD_BITS
        {
            log::warn!(
                "send rejected: bit count {} does not fit {} payload word(s)",
                bit_count,
                words.len()
            );
            return Err(TxError::InvalidBitCount);
        }

        // Significant bits in the first (possibly partial) word.
        let first_word_bits = bit_count - (words.len() - 1) * WORD_BITS;

        // Synch at the beginning of the first repetition.
        self.transmit_pulse_pair(pin, delay, spec, &spec.synch)?;

        for _ in 0..self.repeat_count {
            for (i, &word) in words.iter().enumerate() {
                let bits = if i == 0 { first_word_bits } else { WORD_BITS };
                for bit in (0..bits).rev() {
                    let pair = if word & (1 << bit) != 0 {
                        &spec.data1
                    } else {
                        &spec.data0
                    };
                    self.transmit_pulse_pair(pin, delay, spec, pair)?;
                }
            }

            // Synch at the end of each repetition.
            self.transmit_pulse_pair(pin, delay, spec, &spec.synch)?;
        }

        Ok(())
    }

    /// Emit one pulse pair: level A for duration A, level B for
    /// duration B, each shortened by the fixed timing correction.
    ///
    /// The only place that touches the line or the delay provider.
    fn transmit_pulse_pair<P, D>(
        &self,
        pin: &mut P,
        delay: &mut D,
        spec: &TimingSpec,
        pair: &PulsePair,
    ) -> Result<(), TxError>
    where
        P: OutputPin,
        D: DelayNs,
    {
        let correction = self.config.timing_correction_us;

        let level_a = if spec.inverse_level {
            pin.set_low()
        } else {
            pin.set_high()
        };
        level_a.map_err(|_| TxError::Gpio)?;
        delay.delay_us(pair.duration_a_us.saturating_sub(correction));

        let level_b = if spec.inverse_level {
            pin.set_high()
        } else {
            pin.set_low()
        };
        level_b.map_err(|_| TxError::Gpio)?;
        delay.delay_us(pair.duration_b_us.saturating_sub(correction));

        Ok(())
    }
}

impl Default for Engine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// One logical transmitter bound to one physical output line.
///
/// Thin composition wrapper: owns the pin, the delay provider and an
/// [`Engine`], and forwards calls. Instances for different lines are
/// fully independent; the `&mut self` receivers make overlapping sends
/// on a single instance unrepresentable.
///
/// # Example
///
/// ```ignore
/// let mut tx433 = RcSwitchTransmitter::new(pin5, delay);
/// tx433.begin(default_table());
/// tx433.send(0, 0b0101_0101_0101, 12)?;
/// ```
pub struct RcSwitchTransmitter<'a, P, D> {
    pin: P,
    delay: D,
    engine: Engine<'a>,
}

impl<'a, P, D> RcSwitchTransmitter<'a, P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Bind a transmitter to an output pin and delay provider.
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            pin,
            delay,
            engine: Engine::new(),
        }
    }

    /// Bind with an explicit platform configuration.
    pub fn with_config(pin: P, delay: D, config: TxConfig) -> Self {
        Self {
            pin,
            delay,
            engine: Engine::with_config(config),
        }
    }

    /// Install the timing spec table used for transmitting.
    pub fn begin(&mut self, table: TimingSpecTable<'a>) {
        self.engine.begin(table);
    }

    /// Set the repetition count, effective from the next send.
    pub fn set_repeat_count(&mut self, repeat_count: usize) {
        self.engine.set_repeat_count(repeat_count);
    }

    /// Transmit the low `bit_count` bits of `code`, MSB first.
    pub fn send(
        &mut self,
        protocol_index: usize,
        code: u32,
        bit_count: usize,
    ) -> Result<(), TxError> {
        self.engine
            .send(&mut self.pin, &mut self.delay, protocol_index, code, bit_count)
    }

    /// Transmit a multi-word payload, first word most significant.
    pub fn send_words(
        &mut self,
        protocol_index: usize,
        words: &[u32],
        bit_count: usize,
    ) -> Result<(), TxError> {
        self.engine
            .send_words(&mut self.pin, &mut self.delay, protocol_index, words, bit_count)
    }

    /// Release the pin and delay provider.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults() {
        let engine = Engine::new();
        assert_eq!(engine.repeat_count(), DEFAULT_REPEAT_COUNT);
        assert_eq!(engine.config(), TxConfig::default());
    }

    #[test]
    fn test_repeat_count_zero_clamped() {
        let mut engine = Engine::new();
        engine.set_repeat_count(0);
        assert_eq!(engine.repeat_count(), 1);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut engine = Engine::new();
        engine.set_config(TxConfig {
            timing_correction_us: 40,
        });
        assert_eq!(engine.config().timing_correction_us, 40);
    }
}
