//! # rc-switch-tx
//!
//! Transmit-only OOK remote control core for cheap 433/315 MHz ISM-band
//! receivers (PT2262, HT12E and friends).
//!
//! ## Architecture
//!
//! Everything flows through precomputed [`TimingSpec`] tables and one
//! blocking [`Engine`]:
//!
//! ```text
//! protocol constants --const fn--> TimingSpecTable
//!                                       | begin()
//!                                       v
//! send(index, code, bits) --------> Engine --pulse pairs--> OutputPin + DelayNs
//! ```
//!
//! - Timing tables are built at compile time; the send path does no
//!   derivation, no allocation, no locking
//! - Hardware is reached only through `embedded-hal` traits, so the
//!   whole crate tests on host with mock pins
//! - [`whitening`] is a standalone, self-inverse payload scrambler
//!
//! Transmission is synchronous: `send` blocks for the full duration of
//! the pulse train. Receiving/decoding is out of scope.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod protocols;
pub mod timing;
pub mod transmitter;
pub mod whitening;

pub use error::TxError;
pub use protocols::{default_table, DEFAULT_PROTOCOLS};
pub use timing::{PulsePair, TimingSpec, TimingSpecTable};
pub use transmitter::{Engine, RcSwitchTransmitter, TxConfig, DEFAULT_REPEAT_COUNT};
pub use whitening::{whiten, whiten_into};
