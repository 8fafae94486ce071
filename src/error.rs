//! Module: error
//!
//! Purpose: Result taxonomy for the transmission engine.
//!
//! Every validation failure is detected before the first line toggle, so
//! a failed `send` performs no observable hardware effect and may simply
//! be retried after fixing the call sequence. None of these conditions
//! is fatal.

use core::fmt;

/// Reasons a transmission request can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxError {
    /// `send` was called before `begin` installed a timing spec table.
    /// Recoverable: call `begin` and retry.
    NotInitialized,

    /// The requested protocol index is outside the installed table.
    /// Recoverable: pass an index below the table length.
    InvalidProtocolIndex,

    /// The bit count is zero or exceeds what the payload can hold.
    /// Detected before any line activity.
    InvalidBitCount,

    /// Reserved for a future non-blocking engine variant.
    /// The blocking engine never returns this.
    Busy,

    /// The output line driver reported a hardware fault.
    /// Unlike the validation errors above, this can interrupt a pulse
    /// train that has already started.
    Gpio,
}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TxError::NotInitialized => "no timing spec table installed",
            TxError::InvalidProtocolIndex => "protocol index out of table bounds",
            TxError::InvalidBitCount => "bit count is zero or exceeds payload width",
            TxError::Busy => "transmission already in progress",
            TxError::Gpio => "output line driver fault",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TxError::NotInitialized.to_string(),
            "no timing spec table installed"
        );
        assert_eq!(
            TxError::InvalidProtocolIndex.to_string(),
            "protocol index out of table bounds"
        );
        assert_eq!(TxError::Gpio.to_string(), "output line driver fault");
    }
}
