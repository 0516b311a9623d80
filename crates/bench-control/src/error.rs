//! Error types for controller operations
//!
//! All of these are expected, recoverable domain conditions. Callers decide
//! whether to retry (stop the direction first, then re-issue) or give up.
//! The message text is for humans; match on the variants.

use thiserror::Error;

/// Errors from power control
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PowerError {
    /// Attempted power-off while TX or RX is still running
    #[error("cannot power off while TX or RX is active")]
    DirectionActive,
}

/// Errors from transmit control
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TxError {
    /// The equipment is not powered on
    #[error("equipment is not powered on")]
    NotPowered,

    /// A waveform change was requested while TX is running
    #[error("already transmitting: stop TX before changing waveform")]
    AlreadyTransmitting,
}

/// Errors from receive control
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RxError {
    /// The equipment is not powered on
    #[error("equipment is not powered on")]
    NotPowered,

    /// A port change was requested while RX is running
    #[error("already receiving: stop RX before changing port")]
    AlreadyReceiving,
}
