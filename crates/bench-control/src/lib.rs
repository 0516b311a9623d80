//! Bench Control Library
//!
//! This crate models a shared radio test-equipment controller. One bench
//! setup has exactly one piece of test equipment, and every caller drives
//! the same instance, so the controller enforces the interlock rules that
//! keep the bench in a consistent state:
//!
//! - Power cannot be cut while the transmitter or receiver is running.
//! - The active waveform/port cannot change mid-run; the direction must be
//!   stopped (commanded to `None`) and re-armed with the new value.
//!
//! All rule violations surface as typed errors; the controller never panics
//! and never mutates state on a failed operation.
//!
//! # Example
//!
//! ```rust
//! use bench_control::{RadioController, TxError, Waveform};
//!
//! let mut radio = RadioController::new();
//! radio.set_power(true).unwrap();
//! radio.set_tx_waveform(Waveform::Qpsk).unwrap();
//!
//! // Changing the waveform mid-transmission is rejected
//! assert_eq!(
//!     radio.set_tx_waveform(Waveform::Qam256),
//!     Err(TxError::AlreadyTransmitting)
//! );
//!
//! // Stop first, then re-arm
//! radio.set_tx_waveform(Waveform::None).unwrap();
//! radio.set_tx_waveform(Waveform::Qam256).unwrap();
//! ```
//!
//! For multi-caller setups, [`SharedController`] wraps the controller in a
//! clone-able handle that serializes every operation through one lock.

pub mod controller;
pub mod error;
pub mod shared;
pub mod types;

pub use controller::{ControllerSnapshot, RadioController};
pub use error::{PowerError, RxError, TxError};
pub use shared::SharedController;
pub use types::{RxPort, Waveform};
