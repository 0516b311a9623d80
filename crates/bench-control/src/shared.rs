//! Thread-safe sharing of one controller instance
//!
//! One bench setup has one piece of test equipment, so every caller must end
//! up at the same controller. [`SharedController`] is a clone-able handle
//! that serializes all mutating operations through a single mutex; read
//! accessors go through [`snapshot`](SharedController::snapshot) so callers
//! never observe a transition half-applied.
//!
//! Preferred shape: the application's composition root constructs one
//! `SharedController` and hands clones to everything that needs it. For code
//! that genuinely needs process-wide sharing without plumbing a handle
//! through, [`SharedController::global`] offers a once-initialized holder
//! guarded by the same mutex discipline.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::controller::{ControllerSnapshot, RadioController};
use crate::error::{PowerError, RxError, TxError};
use crate::types::{RxPort, Waveform};

static GLOBAL: OnceLock<SharedController> = OnceLock::new();

/// Clone-able handle to a mutex-guarded [`RadioController`]
#[derive(Debug, Clone, Default)]
pub struct SharedController {
    inner: Arc<Mutex<RadioController>>,
}

impl SharedController {
    /// Create a handle owning a fresh controller in the initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared instance, created on first access
    pub fn global() -> &'static SharedController {
        GLOBAL.get_or_init(SharedController::new)
    }

    fn lock(&self) -> MutexGuard<'_, RadioController> {
        // Domain operations never panic while holding the lock, but a caller
        // panicking for unrelated reasons must not wedge the bench.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Energize or de-energize the equipment
    ///
    /// See [`RadioController::set_power`].
    pub fn set_power(&self, on: bool) -> Result<(), PowerError> {
        self.lock().set_power(on)
    }

    /// Arm, stop, or (illegally) re-arm the transmitter
    ///
    /// See [`RadioController::set_tx_waveform`].
    pub fn set_tx_waveform(&self, waveform: Waveform) -> Result<(), TxError> {
        self.lock().set_tx_waveform(waveform)
    }

    /// Arm, stop, or (illegally) re-arm the receiver
    ///
    /// See [`RadioController::set_rx_port`].
    pub fn set_rx_port(&self, port: RxPort) -> Result<(), RxError> {
        self.lock().set_rx_port(port)
    }

    /// Current/last-commanded TX waveform
    pub fn tx_waveform(&self) -> Waveform {
        self.lock().tx_waveform()
    }

    /// Current/last-commanded RX port
    pub fn rx_port(&self) -> RxPort {
        self.lock().rx_port()
    }

    /// Consistent copy of the full state, taken under the lock
    pub fn snapshot(&self) -> ControllerSnapshot {
        self.lock().snapshot()
    }
}
