//! The radio test-equipment state machine
//!
//! Tracks power/TX/RX state and enforces transition legality:
//!
//! - Power-off is rejected while either direction is running.
//! - Arming TX or RX requires power.
//! - A running direction only accepts the `None` command (stop); any other
//!   value is rejected and state is left untouched.
//!
//! One quirk is carried over from the reference equipment deliberately:
//! commanding `None` while a direction is idle arms that direction with
//! value `None` instead of being a no-op. Callers that want a strict no-op
//! should check the accessors first. See the tests for the exact shape.

use tracing::{debug, info, warn};

use crate::error::{PowerError, RxError, TxError};
use crate::types::{RxPort, Waveform};

/// Consistent point-in-time copy of the controller state
///
/// Snapshots are what presentation layers should render from; they are taken
/// atomically by [`SharedController`](crate::SharedController) so no caller
/// ever observes a half-applied transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerSnapshot {
    /// Equipment is energized
    pub powered: bool,
    /// TX direction is running
    pub transmitting: bool,
    /// RX direction is running
    pub receiving: bool,
    /// Current/last-commanded waveform
    pub tx_waveform: Waveform,
    /// Current/last-commanded port
    pub rx_port: RxPort,
}

/// The shared test-equipment controller
///
/// Owns the power/TX/RX state for one piece of bench equipment. All state
/// changes go through [`set_power`](Self::set_power),
/// [`set_tx_waveform`](Self::set_tx_waveform) and
/// [`set_rx_port`](Self::set_rx_port); a failed operation leaves the state
/// exactly as it was.
#[derive(Debug, Default)]
pub struct RadioController {
    powered: bool,
    transmitting: bool,
    receiving: bool,
    tx_waveform: Waveform,
    rx_port: RxPort,
}

impl RadioController {
    /// Create a controller in the all-idle, unpowered state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the equipment is powered on
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Whether TX is currently running
    pub fn is_transmitting(&self) -> bool {
        self.transmitting
    }

    /// Whether RX is currently running
    pub fn is_receiving(&self) -> bool {
        self.receiving
    }

    /// Current/last-commanded TX waveform (`None` while TX idle)
    pub fn tx_waveform(&self) -> Waveform {
        self.tx_waveform
    }

    /// Current/last-commanded RX port (`None` while RX idle)
    pub fn rx_port(&self) -> RxPort {
        self.rx_port
    }

    /// Copy the full state for consistent display
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            powered: self.powered,
            transmitting: self.transmitting,
            receiving: self.receiving,
            tx_waveform: self.tx_waveform,
            rx_port: self.rx_port,
        }
    }

    /// Energize or de-energize the equipment
    ///
    /// Powering on always succeeds. Powering off is rejected with
    /// [`PowerError::DirectionActive`] while TX or RX is running; both
    /// directions must be stopped first.
    pub fn set_power(&mut self, on: bool) -> Result<(), PowerError> {
        if !on {
            if self.transmitting || self.receiving {
                warn!("Power-off rejected: TX or RX still active");
                return Err(PowerError::DirectionActive);
            }
            info!("Equipment powered off");
            self.powered = false;
        } else {
            info!("Equipment powered on");
            self.powered = true;
        }
        Ok(())
    }

    /// Arm, stop, or (illegally) re-arm the transmitter
    ///
    /// Requires power. From idle, any waveform arms TX with that value —
    /// including `None`, the carried-over quirk. While running, `None`
    /// stops TX and any other value is rejected with
    /// [`TxError::AlreadyTransmitting`].
    pub fn set_tx_waveform(&mut self, waveform: Waveform) -> Result<(), TxError> {
        if !self.powered {
            warn!("TX command rejected: equipment not powered");
            return Err(TxError::NotPowered);
        }

        if !self.transmitting {
            self.transmitting = true;
            self.tx_waveform = waveform;
            info!("TX armed with waveform {}", waveform.name());
        } else if waveform == Waveform::None {
            self.transmitting = false;
            self.tx_waveform = Waveform::None;
            info!("TX stopped");
        } else {
            warn!(
                "TX waveform change to {} rejected: already transmitting {}",
                waveform.name(),
                self.tx_waveform.name()
            );
            return Err(TxError::AlreadyTransmitting);
        }

        debug!(
            "TX state: transmitting={} waveform={}",
            self.transmitting,
            self.tx_waveform.name()
        );
        Ok(())
    }

    /// Arm, stop, or (illegally) re-arm the receiver
    ///
    /// Mirror image of [`set_tx_waveform`](Self::set_tx_waveform) for the
    /// receive direction, including the idle-`None` quirk.
    pub fn set_rx_port(&mut self, port: RxPort) -> Result<(), RxError> {
        if !self.powered {
            warn!("RX command rejected: equipment not powered");
            return Err(RxError::NotPowered);
        }

        if !self.receiving {
            self.receiving = true;
            self.rx_port = port;
            info!("RX armed on port {}", port.name());
        } else if port == RxPort::None {
            self.receiving = false;
            self.rx_port = RxPort::None;
            info!("RX stopped");
        } else {
            warn!(
                "RX port change to {} rejected: already receiving on {}",
                port.name(),
                self.rx_port.name()
            );
            return Err(RxError::AlreadyReceiving);
        }

        debug!(
            "RX state: receiving={} port={}",
            self.receiving,
            self.rx_port.name()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let radio = RadioController::new();
        assert!(!radio.is_powered());
        assert!(!radio.is_transmitting());
        assert!(!radio.is_receiving());
        assert_eq!(radio.tx_waveform(), Waveform::None);
        assert_eq!(radio.rx_port(), RxPort::None);
    }

    #[test]
    fn test_power_on_always_succeeds() {
        let mut radio = RadioController::new();
        assert_eq!(radio.set_power(true), Ok(()));
        assert!(radio.is_powered());

        // Powering on twice is fine
        assert_eq!(radio.set_power(true), Ok(()));
        assert!(radio.is_powered());
    }

    #[test]
    fn test_power_off_when_idle() {
        let mut radio = RadioController::new();
        radio.set_power(true).unwrap();
        assert_eq!(radio.set_power(false), Ok(()));
        assert!(!radio.is_powered());
    }

    #[test]
    fn test_tx_requires_power() {
        let mut radio = RadioController::new();
        assert_eq!(radio.set_tx_waveform(Waveform::Qpsk), Err(TxError::NotPowered));
        assert!(!radio.is_transmitting());
    }

    #[test]
    fn test_rx_requires_power() {
        let mut radio = RadioController::new();
        assert_eq!(radio.set_rx_port(RxPort::Port0), Err(RxError::NotPowered));
        assert!(!radio.is_receiving());
    }

    #[test]
    fn test_arm_and_stop_tx() {
        let mut radio = RadioController::new();
        radio.set_power(true).unwrap();

        radio.set_tx_waveform(Waveform::Fsk).unwrap();
        assert!(radio.is_transmitting());
        assert_eq!(radio.tx_waveform(), Waveform::Fsk);

        radio.set_tx_waveform(Waveform::None).unwrap();
        assert!(!radio.is_transmitting());
        assert_eq!(radio.tx_waveform(), Waveform::None);
    }

    #[test]
    fn test_waveform_change_rejected_while_transmitting() {
        let mut radio = RadioController::new();
        radio.set_power(true).unwrap();
        radio.set_tx_waveform(Waveform::Ask).unwrap();

        assert_eq!(
            radio.set_tx_waveform(Waveform::Qam64),
            Err(TxError::AlreadyTransmitting)
        );
        // State untouched by the rejection
        assert!(radio.is_transmitting());
        assert_eq!(radio.tx_waveform(), Waveform::Ask);
    }

    #[test]
    fn test_port_change_rejected_while_receiving() {
        let mut radio = RadioController::new();
        radio.set_power(true).unwrap();
        radio.set_rx_port(RxPort::Port2).unwrap();

        assert_eq!(radio.set_rx_port(RxPort::Port3), Err(RxError::AlreadyReceiving));
        assert!(radio.is_receiving());
        assert_eq!(radio.rx_port(), RxPort::Port2);
    }

    #[test]
    fn test_power_off_blocked_while_active() {
        let mut radio = RadioController::new();
        radio.set_power(true).unwrap();
        radio.set_tx_waveform(Waveform::Qpsk).unwrap();

        assert_eq!(radio.set_power(false), Err(PowerError::DirectionActive));
        assert!(radio.is_powered());

        radio.set_tx_waveform(Waveform::None).unwrap();
        assert_eq!(radio.set_power(false), Ok(()));
    }

    #[test]
    fn test_none_while_idle_arms_with_none() {
        // Carried-over quirk: None from idle flips the direction active
        let mut radio = RadioController::new();
        radio.set_power(true).unwrap();

        radio.set_tx_waveform(Waveform::None).unwrap();
        assert!(radio.is_transmitting());
        assert_eq!(radio.tx_waveform(), Waveform::None);

        // The "active with None" state still blocks power-off
        assert_eq!(radio.set_power(false), Err(PowerError::DirectionActive));

        // And a second None stops it again
        radio.set_tx_waveform(Waveform::None).unwrap();
        assert!(!radio.is_transmitting());
    }

    #[test]
    fn test_snapshot_matches_accessors() {
        let mut radio = RadioController::new();
        radio.set_power(true).unwrap();
        radio.set_tx_waveform(Waveform::Qam256).unwrap();
        radio.set_rx_port(RxPort::Port1).unwrap();

        let snap = radio.snapshot();
        assert!(snap.powered);
        assert!(snap.transmitting);
        assert!(snap.receiving);
        assert_eq!(snap.tx_waveform, Waveform::Qam256);
        assert_eq!(snap.rx_port, RxPort::Port1);
    }
}
