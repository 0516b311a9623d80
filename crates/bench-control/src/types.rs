//! Waveform and port enumerations
//!
//! `None` is a real member of both sets: it is the value a direction carries
//! while idle, and commanding it is how a running direction is stopped.

/// Modulation scheme driven out of the signal generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Waveform {
    /// No waveform selected (TX idle / stop command)
    #[default]
    None,
    /// Amplitude-shift keying
    Ask,
    /// Frequency-shift keying
    Fsk,
    /// Quadrature phase-shift keying
    Qpsk,
    /// 64-point quadrature amplitude modulation
    Qam64,
    /// 256-point quadrature amplitude modulation
    Qam256,
}

impl Waveform {
    /// Returns the canonical display name for the waveform
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::None => "None",
            Waveform::Ask => "ASK",
            Waveform::Fsk => "FSK",
            Waveform::Qpsk => "QPSK",
            Waveform::Qam64 => "QAM_64",
            Waveform::Qam256 => "QAM_256",
        }
    }

    /// All waveforms, in command order
    pub const ALL: [Waveform; 6] = [
        Waveform::None,
        Waveform::Ask,
        Waveform::Fsk,
        Waveform::Qpsk,
        Waveform::Qam64,
        Waveform::Qam256,
    ];
}

/// Receive channel/antenna port fed into the signal analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RxPort {
    /// No port selected (RX idle / stop command)
    #[default]
    None,
    /// Antenna port 0
    Port0,
    /// Antenna port 1
    Port1,
    /// Antenna port 2
    Port2,
    /// Antenna port 3
    Port3,
}

impl RxPort {
    /// Returns the canonical display name for the port
    pub fn name(&self) -> &'static str {
        match self {
            RxPort::None => "None",
            RxPort::Port0 => "Port_0",
            RxPort::Port1 => "Port_1",
            RxPort::Port2 => "Port_2",
            RxPort::Port3 => "Port_3",
        }
    }

    /// All ports, in command order
    pub const ALL: [RxPort; 5] = [
        RxPort::None,
        RxPort::Port0,
        RxPort::Port1,
        RxPort::Port2,
        RxPort::Port3,
    ];
}
