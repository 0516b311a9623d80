//! Bench Controller Demo
//!
//! Drives the shared test-equipment controller through a reference session:
//! arming TX and RX, attempting the illegal transitions (power-off while
//! running, waveform/port change mid-run), then winding the bench back down
//! to the unpowered idle state.
//!
//! The controller itself only returns typed results; all text rendering
//! lives here.

use bench_control::{RxPort, SharedController, Waveform};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render the outcome of a control operation
fn report<E: std::error::Error>(what: &str, result: Result<(), E>) {
    match result {
        Ok(()) => println!("{what}: ok"),
        Err(e) => println!("{what}: rejected ({e})"),
    }
}

fn print_status(bench: &SharedController) {
    let snap = bench.snapshot();
    println!(
        "  power={} tx={} ({}) rx={} ({})",
        if snap.powered { "on" } else { "off" },
        if snap.transmitting { "active" } else { "idle" },
        snap.tx_waveform.name(),
        if snap.receiving { "active" } else { "idle" },
        snap.rx_port.name(),
    );
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bench_control=info,bench_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting bench controller demo");

    // Composition root: one controller, shared by everything on the bench.
    let bench = SharedController::new();

    report("power on", bench.set_power(true));
    report("arm TX QPSK", bench.set_tx_waveform(Waveform::Qpsk));
    report("arm RX Port_1", bench.set_rx_port(RxPort::Port1));

    println!("current TX waveform: {}", bench.tx_waveform().name());
    println!("current RX port: {}", bench.rx_port().name());
    print_status(&bench);

    // Illegal: power off before stopping TX/RX
    report("power off", bench.set_power(false));

    // Illegal: change port while receive is in progress
    report("retune RX to Port_3", bench.set_rx_port(RxPort::Port3));
    report("stop RX", bench.set_rx_port(RxPort::None));
    report("arm RX Port_3", bench.set_rx_port(RxPort::Port3));
    report("stop RX", bench.set_rx_port(RxPort::None));

    // Illegal: change waveform while transmit is in progress
    report("retune TX to QAM_256", bench.set_tx_waveform(Waveform::Qam256));
    report("stop TX", bench.set_tx_waveform(Waveform::None));
    report("arm TX QAM_256", bench.set_tx_waveform(Waveform::Qam256));
    report("stop TX", bench.set_tx_waveform(Waveform::None));

    report("power off", bench.set_power(false));
    print_status(&bench);
}
