use nb::block;

use crate::system::hal;
use crate::system::hal::prelude::*;

/// One-time naming command for the serial Bluetooth module. Numeric
/// telemetry holds off for the first `telemetry::STARTUP_SETTLE` ticks so
/// the module can process it undisturbed.
pub const NAME_COMMAND: &str = "AT+NAMETofer ";

/// Blocking writer of the telemetry stream.
pub struct Telemetry {
    tx: Tx,
}

pub type Tx = hal::serial::Tx<hal::pac::USART1>;

impl Telemetry {
    #[must_use]
    pub fn new(tx: Tx) -> Self {
        Self { tx }
    }

    /// Write one chunk of the stream, blocking until the UART took it all.
    pub fn write(&mut self, chunk: &str) {
        for byte in chunk.bytes() {
            let _ = block!(self.tx.write(byte));
        }
    }
}
