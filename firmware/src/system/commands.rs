use heapless::Vec;

use crate::system::hal;
use crate::system::hal::prelude::*;

/// Commands are single characters; the buffer only absorbs bursts. Excess
/// bytes beyond its capacity are dropped.
pub const CAPACITY: usize = 12;

/// Receiving side of the serial port.
///
/// Any received burst counts as a session reset command; the bytes
/// themselves are not interpreted.
pub struct Commands {
    rx: Rx,
}

pub type Rx = hal::serial::Rx<hal::pac::USART1>;

impl Commands {
    #[must_use]
    pub fn new(rx: Rx) -> Self {
        Self { rx }
    }

    /// Drain everything pending in the receiver.
    pub fn poll(&mut self) -> Option<Vec<u8, CAPACITY>> {
        let mut command: Vec<u8, CAPACITY> = Vec::new();
        while let Ok(byte) = self.rx.read() {
            if command.push(byte).is_err() {
                break;
            }
        }
        if command.is_empty() {
            None
        } else {
            Some(command)
        }
    }
}
