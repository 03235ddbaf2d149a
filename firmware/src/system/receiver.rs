use crate::system::hal::gpio;
use crate::system::hal::gpio::ExtiPin;

/// IR receiver output pin, interrupting on any edge.
pub struct Receiver {
    pin: Pin,
}

pub type Pin = gpio::gpiob::PB5<gpio::Input>;

impl Receiver {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }

    /// Clear the pending interrupt. Must run in the EXTI handler before
    /// anything else.
    pub fn acknowledge(&mut self) {
        self.pin.clear_interrupt_pending_bit();
    }

    /// The receiver output is active-low while a pulse is seen.
    #[must_use]
    pub fn sees_pulse(&self) -> bool {
        self.pin.is_low()
    }
}
