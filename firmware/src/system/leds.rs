use crate::system::hal::gpio;

/// Indicator LEDs mirroring the state of the detector.
pub struct Leds {
    pins: Pins,
}

pub struct Pins {
    pub signal: SignalPin,
    pub mat: MatPin,
}

pub type SignalPin = gpio::gpiob::PB0<gpio::Output>;
pub type MatPin = gpio::gpiob::PB1<gpio::Output>;

impl Leds {
    #[must_use]
    pub fn new(pins: Pins) -> Self {
        Self { pins }
    }

    pub fn set_signal(&mut self, on: bool) {
        self.pins.signal.set_state(on.into());
    }

    pub fn set_mat(&mut self, on: bool) {
        self.pins.mat.set_state(on.into());
    }
}
