use crate::system::hal::gpio;

/// IR emitter diode, modulated as software PWM by the control loop.
pub struct Emitter {
    pin: Pin,
}

pub type Pin = gpio::gpiob::PB4<gpio::Output>;

impl Emitter {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }

    pub fn drive(&mut self, on: bool) {
        self.pin.set_state(on.into());
    }
}
