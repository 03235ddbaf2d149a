//! Hardware bring-up and peripheral abstractions.

pub mod clock;
pub mod commands;
pub mod emitter;
pub mod leds;
pub mod receiver;
pub mod telemetry;

pub use stm32h7xx_hal as hal;

use hal::gpio::{Edge, ExtiPin};
use hal::pac::{CorePeripherals, Peripherals as DevicePeripherals};
use hal::prelude::*;

use commands::Commands;
use emitter::Emitter;
use leds::Leds;
use receiver::Receiver;
use telemetry::Telemetry;

/// Carrier frequency of the IR emitter. One system tick spans
/// `carrier::PERIOD_SUBDIVISIONS` periods of this clock.
pub const CARRIER_HZ: u32 = 36_000;

pub const TELEMETRY_BAUD_RATE: u32 = 9_600;

pub type CarrierTimer = hal::timer::Timer<hal::pac::TIM2>;

pub struct System {
    pub carrier_timer: CarrierTimer,
    pub emitter: Emitter,
    pub receiver: Receiver,
    pub leds: Leds,
    pub telemetry: Telemetry,
    pub commands: Commands,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, mut dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let pwr = dp.PWR.constrain();
        let pwrcfg = pwr.freeze();
        let rcc = dp.RCC.constrain();
        let ccdr = rcc.sys_ck(480.MHz()).freeze(pwrcfg, &dp.SYSCFG);

        let gpioa = dp.GPIOA.split(ccdr.peripheral.GPIOA);
        let gpiob = dp.GPIOB.split(ccdr.peripheral.GPIOB);

        let mut carrier_timer =
            dp.TIM2
                .timer(CARRIER_HZ.Hz(), ccdr.peripheral.TIM2, &ccdr.clocks);
        carrier_timer.listen(hal::timer::Event::TimeOut);

        let emitter = Emitter::new(gpiob.pb4.into_push_pull_output());

        let receiver = {
            let mut pin = gpiob.pb5.into_floating_input();
            pin.make_interrupt_source(&mut dp.SYSCFG);
            // The receiver output is active-low while a pulse is seen; any
            // transition marks reception.
            pin.trigger_on_edge(&mut dp.EXTI, Edge::RisingFalling);
            pin.enable_interrupt(&mut dp.EXTI);
            Receiver::new(pin)
        };

        let leds = Leds::new(leds::Pins {
            signal: gpiob.pb0.into_push_pull_output(),
            mat: gpiob.pb1.into_push_pull_output(),
        });

        let (telemetry, commands) = {
            let mut serial = dp
                .USART1
                .serial(
                    (gpioa.pa9.into_alternate(), gpioa.pa10.into_alternate()),
                    TELEMETRY_BAUD_RATE.bps(),
                    ccdr.peripheral.USART1,
                    &ccdr.clocks,
                )
                .unwrap();
            serial.listen(hal::serial::Event::Rxne);
            let (tx, rx) = serial.split();
            let mut telemetry = Telemetry::new(tx);
            telemetry.write(telemetry::NAME_COMMAND);
            (telemetry, Commands::new(rx))
        };

        Self {
            carrier_timer,
            emitter,
            receiver,
            leds,
            telemetry,
            commands,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal and external memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
