#![no_std]
#![no_main]

use tofer_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use tofer_firmware::system::System;
    use tofer_firmware::testlib::delay_ms;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = stm32h7xx_hal::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    #[test]
    fn leds_go_on_and_off(system: &mut System) {
        system.leds.set_signal(true);
        system.leds.set_mat(true);
        defmt::info!("Check that both indicator LEDs are lit up");
        delay_ms(3000);

        system.leds.set_signal(false);
        system.leds.set_mat(false);
        defmt::info!("Check that both indicator LEDs are dimmed");
        delay_ms(3000);
    }
}
