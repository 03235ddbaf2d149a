#![no_std]
#![no_main]

use tofer_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use tofer_control::telemetry;
    use tofer_firmware::system::System;
    use tofer_firmware::testlib::delay_ms;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = stm32h7xx_hal::pac::Peripherals::take().unwrap();

        System::init(cp, dp)
    }

    #[test]
    fn header_and_rows_reach_the_terminal(system: &mut System) {
        defmt::info!("Check the serial terminal for a header and one row");

        system.telemetry.write(telemetry::SEPARATOR);
        system.telemetry.write(telemetry::HEADER);
        let row = telemetry::impact_row(&tofer_control::flight::Impact {
            new_session: false,
            header: false,
            bounce_number: 1,
            air_time: 423,
            total_air_time: 423,
        });
        system.telemetry.write(&row);
        delay_ms(1000);
    }
}
