#![no_main]
#![no_std]

use tofer_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true)]
mod app {
    use core::sync::atomic::{AtomicBool, Ordering};

    use tofer_control::bouncer::{Bouncer, Input};
    use tofer_control::carrier;
    use tofer_firmware::system::clock::SharedClock;
    use tofer_firmware::system::commands::Commands;
    use tofer_firmware::system::emitter::Emitter;
    use tofer_firmware::system::leds::Leds;
    use tofer_firmware::system::receiver::Receiver;
    use tofer_firmware::system::telemetry::Telemetry;
    use tofer_firmware::system::{CarrierTimer, System};

    static CLOCK: SharedClock = SharedClock::new();
    static RESET_REQUESTED: AtomicBool = AtomicBool::new(false);

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        carrier_timer: CarrierTimer,
        emitter: Emitter,
        receiver: Receiver,
        leds: Leds,
        telemetry: Telemetry,
        commands: Commands,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);

        (
            Shared {},
            Local {
                carrier_timer: system.carrier_timer,
                emitter: system.emitter,
                receiver: system.receiver,
                leds: system.leds,
                telemetry: system.telemetry,
                commands: system.commands,
            },
            init::Monotonics(),
        )
    }

    /// The control loop. Sleeps until the carrier timer fires, keeps the
    /// emitter's software PWM going, and runs one detector tick per full
    /// carrier period.
    #[idle(local = [emitter, leds, telemetry])]
    fn idle(cx: idle::Context) -> ! {
        let mut bouncer = Bouncer::default();

        loop {
            cortex_m::asm::wfi();

            let evaluation = carrier::evaluate(CLOCK.duty());
            cx.local.emitter.drive(evaluation.drive);
            if !evaluation.rollover {
                continue;
            }
            CLOCK.start_period();

            let output = bouncer.tick(Input {
                now: CLOCK.now(),
                last_edge: CLOCK.last_edge(),
                reset: RESET_REQUESTED.swap(false, Ordering::Relaxed),
            });

            cx.local.leds.set_signal(output.signal_present);
            cx.local.leds.set_mat(output.mat_up);
            for chunk in &output.chunks {
                cx.local.telemetry.write(chunk);
            }
        }
    }

    /// Carrier timer, 36 kHz. Restricted to the minimum necessary work:
    /// acknowledge and bump the duty counter; the WFI wake-up of the idle
    /// loop does the rest.
    #[task(binds = TIM2, local = [carrier_timer], priority = 3)]
    fn carrier_period(cx: carrier_period::Context) {
        cx.local.carrier_timer.clear_irq();
        CLOCK.bump_duty();
    }

    /// Any edge on the receiver pin marks reception.
    #[task(binds = EXTI9_5, local = [receiver], priority = 2)]
    fn receive_edge(cx: receive_edge::Context) {
        cx.local.receiver.acknowledge();
        CLOCK.record_edge();
    }

    /// A command burst arrived. Its content does not matter; the session
    /// resets on the next tick.
    #[task(binds = USART1, local = [commands], priority = 1)]
    fn command(cx: command::Context) {
        if cx.local.commands.poll().is_some() {
            RESET_REQUESTED.store(true, Ordering::Relaxed);
        }
    }
}
