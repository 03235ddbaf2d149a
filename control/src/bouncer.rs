//! Per-tick composition of the sensing and timing engine.

use heapless::Vec;

use crate::filter::LowPass;
use crate::flight::Flight;
use crate::log;
use crate::mat::{Mat, Transition};
use crate::signal;
use crate::telemetry::{self, Chunk};

/// State consumed by one tick of the control loop.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Input {
    /// Current value of the system clock, in ticks.
    pub now: u32,
    /// System clock value at the last received IR edge.
    pub last_edge: u32,
    /// An external reset command arrived since the previous tick.
    pub reset: bool,
}

/// Reactions of one tick.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Output {
    /// The beam is currently received; drives the signal indicator.
    pub signal_present: bool,
    /// The mat is up; drives the mat indicator.
    pub mat_up: bool,
    /// Telemetry chunks to be written out, in order. At most a reset
    /// separator, a session separator, a header and one row per tick.
    pub chunks: Vec<Chunk, 4>,
}

/// The whole detector: presence, filter, hysteresis and timing.
///
/// Call [`Bouncer::tick`] exactly once per system clock tick, after the
/// owning loop advanced the clock.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bouncer {
    filter: LowPass,
    mat: Mat,
    flight: Flight,
}

impl Bouncer {
    pub fn tick(&mut self, input: Input) -> Output {
        let mut output = Output::default();

        if input.reset {
            self.flight.reset();
            let _ = output.chunks.push(telemetry::separator());
        }

        let present = signal::is_present(input.now, input.last_edge);
        let level = self.filter.tick(present);
        let settled = input.now > telemetry::STARTUP_SETTLE;

        match self.mat.update(level, self.flight.is_valid_bounce(input.now)) {
            Some(Transition::Depart) => {
                let report = self.flight.depart(input.now);
                log::info!("DEPART at {=u32}, mat time {=u32}", input.now, report.mat_time);
                if report.new_session {
                    let _ = output.chunks.push(telemetry::separator());
                }
                if settled {
                    let _ = output.chunks.push(telemetry::depart_cell(&report));
                }
            }
            Some(Transition::Impact) => {
                let report = self.flight.impact(input.now);
                log::info!("IMPACT at {=u32}, bounce {=u32}", input.now, report.bounce_number);
                if report.new_session {
                    let _ = output.chunks.push(telemetry::separator());
                }
                if settled {
                    if report.header {
                        let _ = output.chunks.push(telemetry::header());
                    }
                    let _ = output.chunks.push(telemetry::impact_row(&report));
                }
            }
            None => (),
        }

        output.signal_present = present;
        output.mat_up = self.mat.is_up();
        output
    }
}
