//! Software PWM phase of the IR carrier.

/// Carrier periods per system tick. With a 36 kHz carrier this makes one
/// tick span 1 ms.
pub const PERIOD_SUBDIVISIONS: u16 = 36;

/// The emitter stays actively driven for this many subdivisions of each
/// tick, approximating 28 % duty.
pub const DRIVE_SUBDIVISIONS: u16 = 10;

/// Decision derived from the raw duty counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Evaluation {
    /// The emitter should be actively driven right now.
    pub drive: bool,
    /// The duty counter finished a full period. The caller must zero the
    /// counter and advance the system clock by one tick.
    pub rollover: bool,
}

/// Derive the emitter drive phase and tick rollover from the duty counter.
///
/// The counter itself is bumped by the timer interrupt; this split keeps
/// the handler down to a single increment. There is no catch-up logic:
/// periods missed while the caller stalls are lost.
#[must_use]
pub fn evaluate(duty: u16) -> Evaluation {
    Evaluation {
        drive: duty < DRIVE_SUBDIVISIONS,
        rollover: duty >= PERIOD_SUBDIVISIONS,
    }
}
