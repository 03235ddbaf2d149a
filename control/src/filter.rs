//! Fixed-point low-pass filter over beam presence.
//!
//! Raw presence is noisy at tick granularity, with partial beam coverage
//! and occlusion edges toggling it freely. The filter is an integer
//! exponential moving average scaled so the smoothed level moves within
//! 0–100; the hysteresis thresholds downstream are calibrated against that
//! range, which is why this must not be switched to floating point.

/// Contribution of one present tick to the accumulator.
pub const GAIN: i32 = 100;

/// Right shift turning the accumulator into the smoothed level.
pub const FILTER_SHIFT: u32 = 10;

/// Integer exponential moving average of the presence flag.
///
/// Invariant: `level == accumulator >> FILTER_SHIFT`, bounded within
/// `0..=GAIN` for all reachable inputs, so the accumulator cannot overflow.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LowPass {
    accumulator: i32,
}

impl LowPass {
    /// Fold one tick of presence in and return the smoothed level.
    ///
    /// The level is read before the update is applied; the pre-update value
    /// is the one the rest of the engine acts on during this tick.
    pub fn tick(&mut self, present: bool) -> i32 {
        let level = self.accumulator >> FILTER_SHIFT;
        self.accumulator += GAIN * i32::from(present) - level;
        level
    }

    #[must_use]
    pub fn level(&self) -> i32 {
        self.accumulator >> FILTER_SHIFT
    }
}
