//! Hysteresis state machine of the mat.

/// Smoothed level above which the beam is reliably received.
pub const HIGH_LEVEL: i32 = 90;

/// Smoothed level below which the beam is reliably absent.
pub const LOW_LEVEL: i32 = 10;

/// Physical state of the mat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Up,
    #[default]
    Down,
}

/// Accepted state change, to be timed by the flight timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    Depart,
    Impact,
}

/// Two-state detector over the smoothed level.
///
/// The dead zone between [`LOW_LEVEL`] and [`HIGH_LEVEL`] prevents chatter
/// around a single threshold; the debounce verdict passed by the caller
/// prevents re-triggering right after a real transition. Without the guard
/// this machine oscillates on mechanical and optical bounce noise.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mat {
    state: State,
}

impl Mat {
    /// Evaluate one tick worth of smoothed level.
    ///
    /// `guard` is the debounce verdict for the current tick; while it is
    /// false no transition is accepted in either direction.
    pub fn update(&mut self, level: i32, guard: bool) -> Option<Transition> {
        if !guard {
            return None;
        }
        match self.state {
            State::Down if level > HIGH_LEVEL => {
                self.state = State::Up;
                Some(Transition::Depart)
            }
            State::Up if level < LOW_LEVEL => {
                self.state = State::Down;
                Some(Transition::Impact)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_up(&self) -> bool {
        self.state == State::Up
    }
}
