//! Bounce timing, session statistics and the debounce guard.

/// Minimum distance, in ticks, from the last accepted transition of either
/// kind before a new one may be accepted. This puts a hard floor on the
/// detectable bounce frequency.
pub const MIN_BOUNCE_TIME: u32 = 200;

/// Idle gap between transitions, in ticks, after which the next transition
/// starts a new session.
pub const DEADTIME: u32 = 2000;

/// Statistics of the running bounce session.
///
/// A session is a telemetry-visible grouping of bounces; its reset never
/// alters the mat state. Note that despite all its attributes are public,
/// they should be only read from.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flight {
    pub depart_time: u32,
    pub impact_time: u32,
    pub total_air_time: u32,
    pub bounce_number: u32,
}

/// Timing report of an accepted depart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Depart {
    pub new_session: bool,
    /// Ticks the mat spent down since the last impact.
    pub mat_time: u32,
}

/// Timing report of an accepted impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Impact {
    pub new_session: bool,
    /// Every tenth row of a session repeats the column header.
    pub header: bool,
    pub bounce_number: u32,
    pub air_time: u32,
    pub total_air_time: u32,
}

impl Flight {
    /// Both the most recent impact and the most recent depart must be
    /// further in the past than the minimum bounce interval.
    #[must_use]
    pub fn is_valid_bounce(&self, now: u32) -> bool {
        now.wrapping_sub(self.impact_time) > MIN_BOUNCE_TIME
            && now.wrapping_sub(self.depart_time) > MIN_BOUNCE_TIME
    }

    pub fn depart(&mut self, now: u32) -> Depart {
        self.depart_time = now;
        let mat_time = self.depart_time.wrapping_sub(self.impact_time);
        let new_session = mat_time > DEADTIME;
        if new_session {
            self.reset();
        }
        Depart {
            new_session,
            mat_time,
        }
    }

    pub fn impact(&mut self, now: u32) -> Impact {
        // The air time is taken from the previous impact timestamp, before
        // it is overwritten.
        let air_time = self.impact_time.wrapping_sub(self.depart_time);
        self.impact_time = now;
        self.total_air_time = self.total_air_time.wrapping_add(air_time);
        let new_session = self.impact_time.wrapping_sub(self.depart_time) > DEADTIME;
        if new_session {
            self.reset();
        }
        let report = Impact {
            new_session,
            header: self.bounce_number % 10 == 1,
            bounce_number: self.bounce_number,
            air_time,
            total_air_time: self.total_air_time,
        };
        self.bounce_number = self.bounce_number.wrapping_add(1);
        report
    }

    /// Start a new session. Idempotent, and safe to call from the external
    /// reset command at any time; timestamps are left alone so the debounce
    /// guard keeps its history.
    pub fn reset(&mut self) {
        self.bounce_number = 1;
        self.total_air_time = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_both_timestamps_are_old_enough_a_bounce_is_valid() {
        let mut flight = Flight::default();
        flight.depart(10_000);
        flight.impact(10_400);
        assert!(flight.is_valid_bounce(10_400 + MIN_BOUNCE_TIME + 1));
    }

    #[test]
    fn when_a_transition_is_recent_a_bounce_is_rejected() {
        let mut flight = Flight::default();
        flight.depart(10_000);
        flight.impact(10_400);
        // Two transitions 150 ticks apart; the second must be rejected.
        assert!(!flight.is_valid_bounce(10_550));
        assert!(!flight.is_valid_bounce(10_400 + MIN_BOUNCE_TIME));
    }

    #[test]
    fn when_a_recent_depart_alone_is_recent_a_bounce_is_rejected() {
        let mut flight = Flight::default();
        flight.impact(10_000);
        flight.depart(11_000);
        assert!(!flight.is_valid_bounce(11_150));
    }

    #[test]
    fn when_the_clock_wraps_the_guard_still_holds() {
        let flight = Flight {
            depart_time: u32::MAX - 100,
            impact_time: u32::MAX - 5_000,
            ..Flight::default()
        };
        // The last depart is 151 ticks in the past, across the wrap.
        assert!(!flight.is_valid_bounce(50));
        assert!(flight.is_valid_bounce(150));
    }

    #[test]
    fn when_the_idle_gap_exceeds_deadtime_depart_starts_a_new_session() {
        let mut flight = Flight::default();
        flight.depart(5_000);
        flight.impact(5_400);
        let report = flight.depart(5_400 + DEADTIME + 100);
        assert!(report.new_session);
        assert_eq!(report.mat_time, DEADTIME + 100);
        assert_eq!(flight.bounce_number, 1);
        assert_eq!(flight.total_air_time, 0);
    }

    #[test]
    fn when_the_idle_gap_stays_within_deadtime_the_session_continues() {
        let mut flight = Flight::default();
        flight.depart(5_000);
        flight.impact(5_400);
        let report = flight.depart(5_400 + DEADTIME);
        assert!(!report.new_session);
        assert_eq!(report.mat_time, DEADTIME);
    }

    #[test]
    fn when_two_cycles_are_separated_by_more_than_deadtime_the_second_resets() {
        let mut flight = Flight::default();
        flight.depart(3_000);
        flight.impact(3_400);
        assert_eq!(flight.bounce_number, 2);

        // 2500 idle ticks, then another full cycle.
        let depart = flight.depart(5_900);
        assert!(depart.new_session);
        let impact = flight.impact(6_300);
        assert!(!impact.new_session);
        assert_eq!(impact.bounce_number, 1);
        // Air time is accumulated on top of the fresh session only.
        assert_eq!(impact.total_air_time, impact.air_time);
    }

    #[test]
    fn when_impact_lands_it_reports_the_pre_increment_bounce_number() {
        let mut flight = Flight::default();
        flight.depart(3_000);
        let report = flight.impact(3_400);
        assert_eq!(report.bounce_number + 1, flight.bounce_number);
    }

    #[test]
    fn when_air_time_is_computed_it_uses_the_previous_impact_timestamp() {
        let mut flight = Flight::default();
        flight.impact(3_000);
        flight.depart(3_300);
        let report = flight.impact(3_700);
        assert_eq!(report.air_time, 3_000_u32.wrapping_sub(3_300));
        assert_eq!(flight.impact_time, 3_700);
    }

    #[test]
    fn when_the_header_is_due_it_repeats_every_tenth_bounce() {
        let mut flight = Flight::default();
        let mut now = 10_000;
        let mut headers = 0;
        flight.depart(now);
        for _ in 0..20 {
            now += 300;
            let report = flight.impact(now);
            if report.header {
                headers += 1;
            }
            now += 300;
            flight.depart(now);
        }
        assert_eq!(headers, 2);
    }

    #[test]
    fn when_reset_is_issued_twice_it_has_the_same_effect_as_once() {
        let mut flight = Flight::default();
        flight.depart(5_000);
        flight.impact(5_400);
        flight.reset();
        let (bounce_number, total_air_time) = (flight.bounce_number, flight.total_air_time);
        flight.reset();
        assert_eq!(flight.bounce_number, bounce_number);
        assert_eq!(flight.total_air_time, total_air_time);
        assert_eq!(flight.bounce_number, 1);
        assert_eq!(flight.total_air_time, 0);
    }
}
