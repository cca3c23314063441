//! Countdown timer for a single interval.
//!
//! The timer never reads the wall clock - the caller delivers one `tick()`
//! per elapsed second. This keeps the countdown robust to delivery jitter:
//! a late tick still represents exactly one second.
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = IntervalTimer::new(30 * 60, false);
//! // Once per second:
//! if timer.tick() {
//!     // interval expired; fires at most once per start()
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Countdown state for exactly one interval.
///
/// `remaining_secs` is clamped to `0..=total_secs` after every operation.
/// Pausing is a data flag; a paused timer ignores ticks entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalTimer {
    total_secs: u64,
    remaining_secs: u64,
    paused: bool,
    /// Set once the expired signal has been handed out for this interval.
    /// Cleared only by `start()`.
    #[serde(default)]
    fired: bool,
}

impl IntervalTimer {
    /// Create a timer for an interval of `duration_secs`.
    ///
    /// A duration of 0 is not an error: the timer reports expiry on the
    /// first unpaused tick.
    pub fn new(duration_secs: u64, initially_paused: bool) -> Self {
        Self {
            total_secs: duration_secs,
            remaining_secs: duration_secs,
            paused: initially_paused,
            fired: false,
        }
    }

    /// Reset the timer for a new interval and re-arm the expiry signal.
    pub fn start(&mut self, duration_secs: u64, initially_paused: bool) {
        self.total_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.paused = initially_paused;
        self.fired = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Clear the pause flag. Returns `true` only when a paused-to-running
    /// transition actually occurred; the caller schedules the next tick
    /// only in that case.
    pub fn resume(&mut self) -> bool {
        if self.paused {
            self.paused = false;
            true
        } else {
            false
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `true` exactly once per interval: on the tick that brings
    /// `remaining_secs` to 0, or on the first unpaused tick if the interval
    /// started already at 0. Paused ticks change nothing and never fire.
    /// After the signal has fired, further ticks return `false` until
    /// `start()` is called again.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        if self.remaining_secs == 0 && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    /// 0.0 .. 1.0 elapsed fraction of the interval.
    ///
    /// Returns 0.0 for a zero-length interval.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        let elapsed = self.total_secs - self.remaining_secs;
        elapsed as f64 / self.total_secs as f64
    }

    /// Remaining time as `MM:SS`.
    pub fn format_remaining(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }
}

/// Render a second count as `MM:SS`. Minutes are not clamped to 59:
/// 5400 seconds renders as "90:00".
pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_timer_holds_full_duration() {
        let timer = IntervalTimer::new(5 * 60, false);
        assert_eq!(timer.total_secs(), 300);
        assert_eq!(timer.remaining_secs(), 300);
        assert!(!timer.is_paused());
        assert!(!timer.is_expired());
    }

    #[test]
    fn tick_counts_down_and_fires_on_last_second() {
        let mut timer = IntervalTimer::new(3, false);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(timer.is_expired());
    }

    #[test]
    fn expiry_fires_at_most_once() {
        let mut timer = IntervalTimer::new(1, false);
        assert!(timer.tick());
        // Stray ticks after expiry must not re-signal.
        assert!(!timer.tick());
        assert!(!timer.tick());
    }

    #[test]
    fn start_rearms_the_expiry_signal() {
        let mut timer = IntervalTimer::new(1, false);
        assert!(timer.tick());
        timer.start(2, false);
        assert!(!timer.is_expired());
        assert!(!timer.tick());
        assert!(timer.tick());
    }

    #[test]
    fn zero_duration_expires_on_first_tick() {
        let mut timer = IntervalTimer::new(0, false);
        assert!(timer.is_expired());
        assert!(timer.tick());
        assert!(!timer.tick());
    }

    #[test]
    fn paused_tick_changes_nothing() {
        let mut timer = IntervalTimer::new(10, false);
        timer.pause();
        assert!(!timer.tick());
        assert_eq!(timer.remaining_secs(), 10);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn paused_tick_never_fires_even_at_zero() {
        let mut timer = IntervalTimer::new(0, true);
        assert!(!timer.tick());
        assert!(timer.resume());
        assert!(timer.tick());
    }

    #[test]
    fn pause_is_idempotent_and_resume_reports_transition() {
        let mut timer = IntervalTimer::new(60, false);
        assert!(!timer.resume());
        timer.pause();
        timer.pause();
        assert!(timer.resume());
        assert!(!timer.resume());
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let mut timer = IntervalTimer::new(100, false);
        assert_eq!(timer.progress(), 0.0);
        for _ in 0..25 {
            timer.tick();
        }
        assert_eq!(timer.progress(), 0.25);
        for _ in 0..25 {
            timer.tick();
        }
        assert_eq!(timer.progress(), 0.5);
        for _ in 0..50 {
            timer.tick();
        }
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn format_remaining_keeps_minutes_unbounded() {
        let cases = [
            (5 * 60, "05:00"),
            (65 * 60, "65:00"),
            (90, "01:30"),
            (90 * 60, "90:00"),
            (90 * 60 + 45, "90:45"),
            (0, "00:00"),
        ];
        for (secs, expected) in cases {
            assert_eq!(format_mm_ss(secs), expected, "for {secs} seconds");
        }
    }

    proptest! {
        #[test]
        fn expiry_takes_exactly_duration_ticks(d in 1u64..=3600) {
            let mut timer = IntervalTimer::new(d, false);
            for _ in 0..d - 1 {
                prop_assert!(!timer.tick());
            }
            prop_assert!(timer.tick());
            prop_assert!(!timer.tick());
        }

        #[test]
        fn pausing_does_not_change_ticks_to_expiry(
            d in 1u64..=600,
            pause_points in proptest::collection::vec(0u64..600, 0..8),
        ) {
            let mut timer = IntervalTimer::new(d, false);
            let mut unpaused_ticks = 0u64;
            let mut fired = false;
            // Interleave pause/resume cycles with the countdown; only
            // unpaused ticks may advance it.
            for step in 0..d * 2 + 16 {
                if pause_points.contains(&step) {
                    timer.pause();
                    prop_assert!(!timer.tick());
                    timer.resume();
                }
                if timer.tick() {
                    fired = true;
                    unpaused_ticks += 1;
                    break;
                }
                unpaused_ticks += 1;
            }
            prop_assert!(fired);
            prop_assert_eq!(unpaused_ticks, d);
        }

        #[test]
        fn progress_is_monotone_while_running(d in 1u64..=600) {
            let mut timer = IntervalTimer::new(d, false);
            let mut last = timer.progress();
            for _ in 0..d {
                timer.tick();
                let p = timer.progress();
                prop_assert!(p >= last);
                prop_assert!((0.0..=1.0).contains(&p));
                last = p;
            }
        }
    }
}
