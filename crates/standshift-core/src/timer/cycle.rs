//! Cycle state machine.
//!
//! Orchestrates the alternation between standing and sitting intervals.
//! The machine owns an [`IntervalTimer`] and is driven entirely by
//! [`InputEvent`]s delivered one at a time; every transition returns the
//! side effects the caller must execute. The machine itself performs no
//! I/O and never reads the clock.
//!
//! ## State Transitions
//!
//! ```text
//! Start   --[acknowledge]--> Standing
//! Waiting --[acknowledge]--> opposite of the interval that just ended
//! Standing/Sitting --[tick, not expired]--> same state
//! Standing/Sitting --[tick, expired]--> Waiting (cycle count +1, notify)
//! Standing/Sitting --[pause toggle]--> same state, timer paused/resumed
//! any     --[quit]--> terminate
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::engine::IntervalTimer;
use crate::events::{Effect, InputEvent, Snapshot};

const NOTIFY_TITLE: &str = "StandShift";
const NOTIFY_MESSAGE: &str = "Time to change position!";

/// Which interval the user is being asked to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Posture {
    Standing,
    Sitting,
}

impl Posture {
    pub fn opposite(self) -> Self {
        match self {
            Posture::Standing => Posture::Sitting,
            Posture::Sitting => Posture::Standing,
        }
    }
}

/// Current phase of the stand/sit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleState {
    /// Pre-first-interval state; awaiting the first acknowledge.
    Start,
    Standing,
    Sitting,
    /// An interval just expired; awaiting acknowledge of the switch.
    Waiting,
}

impl CycleState {
    /// The active posture, if an interval is running.
    pub fn posture(self) -> Option<Posture> {
        match self {
            CycleState::Standing => Some(Posture::Standing),
            CycleState::Sitting => Some(Posture::Sitting),
            CycleState::Start | CycleState::Waiting => None,
        }
    }
}

impl From<Posture> for CycleState {
    fn from(posture: Posture) -> Self {
        match posture {
            Posture::Standing => CycleState::Standing,
            Posture::Sitting => CycleState::Sitting,
        }
    }
}

/// The stand/sit cycle machine.
///
/// `previous` is restricted to [`Posture`] by construction, so Waiting and
/// Start can never be retained as the interval to alternate away from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleMachine {
    state: CycleState,
    previous: Posture,
    cycle_count: u32,
    timer: IntervalTimer,
    stand_secs: u64,
    sit_secs: u64,
}

impl CycleMachine {
    /// Create a machine in the `Start` state.
    ///
    /// `previous` is pre-set to Sitting so the first acknowledge always
    /// starts a Standing interval, whatever the configured durations.
    pub fn new(stand_secs: u64, sit_secs: u64) -> Self {
        Self {
            state: CycleState::Start,
            previous: Posture::Sitting,
            cycle_count: 0,
            timer: IntervalTimer::new(stand_secs, false),
            stand_secs,
            sit_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    pub fn is_paused(&self) -> bool {
        self.timer.is_paused()
    }

    pub fn remaining_secs(&self) -> u64 {
        self.timer.remaining_secs()
    }

    /// 0.0 .. 1.0 progress within the active interval.
    ///
    /// Exactly 0.0 in Start and Waiting: progress resets the moment an
    /// interval expires.
    pub fn progress(&self) -> f64 {
        match self.state.posture() {
            Some(_) => self.timer.progress(),
            None => 0.0,
        }
    }

    /// Read-only projection for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            remaining: self.timer.format_remaining(),
            progress: self.progress(),
            paused: self.timer.is_paused(),
            cycle_count: self.cycle_count,
            at: Utc::now(),
        }
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Process one event to completion and return the requested side
    /// effects. Out-of-context events are no-ops, never errors.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::Tick => self.on_tick(),
            InputEvent::TogglePause => self.on_toggle_pause(),
            InputEvent::Acknowledge => self.on_acknowledge(),
            InputEvent::Quit => vec![Effect::Terminate],
        }
    }

    fn on_tick(&mut self) -> Vec<Effect> {
        // The expiry branch is reachable only from an active interval, so
        // a stray tick arriving after the transition to Waiting cannot
        // re-fire the notification.
        let Some(posture) = self.state.posture() else {
            return Vec::new();
        };
        if self.timer.is_paused() {
            return Vec::new();
        }
        if self.timer.tick() {
            self.previous = posture;
            self.state = CycleState::Waiting;
            self.cycle_count = self.cycle_count.wrapping_add(1);
            return vec![Effect::Notify {
                title: NOTIFY_TITLE.to_string(),
                message: NOTIFY_MESSAGE.to_string(),
            }];
        }
        vec![Effect::ScheduleTick]
    }

    fn on_toggle_pause(&mut self) -> Vec<Effect> {
        if self.state.posture().is_none() {
            return Vec::new();
        }
        // Exactly one of resume or pause per toggle.
        if self.timer.resume() {
            vec![Effect::ScheduleTick]
        } else {
            self.timer.pause();
            Vec::new()
        }
    }

    fn on_acknowledge(&mut self) -> Vec<Effect> {
        match self.state {
            CycleState::Start | CycleState::Waiting => {
                let next = self.previous.opposite();
                self.timer.start(self.duration_secs(next), false);
                self.state = next.into();
                vec![Effect::ScheduleTick]
            }
            CycleState::Standing | CycleState::Sitting => Vec::new(),
        }
    }

    fn duration_secs(&self, posture: Posture) -> u64 {
        match posture {
            Posture::Standing => self.stand_secs,
            Posture::Sitting => self.sit_secs,
        }
    }
}
