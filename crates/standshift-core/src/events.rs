//! The engine's external vocabulary.
//!
//! Frontends feed [`InputEvent`]s in, execute the returned [`Effect`]s,
//! and render from [`Snapshot`]s. All three are serde-serializable so a
//! frontend can log or ship them as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::CycleState;

/// External inputs to the cycle machine: the scheduler's tick plus the
/// user-intent events. Delivered one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    Tick,
    TogglePause,
    Acknowledge,
    Quit,
}

/// Side effects a transition requests from its caller. The machine
/// performs none of these itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    /// Deliver another `Tick` in one second.
    ScheduleTick,
    /// Route `(title, message)` to the configured notifiers. Delivery
    /// failure must not block or alter the transition that requested it.
    Notify { title: String, message: String },
    /// Quit was received; the host should shut down.
    Terminate,
}

/// Read-only projection of the machine for rendering. Produced on demand;
/// consumers never feed it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: CycleState,
    /// Remaining time in the active interval, formatted `MM:SS`.
    pub remaining: String,
    /// Elapsed fraction of the active interval, 0.0 .. 1.0.
    pub progress: f64,
    pub paused: bool,
    pub cycle_count: u32,
    pub at: DateTime<Utc>,
}
