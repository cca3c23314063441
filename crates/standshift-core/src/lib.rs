//! # StandShift Core Library
//!
//! Core logic for StandShift, a posture-change reminder that alternates
//! the user between standing and sitting intervals and signals when it is
//! time to switch.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a caller-driven countdown; the frontend delivers
//!   one tick per second, the engine never reads the wall clock
//! - **Cycle Machine**: the Start/Standing/Sitting/Waiting state machine
//!   that owns the timer and turns input events into side-effect requests
//! - **Notifications**: a capability trait with desktop, terminal-bell,
//!   and fan-out implementations
//! - **Config**: TOML configuration for interval lengths and delivery
//!   preferences
//!
//! The library is single-threaded and event-driven: the machine processes
//! one event to completion, returns the side effects the host must
//! execute, and holds no locks. Embedding it in a concurrent host only
//! requires serializing event delivery.
//!
//! ## Key Components
//!
//! - [`IntervalTimer`]: single-interval countdown
//! - [`CycleMachine`]: interval orchestration and transition rules
//! - [`Notifier`]: notification delivery capability
//! - [`Config`]: application configuration

pub mod config;
pub mod error;
pub mod events;
pub mod notify;
pub mod timer;

pub use config::{parse_duration, Config};
pub use error::{ConfigError, CoreError, NotifyError};
pub use events::{Effect, InputEvent, Snapshot};
pub use notify::{ComboNotifier, DesktopNotifier, Notifier, SoundNotifier};
pub use timer::{format_mm_ss, CycleMachine, CycleState, IntervalTimer, Posture};
