mod cycle;
mod engine;

pub use cycle::{CycleMachine, CycleState, Posture};
pub use engine::{format_mm_ss, IntervalTimer};
