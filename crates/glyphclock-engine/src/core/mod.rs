//! Core loop contracts.
//!
//! [`Stage`] is the interface between the loop and the application;
//! [`Scheduler`] owns the loop and decides when a stage runs.

mod scheduler;
mod stage;

pub use scheduler::{RunSummary, Scheduler, SchedulerConfig, SchedulerState};
pub use stage::Stage;
