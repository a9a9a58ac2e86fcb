//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates platform events into [`ClockEvent`]s; the
//! scheduler feeds them through the pure [`dispatch`] function.

mod dispatch;
mod source;
mod types;

pub mod platform;

pub use dispatch::{dispatch, Dispatch};
pub use source::EventSource;
pub use types::{ClockEvent, Key};
