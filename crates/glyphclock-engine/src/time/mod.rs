//! Time subsystem.
//!
//! Provides injectable monotonic clocks and the fixed-step accumulator used
//! by the scheduler, without coupling to the runtime. Tests drive the
//! scheduler with a [`ManualClock`]; the binary uses [`SystemClock`].

mod clock;
mod fixed_step;

pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use fixed_step::{FixedStep, FIXED_INTERVAL};
