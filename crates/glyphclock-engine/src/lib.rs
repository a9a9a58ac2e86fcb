//! glyphclock engine crate.
//!
//! Platform, GPU and timing pieces for a fixed-cadence bitmap-font display:
//! a blocking event pump, a fixed-step scheduler, a CPU composition canvas
//! and a wgpu stretch presenter.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod text;
