//! Window + platform event pump.
//!
//! Owns the `winit` EventLoop and Window and exposes them as a bounded,
//! blocking [`EventSource`](crate::input::EventSource).

mod pump;

pub use pump::{default_window_size, Platform, WindowConfig};
