//! A bitmap-font clock.
//!
//! Twice a second the current local time and date are composed from a PNG
//! glyph strip into a small offscreen canvas, which is stretched to fill the
//! window. Escape or closing the window quits.

pub mod app;
pub mod compose;
pub mod config;
pub mod face;
pub mod model;

pub use app::run;
pub use config::ClockConfig;
