//! Pixel color model shared by the canvas and the GPU presenter.
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Rgba;
