//! Rendering: offscreen canvas, stretch presenter and the wgpu blit.
//!
//! Text is composed on the CPU into a fixed-size [`Canvas`]. The
//! [`StretchPresenter`] maps that canvas onto whatever size the window
//! currently has through a [`RenderSurface`]; [`GpuSurface`] is the wgpu
//! implementation.
//!
//! Convention:
//! - CPU geometry is in physical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod blit;
mod canvas;
mod common;
mod ctx;
mod gpu_surface;
mod present;

pub use blit::BlitRenderer;
pub use canvas::Canvas;
pub use ctx::{RenderCtx, RenderTarget};
pub use gpu_surface::GpuSurface;
pub use present::{Blit, RenderSurface, StretchPresenter};
