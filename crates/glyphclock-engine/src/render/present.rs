use anyhow::{Context, Result};

use crate::coords::{PixelRect, ViewportSize};
use crate::paint::Rgba;

use super::Canvas;

/// One stretch-blit request: copy `src` of `canvas` onto `dst` of the surface.
///
/// When `src` and `dst` differ in size the copy is scaled independently on
/// each axis.
#[derive(Debug, Copy, Clone)]
pub struct Blit<'a> {
    pub canvas: &'a Canvas,
    pub src: PixelRect,
    pub dst: PixelRect,
}

/// Window-side rendering collaborator.
///
/// Implementations own the swapchain (or a test double of it). A call to
/// [`draw`](Self::draw) clears the surface, performs the blit and makes the
/// frame visible before returning.
pub trait RenderSurface {
    /// Renders and presents one frame.
    fn draw(&mut self, clear: Rgba, blit: &Blit<'_>) -> Result<()>;

    /// Re-queries the drawable size after the platform reported a resize and
    /// reconfigures the swapchain if needed.
    ///
    /// `reported` is the size carried by the resize notification; surfaces
    /// backed by a real window may prefer their own query.
    fn query_size(&mut self, reported: ViewportSize) -> ViewportSize;
}

/// Stretches the whole canvas over the whole viewport.
///
/// Aspect ratio is not preserved: the canvas origin maps to the window origin
/// and the canvas extent maps to the viewport extent.
#[derive(Debug, Copy, Clone)]
pub struct StretchPresenter {
    background: Rgba,
}

impl StretchPresenter {
    pub const fn new(background: Rgba) -> Self {
        Self { background }
    }

    /// Computes the blit for `viewport` without issuing it.
    pub fn plan<'a>(&self, canvas: &'a Canvas, viewport: ViewportSize) -> Blit<'a> {
        Blit {
            canvas,
            src: canvas.bounds(),
            dst: viewport.full_rect(),
        }
    }

    /// Clears, stretch-blits and presents one frame.
    ///
    /// A zero-area viewport (e.g. a minimized window) has nothing to draw
    /// into and is skipped.
    pub fn present<S>(&self, canvas: &Canvas, viewport: ViewportSize, surface: &mut S) -> Result<()>
    where
        S: RenderSurface + ?Sized,
    {
        if viewport.is_empty() {
            log::trace!("present skipped: empty viewport {viewport:?}");
            return Ok(());
        }

        let blit = self.plan(canvas, viewport);
        surface
            .draw(self.background, &blit)
            .with_context(|| format!("failed to present frame at {}x{}", viewport.width, viewport.height))
    }
}

impl Default for StretchPresenter {
    fn default() -> Self {
        Self::new(Rgba::BLACK)
    }
}
