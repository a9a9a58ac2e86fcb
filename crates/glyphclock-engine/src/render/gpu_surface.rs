use anyhow::{Context, Result};
use winit::window::Window;

use crate::coords::ViewportSize;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::paint::Rgba;

use super::{Blit, BlitRenderer, RenderCtx, RenderSurface, RenderTarget};

/// [`RenderSurface`] backed by a wgpu swapchain on a winit window.
///
/// Field order is drop order: the renderer's GPU resources go first, then
/// the device and surface. The window itself is borrowed and outlives both.
pub struct GpuSurface<'w> {
    blit: BlitRenderer,
    gpu: Gpu<'w>,
    window: &'w Window,
}

impl<'w> GpuSurface<'w> {
    /// Creates the GPU context for `window`, blocking until the adapter and
    /// device are ready.
    pub fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let gpu = pollster::block_on(Gpu::new(window, init))
            .context("GPU initialization failed for window")?;

        Ok(Self {
            blit: BlitRenderer::new(),
            gpu,
            window,
        })
    }

    /// Current drawable size as last configured.
    pub fn size(&self) -> ViewportSize {
        self.gpu.size()
    }
}

impl RenderSurface for GpuSurface<'_> {
    fn draw(&mut self, clear: Rgba, blit: &Blit<'_>) -> Result<()> {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let reason = err.to_string();
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => {
                        Err(anyhow::anyhow!("surface acquisition failed: {reason}"))
                    }
                    action => {
                        log::debug!("frame skipped: {reason} ({action:?})");
                        Ok(())
                    }
                };
            }
        };

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.gpu.size(),
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.blit.render(&rctx, &mut target, clear, blit);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);
        Ok(())
    }

    fn query_size(&mut self, reported: ViewportSize) -> ViewportSize {
        let actual = ViewportSize::from(self.window.inner_size());
        if actual != reported {
            log::debug!("resize reported {reported:?}, window now {actual:?}");
        }
        self.gpu.resize(actual);
        actual
    }
}
