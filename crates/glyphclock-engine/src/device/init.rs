/// GPU settings for the clock window.
///
/// The clock draws one opaque textured quad twice a second, so everything
/// beyond these three knobs (features, limits, alpha, frame latency) is fixed
/// in [`Gpu::new`](super::Gpu::new).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// The canvas holds sRGB bytes; an sRGB surface keeps them unchanged on screen.
    pub prefer_srgb: bool,

    /// Present mode. FIFO is supported everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Adapter power preference. An integrated GPU is plenty.
    pub power_preference: wgpu::PowerPreference,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            power_preference: wgpu::PowerPreference::LowPower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_low_power_vsync_srgb() {
        let init = GpuInit::default();
        assert!(init.prefer_srgb);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(init.power_preference, wgpu::PowerPreference::LowPower);
    }
}
