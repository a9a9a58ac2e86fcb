//! Shared GPU types for the blit pipeline.

use bytemuck::{Pod, Zeroable};

use crate::coords::{PixelRect, ViewportSize};

// ── blit uniform ──────────────────────────────────────────────────────────

/// Layout mirrors `struct Blit` in `shaders/blit.wgsl` (48 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct BlitUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
    pub dst_min: [f32; 2],
    pub dst_max: [f32; 2],
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

impl BlitUniform {
    /// Maps `src` (texels of a `tex_w` x `tex_h` texture) onto `dst` (pixels
    /// of `viewport`).
    pub(super) fn new(viewport: ViewportSize, src: PixelRect, dst: PixelRect, tex_w: u32, tex_h: u32) -> Self {
        let tw = tex_w.max(1) as f32;
        let th = tex_h.max(1) as f32;
        Self {
            viewport: [viewport.width.max(1) as f32, viewport.height.max(1) as f32],
            _pad: [0.0; 2],
            dst_min: [dst.x as f32, dst.y as f32],
            dst_max: [dst.right() as f32, dst.bottom() as f32],
            uv_min: [src.x as f32 / tw, src.y as f32 / th],
            uv_max: [src.right() as f32 / tw, src.bottom() as f32 / th],
        }
    }
}

/// Returns the `wgpu` minimum binding size for the blit uniform buffer.
///
/// `BlitUniform` is 48 bytes so its size is always non-zero.
pub(super) fn blit_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<BlitUniform>() as u64)
        .expect("BlitUniform has non-zero size by construction")
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_48_bytes() {
        assert_eq!(std::mem::size_of::<BlitUniform>(), 48);
    }

    #[test]
    fn full_canvas_maps_to_unit_uv_and_full_viewport() {
        let vp = ViewportSize::new(1920, 300);
        let u = BlitUniform::new(vp, PixelRect::new(0, 0, 80, 32), vp.full_rect(), 80, 32);
        assert_eq!(u.viewport, [1920.0, 300.0]);
        assert_eq!(u.dst_min, [0.0, 0.0]);
        assert_eq!(u.dst_max, [1920.0, 300.0]);
        assert_eq!(u.uv_min, [0.0, 0.0]);
        assert_eq!(u.uv_max, [1.0, 1.0]);
    }

    #[test]
    fn partial_source_maps_to_fractional_uv() {
        let vp = ViewportSize::new(100, 100);
        let u = BlitUniform::new(vp, PixelRect::new(40, 16, 40, 16), vp.full_rect(), 80, 32);
        assert_eq!(u.uv_min, [0.5, 0.5]);
        assert_eq!(u.uv_max, [1.0, 1.0]);
    }
}
