use image::{imageops, RgbaImage};

use crate::coords::PixelRect;
use crate::paint::Rgba;

/// Fixed-size CPU pixel buffer that text is composed into before scaling.
///
/// The size is chosen once at construction and never changes. Every write
/// bumps [`generation`](Self::generation), which the GPU surface compares
/// against the last uploaded value to decide whether to re-upload.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    generation: u64,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            generation: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width(), self.height())
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Raw RGBA8 rows, tightly packed.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        Rgba::from_array(self.pixels.get_pixel(x, y).0)
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let px = image::Rgba(color.to_array());
        self.pixels.pixels_mut().for_each(|p| *p = px);
        self.touch();
    }

    /// Composites `src_rect` of `source` onto the canvas with its top-left
    /// corner at `(dst_x, dst_y)`, source-over. No scaling.
    ///
    /// Parts falling outside the canvas are clipped.
    pub fn draw_region(&mut self, source: &RgbaImage, src_rect: PixelRect, dst_x: u32, dst_y: u32) {
        let src_bounds = PixelRect::new(0, 0, source.width(), source.height());
        debug_assert!(
            src_bounds.contains_rect(src_rect),
            "source rect {src_rect:?} outside bitmap {src_bounds:?}"
        );

        let glyph = imageops::crop_imm(source, src_rect.x, src_rect.y, src_rect.w, src_rect.h);
        imageops::overlay(&mut self.pixels, &*glyph, dst_x.into(), dst_y.into());

        self.touch();
    }

    #[inline]
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
