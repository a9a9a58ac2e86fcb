use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

use super::GlyphAtlas;

/// A decoded font bitmap together with its glyph atlas.
///
/// Both are immutable after loading. The owner keeps the font for the whole
/// run and hands it to the composer on every update.
#[derive(Debug)]
pub struct BitmapFont {
    bitmap: RgbaImage,
    atlas: GlyphAtlas,
}

impl BitmapFont {
    /// Loads a PNG font strip from disk and builds the atlas for `charset`.
    pub fn load(path: impl AsRef<Path>, charset: &str) -> Result<Self> {
        let path = path.as_ref();
        let bitmap = load_bitmap(path)?;
        Self::from_image(bitmap, charset)
            .with_context(|| format!("font bitmap {} does not match charset {charset:?}", path.display()))
    }

    /// Builds a font from an already decoded bitmap.
    pub fn from_image(bitmap: RgbaImage, charset: &str) -> Result<Self> {
        let atlas = GlyphAtlas::from_strip(charset, bitmap.width(), bitmap.height())?;
        Ok(Self { bitmap, atlas })
    }

    #[inline]
    pub fn atlas(&self) -> &GlyphAtlas {
        &self.atlas
    }

    #[inline]
    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }
}

/// Reads and decodes an image file into straight-alpha RGBA8.
pub fn load_bitmap(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read font bitmap {}", path.display()))?;

    let image = image::load_from_memory(&bytes)
        .with_context(|| format!("failed to decode font bitmap {}", path.display()))?;

    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_names_the_path() {
        let err = load_bitmap(Path::new("/definitely/not/here/font.png")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here/font.png"));
    }

    #[test]
    fn from_image_builds_matching_atlas() {
        let font = BitmapFont::from_image(RgbaImage::new(24, 5), "abc").unwrap();
        assert_eq!(font.atlas().cell_size(), (8, 5));
        assert_eq!(font.bitmap().dimensions(), (24, 5));
    }

    #[test]
    fn from_image_rejects_mismatched_strip() {
        assert!(BitmapFont::from_image(RgbaImage::new(25, 5), "abc").is_err());
    }
}
