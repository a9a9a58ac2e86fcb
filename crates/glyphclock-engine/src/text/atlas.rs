use std::collections::HashMap;
use std::fmt;

use crate::coords::PixelRect;

/// Error returned by [`GlyphAtlas::from_strip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtlasError {
    /// The charset is empty or repeats a character.
    InvalidCharset(String),
    /// The bitmap cannot be split into one equal cell per character.
    StripMismatch { width: u32, height: u32, glyphs: u32 },
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::InvalidCharset(why) => write!(f, "invalid atlas charset: {why}"),
            AtlasError::StripMismatch { width, height, glyphs } => write!(
                f,
                "font bitmap {width}x{height} cannot be split into {glyphs} equal glyph cells"
            ),
        }
    }
}

impl std::error::Error for AtlasError {}

/// Immutable map from character to its source rectangle in a font bitmap.
///
/// The atlas is built for one fixed charset; every character a caller can
/// produce must be in it. [`lookup`](Self::lookup) treats a miss as a broken
/// invariant and panics. Use [`get`](Self::get) to probe.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    glyphs: HashMap<char, PixelRect>,
    cell_w: u32,
    cell_h: u32,
    bounds: PixelRect,
}

impl GlyphAtlas {
    /// Builds an atlas for a bitmap laid out as a single horizontal strip of
    /// equally sized cells, one per character of `charset`, in order.
    pub fn from_strip(charset: &str, bitmap_width: u32, bitmap_height: u32) -> Result<Self, AtlasError> {
        let count = charset.chars().count() as u32;
        if count == 0 {
            return Err(AtlasError::InvalidCharset("charset is empty".to_string()));
        }

        if bitmap_height == 0 || bitmap_width < count || bitmap_width % count != 0 {
            return Err(AtlasError::StripMismatch {
                width: bitmap_width,
                height: bitmap_height,
                glyphs: count,
            });
        }

        let cell_w = bitmap_width / count;
        let cell_h = bitmap_height;

        let mut glyphs = HashMap::with_capacity(count as usize);
        for (i, ch) in charset.chars().enumerate() {
            let rect = PixelRect::new(i as u32 * cell_w, 0, cell_w, cell_h);
            if glyphs.insert(ch, rect).is_some() {
                return Err(AtlasError::InvalidCharset(format!("duplicate character {ch:?}")));
            }
        }

        Ok(Self {
            glyphs,
            cell_w,
            cell_h,
            bounds: PixelRect::new(0, 0, bitmap_width, bitmap_height),
        })
    }

    /// Source rectangle of `ch`.
    ///
    /// # Panics
    ///
    /// Panics if `ch` is not part of the atlas charset. Callers format text
    /// from a fixed pattern whose characters the atlas was built for, so a
    /// miss means the two are out of sync.
    #[inline]
    #[track_caller]
    pub fn lookup(&self, ch: char) -> PixelRect {
        match self.glyphs.get(&ch) {
            Some(rect) => *rect,
            None => panic!("glyph atlas has no entry for {ch:?}; text and charset are out of sync"),
        }
    }

    #[inline]
    pub fn get(&self, ch: char) -> Option<PixelRect> {
        self.glyphs.get(&ch).copied()
    }

    /// Size of one glyph cell as `(width, height)`.
    #[inline]
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_w, self.cell_h)
    }

    /// Extent of the source bitmap.
    #[inline]
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: &str = "0123456789:-";

    #[test]
    fn strip_cells_follow_charset_order() {
        let atlas = GlyphAtlas::from_strip(DIGITS, 96, 16).unwrap();
        assert_eq!(atlas.cell_size(), (8, 16));
        assert_eq!(atlas.lookup('0'), PixelRect::new(0, 0, 8, 16));
        assert_eq!(atlas.lookup('9'), PixelRect::new(72, 0, 8, 16));
        assert_eq!(atlas.lookup(':'), PixelRect::new(80, 0, 8, 16));
        assert_eq!(atlas.lookup('-'), PixelRect::new(88, 0, 8, 16));
        assert_eq!(atlas.len(), 12);
    }

    #[test]
    fn get_misses_without_panicking() {
        let atlas = GlyphAtlas::from_strip(DIGITS, 96, 16).unwrap();
        assert_eq!(atlas.get('x'), None);
    }

    #[test]
    #[should_panic(expected = "no entry for 'A'")]
    fn lookup_of_unmapped_char_panics() {
        let atlas = GlyphAtlas::from_strip(DIGITS, 96, 16).unwrap();
        let _ = atlas.lookup('A');
    }

    #[test]
    fn width_not_divisible_is_rejected() {
        let err = GlyphAtlas::from_strip(DIGITS, 100, 16).unwrap_err();
        assert_eq!(err, AtlasError::StripMismatch { width: 100, height: 16, glyphs: 12 });
    }

    #[test]
    fn zero_height_is_rejected() {
        assert!(GlyphAtlas::from_strip(DIGITS, 96, 0).is_err());
    }

    #[test]
    fn duplicate_chars_are_rejected() {
        assert!(matches!(
            GlyphAtlas::from_strip("00", 16, 8),
            Err(AtlasError::InvalidCharset(_))
        ));
    }

    #[test]
    fn empty_charset_is_rejected() {
        assert!(GlyphAtlas::from_strip("", 16, 8).is_err());
    }
}
