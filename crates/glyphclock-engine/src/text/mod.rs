//! Bitmap font support.
//!
//! A font is a PNG strip of equally sized glyph cells. The atlas maps each
//! character of a fixed charset to its cell; there is no shaping, kerning or
//! fallback.

mod atlas;
mod bitmap_font;

pub use atlas::{AtlasError, GlyphAtlas};
pub use bitmap_font::{load_bitmap, BitmapFont};
