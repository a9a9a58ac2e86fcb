//! Pixel geometry shared by the atlas, canvas and presenter.
//!
//! Canonical CPU space:
//! - Physical pixels, integer coordinates
//! - Origin top-left
//! - +X right, +Y down
//!
//! The GPU blit converts destination rects to NDC using a viewport uniform.

mod rect;
mod viewport;

pub use rect::PixelRect;
pub use viewport::ViewportSize;
