use anyhow::Result;

use crate::coords::ViewportSize;

/// The Update/Render pair driven by [`Scheduler`](super::Scheduler).
///
/// The scheduler decides *when*; a stage decides *what*. Implementations
/// must not block: the event wait is the loop's only suspension point.
pub trait Stage {
    /// Samples whatever state the next frame shows.
    fn update(&mut self) -> Result<()>;

    /// Draws one frame covering `viewport`.
    fn render(&mut self, viewport: ViewportSize) -> Result<()>;

    /// Called after a resize notification. Returns the size the next
    /// render should cover, which may differ from `reported` if the
    /// presentation surface disagrees.
    fn viewport_changed(&mut self, reported: ViewportSize) -> ViewportSize {
        reported
    }
}

impl<S: Stage + ?Sized> Stage for &mut S {
    fn update(&mut self) -> Result<()> {
        (**self).update()
    }

    fn render(&mut self, viewport: ViewportSize) -> Result<()> {
        (**self).render(viewport)
    }

    fn viewport_changed(&mut self, reported: ViewportSize) -> ViewportSize {
        (**self).viewport_changed(reported)
    }
}
