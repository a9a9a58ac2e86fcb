use anyhow::Result;

use glyphclock_engine::coords::ViewportSize;
use glyphclock_engine::core::Stage;
use glyphclock_engine::render::{Canvas, RenderSurface, StretchPresenter};
use glyphclock_engine::text::BitmapFont;

use crate::compose::{self, BACKGROUND};
use crate::model::{ClockModel, ClockSnapshot, WallClock};

/// The clock as a [`Stage`]: update samples the wall clock and recomposes
/// the canvas, render stretches the canvas onto the surface.
pub struct ClockFace<S, W> {
    model: ClockModel<W>,
    font: BitmapFont,
    canvas: Canvas,
    presenter: StretchPresenter,
    surface: S,
    shown: Option<ClockSnapshot>,
}

impl<S: RenderSurface, W: WallClock> ClockFace<S, W> {
    pub fn new(font: BitmapFont, surface: S, wall: W) -> Self {
        let canvas = compose::canvas_for(&font);
        Self {
            model: ClockModel::new(wall),
            font,
            canvas,
            presenter: StretchPresenter::new(BACKGROUND),
            surface,
            shown: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Snapshot composed by the last update.
    pub fn shown(&self) -> Option<&ClockSnapshot> {
        self.shown.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: RenderSurface, W: WallClock> Stage for ClockFace<S, W> {
    fn update(&mut self) -> Result<()> {
        let snapshot = self.model.sample();
        compose::compose(&mut self.canvas, &snapshot, &self.font);
        log::trace!("composed {} {}", snapshot.time_text, snapshot.date_text);
        self.shown = Some(snapshot);
        Ok(())
    }

    fn render(&mut self, viewport: ViewportSize) -> Result<()> {
        self.presenter.present(&self.canvas, viewport, &mut self.surface)
    }

    fn viewport_changed(&mut self, reported: ViewportSize) -> ViewportSize {
        self.surface.query_size(reported)
    }
}
