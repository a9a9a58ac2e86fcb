use anyhow::{Context, Result};

use glyphclock_engine::core::{RunSummary, Scheduler, SchedulerConfig};
use glyphclock_engine::device::GpuInit;
use glyphclock_engine::render::GpuSurface;
use glyphclock_engine::text::BitmapFont;
use glyphclock_engine::time::SystemClock;
use glyphclock_engine::window::Platform;

use crate::config::ClockConfig;
use crate::face::ClockFace;
use crate::model::{LocalWallClock, CLOCK_CHARSET};

/// Opens the window and runs the clock until it is closed.
///
/// Resources are released in reverse creation order on return.
pub fn run(config: &ClockConfig) -> Result<RunSummary> {
    let (mut platform, window) = Platform::open(config.window_config())?;

    let surface = GpuSurface::new(&window, GpuInit::default())?;
    let viewport = surface.size();
    log::info!("drawable area {}x{}", viewport.width, viewport.height);

    let font = BitmapFont::load(&config.font_path, CLOCK_CHARSET)
        .with_context(|| format!("failed to load font bitmap {}", config.font_path.display()))?;
    let (cell_w, cell_h) = font.atlas().cell_size();
    log::info!(
        "font {} loaded: {} glyphs, cell {cell_w}x{cell_h}",
        config.font_path.display(),
        font.atlas().len()
    );

    let face = ClockFace::new(font, surface, LocalWallClock);
    let mut scheduler = Scheduler::new(face, SystemClock, SchedulerConfig::default(), viewport)?;

    let summary = scheduler.run(&mut platform)?;
    log::info!("clock closed after {} frames", summary.frames);
    Ok(summary)
}
