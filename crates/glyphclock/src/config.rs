use std::path::PathBuf;

use glyphclock_engine::coords::ViewportSize;
use glyphclock_engine::logging::LoggingConfig;
use glyphclock_engine::window::WindowConfig;

/// Environment variable overriding the font bitmap path.
pub const FONT_ENV: &str = "GLYPHCLOCK_FONT";

/// Font bitmap shipped with the crate.
pub const DEFAULT_FONT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/font.png");

/// Clock configuration.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub title: String,
    pub font_path: PathBuf,
    /// Initial window size in physical pixels. `None` uses a third of the
    /// primary monitor.
    pub window_size: Option<(u32, u32)>,
    pub logging: LoggingConfig,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            title: "glyphclock".to_string(),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            window_size: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl ClockConfig {
    /// Defaults with the font path taken from the first argument or
    /// `GLYPHCLOCK_FONT`, in that order.
    pub fn from_env() -> Self {
        let arg = std::env::args().nth(1);
        let env = std::env::var(FONT_ENV).ok();
        Self::default().font_path(resolve_font_path(arg, env))
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = Some((width, height));
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            title: self.title.clone(),
            initial_size: self.window_size.map(|(w, h)| ViewportSize::new(w, h)),
            ..WindowConfig::default()
        }
    }
}

/// Picks the font path: explicit argument, then environment, then the
/// bundled default. Empty values are skipped.
pub fn resolve_font_path(arg: Option<String>, env: Option<String>) -> PathBuf {
    arg.into_iter()
        .chain(env)
        .find(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_PATH))
}
