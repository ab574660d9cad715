use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Optional settings file.
///
/// ```toml
/// fps = 30
/// frames = 300
/// width = 100
/// height = 32
/// log_filter = "framekit_engine=debug"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    pub fps: Option<f64>,
    pub frames: Option<u64>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub log_filter: Option<String>,
}

impl StudioConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Values given on the command line. `None` falls back to the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub fps: Option<f64>,
    pub frames: Option<u64>,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fps: f64,
    /// Frame budget; `None` runs until interrupted.
    pub frames: Option<u64>,
    pub width: usize,
    pub height: usize,
    pub log_filter: Option<String>,
}

impl Settings {
    pub const DEFAULT_FPS: f64 = 60.0;
    pub const DEFAULT_FRAMES: u64 = 600;
    pub const DEFAULT_WIDTH: usize = 80;
    pub const DEFAULT_HEIGHT: usize = 24;
    /// Slowest accepted refresh rate; 0 still means uncapped.
    pub const MIN_FPS: f64 = 0.001;

    /// Flags win over the file, the file wins over defaults.
    /// A frame budget of 0 means unlimited.
    pub fn resolve(file: StudioConfig, flags: Overrides) -> anyhow::Result<Self> {
        let fps = flags.fps.or(file.fps).unwrap_or(Self::DEFAULT_FPS);
        if !fps.is_finite() || fps < 0.0 {
            anyhow::bail!("fps must be a non-negative number, got {fps}");
        }
        if fps != 0.0 && fps < Self::MIN_FPS {
            anyhow::bail!("fps must be 0 (uncapped) or at least {}, got {fps}", Self::MIN_FPS);
        }

        let width = flags.width.or(file.width).unwrap_or(Self::DEFAULT_WIDTH);
        let height = flags.height.or(file.height).unwrap_or(Self::DEFAULT_HEIGHT);
        if width == 0 || height == 0 {
            anyhow::bail!("terminal size must be non-zero, got {width}x{height}");
        }

        let frames = match flags.frames.or(file.frames).unwrap_or(Self::DEFAULT_FRAMES) {
            0 => None,
            n => Some(n),
        };

        Ok(Self {
            fps,
            frames,
            width,
            height,
            log_filter: file.log_filter,
        })
    }
}
