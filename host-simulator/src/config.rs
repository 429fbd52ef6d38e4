use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simulator configuration, loaded from a TOML file when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Media source to decode.
    pub source: PathBuf,

    /// Transcode destination.
    pub destination: PathBuf,

    /// Initial drawable size reported to the surface.
    pub surface_width: u32,
    pub surface_height: u32,

    /// Display refresh rate driving the render domain.
    pub refresh_rate_hz: u32,

    /// Total media duration reported by the simulated engine.
    pub media_duration_ms: u64,

    /// How long the simulated UI stays in the foreground/background.
    pub foreground_ms: u64,
    pub background_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("./test-videos/vid.mp4"),
            destination: PathBuf::from("./test-videos/out.mp4"),
            surface_width: 1280,
            surface_height: 720,
            refresh_rate_hz: 60,
            media_duration_ms: 90_000,
            foreground_ms: 1_500,
            background_ms: 500,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse config file {:?}", path))
    }
}
