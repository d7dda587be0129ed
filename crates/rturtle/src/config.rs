use crate::emitter::Palette;
use crate::geometry::Flattening;
use crate::postprocessor::Dialect;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for turning an outline into a script, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fill color name for solid contours.
    pub fill_color: String,
    /// Fill color name painted for holes; should match the canvas background.
    pub hole_color: String,
    pub dialect: Dialect,
    pub flattening: Flattening,
    /// Shift the outline left by half its width before decomposing.
    pub center_horizontally: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            fill_color: palette.fill,
            hole_color: palette.hole,
            dialect: Dialect::default(),
            flattening: Flattening::default(),
            center_horizontally: false,
        }
    }
}

impl RenderConfig {
    pub fn palette(&self) -> Palette {
        Palette {
            fill: self.fill_color.clone(),
            hole: self.hole_color.clone(),
        }
    }

    /// Load a config from the provided path. Missing files yield the defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let config: RenderConfig =
            serde_json::from_slice(&data).with_context(|| format!("deserialize config {}", path.display()))?;
        Ok(config)
    }

    /// Persist the config to the provided path, ensuring the directory exists.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }

        let data = serde_json::to_vec_pretty(self).context("serialize config to JSON bytes")?;
        fs::write(path, data).with_context(|| format!("write config {}", path.display()))
    }

    /// Resolve the default config path (`~/.rturtle/config.json`).
    pub fn default_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("could not determine home directory"))?;
        Ok(home.join(".rturtle").join("config.json"))
    }
}
