//! Configuration for the widget canvas editor
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Grid settings (layout size, density, padding, delete zone)
//! - Widget palette (kinds and their spans per layout)

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
pub use widgetgrid_core::{GridDensity, LayoutSize};
use widgetgrid_core::{GridSpec, Palette};

/// Where dropping a placed widget deletes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteZone {
    /// Outside the grid bounds
    #[default]
    OutsideGrid,
    /// Outside the whole canvas
    OutsideCanvas,
}

impl std::fmt::Display for DeleteZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutsideGrid => write!(f, "outside_grid"),
            Self::OutsideCanvas => write!(f, "outside_canvas"),
        }
    }
}

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Selected layout size
    pub layout_size: LayoutSize,
    /// Grid density multiplier
    pub density: GridDensity,
    /// Pixels between a span's area and the widget drawn in it, per side
    pub cell_padding: f64,
    /// Drop zone that deletes a dragged widget
    pub delete_zone: DeleteZone,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            layout_size: LayoutSize::Medium,
            density: GridDensity::Standard,
            cell_padding: 8.0,
            delete_zone: DeleteZone::OutsideGrid,
        }
    }
}

impl GridSettings {
    /// The grid shape these settings select.
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::for_layout(self.layout_size, self.density)
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSettings,
    /// Draggable widget kinds
    #[serde(default = "Palette::builtin")]
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            palette: Palette::builtin(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let padding = self.grid.cell_padding;
        if !padding.is_finite() || padding < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "grid.cell_padding".to_string(),
                value: padding.to_string(),
            });
        }

        let mut kinds = HashSet::new();
        for entry in self.palette.iter() {
            if entry.kind.trim().is_empty() {
                return Err(ConfigError::EmptyPaletteKind);
            }
            if !kinds.insert(entry.kind.as_str()) {
                return Err(ConfigError::DuplicatePaletteKind(entry.kind.clone()));
            }
        }

        Ok(())
    }

    /// The grid shape selected by this config.
    pub fn grid_spec(&self) -> GridSpec {
        self.grid.grid_spec()
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
