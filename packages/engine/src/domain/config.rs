//! Surface configuration, loaded from JSON handed in by the host page
//!
//! Every field has a default, so `{}` is a valid config and the host only
//! needs to spell out what it overrides.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::domain::color::{Color, BLANK, BORDER, PRESET_PALETTE};

pub const DEFAULT_GRID_SIZE: u32 = 100;
pub const MAX_GRID_SIZE: u32 = 1024;
/// Pointer travel (CSS px) that turns a click into a drag
pub const DEFAULT_MOVEMENT_THRESHOLD: f64 = 5.0;
pub const DEFAULT_BORDER_WIDTH: f64 = 2.0;

const CONFIG_FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceConfig {
    /// Cells per row and per column (N)
    pub grid_size: u32,
    /// Divisor for the cell height; `None` means `grid_size`.
    /// Set to 55 to reproduce the legacy stretched rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_divisor: Option<u32>,
    pub movement_threshold: f64,
    pub blank_color: Color,
    pub border_color: Color,
    /// Stroke width in device pixels
    pub border_width: f64,
    pub palette: Vec<Color>,
    /// Active color at startup; `None` means the first palette entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_color: Option<Color>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            row_divisor: None,
            movement_threshold: DEFAULT_MOVEMENT_THRESHOLD,
            blank_color: BLANK,
            border_color: BORDER,
            border_width: DEFAULT_BORDER_WIDTH,
            palette: PRESET_PALETTE.to_vec(),
            initial_color: None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigManifest<'a> {
    format_version: u32,
    cell_count: u32,
    #[serde(flatten)]
    config: &'a SurfaceConfig,
}

impl SurfaceConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: SurfaceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "gridSize must be in 1..={MAX_GRID_SIZE}, got {}",
                self.grid_size
            )));
        }
        if self.row_divisor == Some(0) {
            return Err(EngineError::InvalidConfig("rowDivisor must be >= 1".to_string()));
        }
        if !self.movement_threshold.is_finite() || self.movement_threshold < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "movementThreshold must be a finite value >= 0, got {}",
                self.movement_threshold
            )));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "borderWidth must be a finite value >= 0, got {}",
                self.border_width
            )));
        }
        if self.palette.is_empty() {
            return Err(EngineError::InvalidConfig("palette must not be empty".to_string()));
        }
        Ok(())
    }

    #[inline]
    pub fn row_divisor(&self) -> u32 {
        self.row_divisor.unwrap_or(self.grid_size)
    }

    pub fn initial_color(&self) -> Color {
        self.initial_color
            .or_else(|| self.palette.first().copied())
            .unwrap_or(PRESET_PALETTE[0])
    }

    pub fn cell_count(&self) -> u32 {
        self.grid_size * self.grid_size
    }

    /// Manifest for the host page: the effective config plus derived values
    pub fn to_json(&self) -> String {
        let out = ConfigManifest {
            format_version: CONFIG_FORMAT_VERSION,
            cell_count: self.cell_count(),
            config: self,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}
