use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "DRAWING_STUDIO_CONFIG";

/// Startup settings for the studio window and canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub window_width: f32,
    pub window_height: f32,
    pub brush_width: u32,
    pub color: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            window_width: 1000.0,
            window_height: 700.0,
            brush_width: 3,
            color: "Black".to_owned(),
        }
    }
}

impl StudioConfig {
    /// Parse a config file. Fields missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> StudioResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| StudioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| StudioError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the canvas cannot be built from
    pub fn validate(&self) -> StudioResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(StudioError::InvalidDimensions {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        Ok(())
    }

    /// Load from `DRAWING_STUDIO_CONFIG` if set, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("Using default config: {}", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let path = std::env::temp_dir().join("drawing_studio_partial_config.json");
        std::fs::write(&path, r#"{ "canvas_width": 320, "color": "Red" }"#).unwrap();

        let config = StudioConfig::from_file(&path).unwrap();
        assert_eq!(config.canvas_width, 320);
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.color, "Red");
        assert_eq!(config.brush_width, 3);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_zero_canvas_size_is_rejected() {
        let path = std::env::temp_dir().join("drawing_studio_zero_canvas_config.json");
        std::fs::write(&path, r#"{ "canvas_width": 0 }"#).unwrap();

        let err = StudioConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, StudioError::InvalidDimensions { width: 0, height: 600 }));
        assert!(StudioConfig::default().validate().is_ok());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let path = std::env::temp_dir().join("drawing_studio_broken_config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = StudioConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, StudioError::Config { .. }));
        assert!(err.to_string().contains("drawing_studio_broken_config.json"));

        std::fs::remove_file(&path).ok();
    }
}
