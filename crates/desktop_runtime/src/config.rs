//! Layout constants for the desktop canvas, loaded from the bundled `desktop.toml`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowSize;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));
}

#[derive(Debug, Error)]
/// Errors raised while loading [`DesktopConfig`].
pub enum ConfigError {
    /// The embedded config JSON could not be decoded.
    #[error("desktop config decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    /// A field holds a value the window manager cannot work with.
    #[error("desktop config field `{field}` is invalid: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Logical canvas dimensions and window-manager tuning.
pub struct DesktopConfig {
    /// Width of the logical design canvas.
    pub design_width: i32,
    /// Height of the logical design canvas.
    pub design_height: i32,
    /// Width of an expanded window.
    pub expanded_width: i32,
    /// Height of an expanded window.
    pub expanded_height: i32,
    /// Minimum distance kept between an expanding window and the viewport edge.
    pub edge_padding: i32,
    /// Rendered height of a minimized window.
    pub title_bar_height: i32,
    /// How long body clicks stay suppressed after a drag ends.
    pub drag_click_cooldown_ms: u32,
    /// Number of leading catalog projects placed in the first category group.
    pub research_group_size: usize,
    /// Duration of the loading splash before the desktop mounts.
    pub loading_splash_ms: u32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            design_width: 2320,
            design_height: 1400,
            expanded_width: 800,
            expanded_height: 600,
            edge_padding: 20,
            title_bar_height: 40,
            drag_click_cooldown_ms: 50,
            research_group_size: 5,
            loading_splash_ms: 2000,
        }
    }
}

impl DesktopConfig {
    /// Decodes and validates the config bundled at build time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the embedded JSON is malformed or fails [`Self::validate`].
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(generated::DESKTOP_CONFIG_JSON)
    }

    /// Decodes a config from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if decoding or validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the window manager relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("design_width", self.design_width),
            ("design_height", self.design_height),
            ("expanded_width", self.expanded_width),
            ("expanded_height", self.expanded_height),
            ("title_bar_height", self.title_bar_height),
        ];
        if let Some((field, _)) = positive.into_iter().find(|(_, value)| *value <= 0) {
            return Err(ConfigError::Invalid {
                field,
                reason: "must be positive",
            });
        }
        if self.edge_padding < 0 {
            return Err(ConfigError::Invalid {
                field: "edge_padding",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    /// Footprint of an expanded window.
    pub fn expanded_size(&self) -> WindowSize {
        WindowSize {
            w: self.expanded_width,
            h: self.expanded_height,
        }
    }
}
