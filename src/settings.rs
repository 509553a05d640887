//! Animation settings
//!
//! Stored as JSON: LocalStorage on web, an optional file on native.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("ball radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("ball speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidLayout { name: &'static str, value: f32 },
    #[error("surface must have a positive finite size, got {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
}

/// How the top of the liquid shape is closed between the intersection points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CapStyle {
    /// Straight edge from the right intersection back to the left one
    Straight,
    /// Quadratic curve controlled at the ball's horizontal center
    #[default]
    Quadratic,
}

impl CapStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapStyle::Straight => "Straight",
            CapStyle::Quadratic => "Quadratic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "straight" | "line" => Some(CapStyle::Straight),
            "quadratic" | "curve" => Some(CapStyle::Quadratic),
            _ => None,
        }
    }
}

/// Animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Motion ===
    /// Ball radius in pixels
    pub ball_radius: f32,
    /// Ball rise per tick in pixels
    pub ball_speed: f32,
    /// Multiplier on drag for the intersection fallback drift
    pub drift_factor: f32,

    // === Layout ===
    /// Distance of the baseline above the bottom of the surface
    pub base_line_offset: f32,
    /// Horizontal gap between the ball's edge and each base point
    pub base_point_spread: f32,
    /// Horizontal offset of the side curve control points
    pub control_point_deviance: f32,
    /// Closing edge of the liquid shape
    pub cap_style: CapStyle,

    // === Colors ===
    pub ball_color: String,
    pub liquid_color: String,
    pub pool_color: String,
    /// Fill of the debug intersection markers
    pub marker_color: String,

    // === Debug ===
    /// Draw the raw water line and intersection markers
    pub debug: bool,
    /// Radius of the intersection markers
    pub marker_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            drift_factor: DRIFT_FACTOR,

            base_line_offset: BASE_LINE_OFFSET,
            base_point_spread: BASE_POINT_SPREAD,
            control_point_deviance: CONTROL_POINT_DEVIANCE,
            cap_style: CapStyle::Quadratic,

            ball_color: "hotpink".to_string(),
            liquid_color: "hotpink".to_string(),
            pool_color: "hotpink".to_string(),
            marker_color: "black".to_string(),

            debug: false,
            marker_radius: 4.0,
        }
    }
}

impl Settings {
    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(SettingsError::InvalidRadius(self.ball_radius));
        }
        if !(self.ball_speed.is_finite() && self.ball_speed > 0.0) {
            return Err(SettingsError::InvalidSpeed(self.ball_speed));
        }

        let layout = [
            ("drift_factor", self.drift_factor),
            ("base_line_offset", self.base_line_offset),
            ("base_point_spread", self.base_point_spread),
            ("control_point_deviance", self.control_point_deviance),
            ("marker_radius", self.marker_radius),
        ];
        for (name, value) in layout {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::InvalidLayout { name, value });
            }
        }

        Ok(())
    }

    /// Parse and validate settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply overrides from a URL query string such as `?debug&cap=straight`.
    /// Unknown keys and unparsable values are ignored.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "debug" => self.debug = !matches!(value, "0" | "false"),
                "cap" => match CapStyle::from_str(value) {
                    Some(cap) => self.cap_style = cap,
                    None => log::warn!("Unknown cap style {:?}", value),
                },
                _ => {}
            }
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "meniscus_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from an optional file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from_path(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
