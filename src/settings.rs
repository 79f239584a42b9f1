//! Game settings
//!
//! Supplied by the host page as JSON in a
//! `<script id="game-config" type="application/json">` element. Every field
//! is optional; missing or malformed config falls back to defaults.

use serde::Deserialize;

/// How wall-clock frames map onto simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    /// Fixed `SIM_DT` steps through an accumulator; speed independent of refresh rate
    #[default]
    FixedStep,
    /// Exactly one tick per display frame (runs fast on high refresh displays)
    PerFrame,
}

impl TimingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimingMode::FixedStep => "fixed_step",
            TimingMode::PerFrame => "per_frame",
        }
    }
}

/// Host-supplied configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame-to-tick mapping
    pub timing: TimingMode,
    /// Fixed RNG seed (random per page load when unset)
    pub seed: Option<u64>,
    /// Disable the lecturer's bounce animation
    pub reduced_motion: bool,
    /// Console log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timing: TimingMode::FixedStep,
            seed: None,
            reduced_motion: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings, logging and falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed game config: {}", e);
                Self::default()
            }
        }
    }

    /// Log level, defaulting to Info for unknown names
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Config element id in the host page
    #[cfg(target_arch = "wasm32")]
    const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Load settings from the host page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json_or_default(&json),
            _ => Self::default(),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
