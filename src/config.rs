use std::path::PathBuf;
use std::time::Duration;

use crate::foundation::error::{LaneError, LaneResult};

/// Runtime settings, passed explicitly to whatever needs them.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Riot developer key. Empty means Riot calls cannot be made.
    pub api_key: String,
    /// Role icons, rank emblems and fonts.
    pub assets_dir: PathBuf,
    /// Pinned Data Dragon version; the latest one is looked up when absent.
    pub ddragon_version: Option<String>,
    pub rank_spacing_ms: u64,
    pub request_timeout_secs: u64,
    pub image_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            assets_dir: PathBuf::from("assets"),
            ddragon_version: None,
            rank_spacing_ms: 100,
            request_timeout_secs: 10,
            image_timeout_secs: 5,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> LaneResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LaneResult<Self> {
        let mut out = Self::default();
        if let Some(key) = lookup("RIOT_API_KEY") {
            out.api_key = key.trim().to_string();
        }
        if let Some(dir) = lookup("LANECARD_ASSETS_DIR").filter(|d| !d.trim().is_empty()) {
            out.assets_dir = PathBuf::from(dir.trim());
        }
        if let Some(v) = lookup("LANECARD_DDRAGON_VERSION").filter(|v| !v.trim().is_empty()) {
            out.ddragon_version = Some(v.trim().to_string());
        }
        if let Some(ms) = lookup("LANECARD_RANK_SPACING_MS") {
            out.rank_spacing_ms = ms.trim().parse().map_err(|e| {
                LaneError::validation(format!("LANECARD_RANK_SPACING_MS '{ms}': {e}"))
            })?;
        }
        Ok(out)
    }

    /// The API key, or a validation error when none is configured.
    pub fn require_api_key(&self) -> LaneResult<&str> {
        if self.api_key.is_empty() {
            return Err(LaneError::validation(
                "RIOT_API_KEY is not set; Riot endpoints need a developer key",
            ));
        }
        Ok(&self.api_key)
    }

    pub fn rank_spacing(&self) -> Duration {
        Duration::from_millis(self.rank_spacing_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs)
    }
}
