//! Persisted engine settings with TOML file support.
//!
//! All tweakable playback settings (sign speed, inter-word pause, avatar
//! selection, camera framing) are consolidated here. Options serialize
//! to/from TOML so a host UI can persist them across sessions; missing
//! fields fall back to defaults so partial files work.

mod avatar;
mod camera;
mod playback;

use std::path::Path;

pub use avatar::AvatarId;
pub use camera::CameraOptions;
pub use playback::{
    PlaybackOptions, PAUSE_MS_MAX, SPEED_MAX, SPEED_MIN,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::HandsignError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[playback]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Which avatar rig to load.
    pub avatar: AvatarId,
    /// Signing speed and inter-word pause.
    pub playback: PlaybackOptions,
    /// Camera framing parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// Playback values are clamped to their supported ranges, so a
    /// hand-edited `speed = 0.0` can never produce a queue that fails to
    /// converge.
    ///
    /// # Errors
    ///
    /// Returns [`HandsignError::Io`] if the file cannot be read and
    /// [`HandsignError::OptionsParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self, HandsignError> {
        let content = std::fs::read_to_string(path).map_err(HandsignError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| HandsignError::OptionsParse(e.to_string()))?;
        opts.playback.clamp_to_ranges();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`HandsignError::Io`] if the file cannot be written and
    /// [`HandsignError::OptionsParse`] if serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), HandsignError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HandsignError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(HandsignError::Io)?;
        }
        std::fs::write(path, content).map_err(HandsignError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
avatar = "xbot"

[playback]
speed = 0.2
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.avatar, AvatarId::Xbot);
        assert_eq!(opts.playback.speed, 0.2);
        // Everything else should be default
        assert_eq!(opts.playback.pause_ms, 800);
        assert_eq!(opts.camera.camera_z, 1.6);
    }

    #[test]
    fn load_clamps_out_of_range_playback_values() {
        let path = std::env::temp_dir()
            .join(format!("handsign-options-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[playback]\nspeed = 0.0\npause_ms = 99999\n",
        )
        .unwrap();
        let opts = Options::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        // A zero speed would never converge; loading must clamp it.
        assert_eq!(opts.playback.speed, SPEED_MIN);
        assert_eq!(opts.playback.pause_ms, PAUSE_MS_MAX);
    }

    #[test]
    fn schema_includes_playback_section() {
        let schema = Options::json_schema();
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("Sign Speed"));
    }
}
