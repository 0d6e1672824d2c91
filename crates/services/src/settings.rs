use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use imaging_core::model::ModalityId;
use imaging_core::scene::VIEWPORT_HEIGHT;

use crate::error::SettingsError;

pub const ENV_CONFIG: &str = "IMAGING_CONFIG";
pub const ENV_MODALITY: &str = "IMAGING_MODALITY";
pub const ENV_ANIMATE: &str = "IMAGING_ANIMATE";
pub const ENV_LOG: &str = "IMAGING_LOG";

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Startup options for the explorer window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerSettings {
    pub initial_modality: ModalityId,
    pub animate: bool,
    pub viewport_height: u32,
    pub log_level: String,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            initial_modality: ModalityId::Mri,
            animate: true,
            viewport_height: VIEWPORT_HEIGHT,
            log_level: "info".into(),
        }
    }
}

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config_path: Option<PathBuf>,
    pub modality: Option<ModalityId>,
    pub animate: Option<bool>,
    pub log_level: Option<String>,
}

impl ExplorerSettings {
    /// Resolves settings from defaults, an optional JSON file, the environment
    /// and `overrides`, later layers winning.
    ///
    /// `env` looks up a variable by name; pass `|k| std::env::var(k).ok()` in the
    /// binary and a map lookup in tests.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the config file cannot be read or parsed, or any
    /// layer supplies an invalid value.
    pub fn load(
        overrides: &SettingsOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let config_path = overrides
            .config_path
            .clone()
            .or_else(|| env(ENV_CONFIG).map(PathBuf::from));

        let mut settings = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_env(env)?;
        settings.apply_overrides(overrides)?;
        settings.validate()?;

        debug!(?settings, "resolved settings");
        Ok(settings)
    }

    /// Reads a JSON config file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Io` or `SettingsError::Json`.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw, path)
    }

    /// # Errors
    ///
    /// Returns `SettingsError::Json` if `raw` is not a valid settings object.
    pub fn from_json(raw: &str, path: &Path) -> Result<Self, SettingsError> {
        serde_json::from_str(raw).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// # Errors
    ///
    /// Returns `SettingsError` if a set variable holds an invalid value.
    pub fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), SettingsError> {
        if let Some(raw) = env(ENV_MODALITY) {
            self.initial_modality = raw.parse().map_err(|source| SettingsError::Modality {
                var: ENV_MODALITY,
                source,
            })?;
        }
        if let Some(raw) = env(ENV_ANIMATE) {
            self.animate = parse_bool(ENV_ANIMATE, &raw)?;
        }
        if let Some(raw) = env(ENV_LOG) {
            self.log_level = normalize_log_level(&raw)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidLogLevel` for an unknown level.
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) -> Result<(), SettingsError> {
        if let Some(modality) = overrides.modality {
            self.initial_modality = modality;
        }
        if let Some(animate) = overrides.animate {
            self.animate = animate;
        }
        if let Some(level) = overrides.log_level.as_deref() {
            self.log_level = normalize_log_level(level)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SettingsError` for a zero viewport height or unknown log level.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.viewport_height == 0 {
            return Err(SettingsError::InvalidViewportHeight);
        }
        normalize_log_level(&self.log_level)?;
        Ok(())
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidBool {
            var,
            raw: raw.to_string(),
        }),
    }
}

fn normalize_log_level(raw: &str) -> Result<String, SettingsError> {
    let level = raw.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(SettingsError::InvalidLogLevel {
            raw: raw.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_any_source() {
        let settings = ExplorerSettings::load(&SettingsOverrides::default(), env_from(&[])).unwrap();
        assert_eq!(settings, ExplorerSettings::default());
        assert_eq!(settings.viewport_height, 300);
    }

    #[test]
    fn env_overrides_defaults() {
        let env = env_from(&[(ENV_MODALITY, "PET"), (ENV_ANIMATE, "off"), (ENV_LOG, "Debug")]);
        let settings = ExplorerSettings::load(&SettingsOverrides::default(), env).unwrap();
        assert_eq!(settings.initial_modality, ModalityId::Pet);
        assert!(!settings.animate);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn cli_overrides_env() {
        let env = env_from(&[(ENV_MODALITY, "pet")]);
        let overrides = SettingsOverrides {
            modality: Some(ModalityId::Ct),
            ..SettingsOverrides::default()
        };
        let settings = ExplorerSettings::load(&overrides, env).unwrap();
        assert_eq!(settings.initial_modality, ModalityId::Ct);
    }

    #[test]
    fn json_fills_missing_keys_with_defaults() {
        let settings =
            ExplorerSettings::from_json(r#"{"initial_modality":"xray"}"#, Path::new("cfg.json"))
                .unwrap();
        assert_eq!(settings.initial_modality, ModalityId::Xray);
        assert!(settings.animate);
    }

    #[test]
    fn json_rejects_unknown_keys() {
        let err = ExplorerSettings::from_json(r#"{"theme":"dark"}"#, Path::new("cfg.json"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Json { .. }));
    }

    #[test]
    fn bad_env_modality_is_an_error() {
        let err = ExplorerSettings::load(
            &SettingsOverrides::default(),
            env_from(&[(ENV_MODALITY, "spect")]),
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::Modality { var: ENV_MODALITY, .. }));
    }

    #[test]
    fn bad_bool_is_an_error() {
        let err = ExplorerSettings::load(
            &SettingsOverrides::default(),
            env_from(&[(ENV_ANIMATE, "maybe")]),
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidBool { .. }));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let overrides = SettingsOverrides {
            config_path: Some(PathBuf::from("/nonexistent/imaging-explorer.json")),
            ..SettingsOverrides::default()
        };
        let err = ExplorerSettings::load(&overrides, env_from(&[])).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn zero_viewport_height_is_rejected() {
        let settings = ExplorerSettings {
            viewport_height: 0,
            ..ExplorerSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidViewportHeight)
        ));
    }
}
