//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bstview/bstview.toml`
//! 3. Environment variables: `BSTVIEW_*` prefix, `__` between section and key

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};

/// How input text is split into values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputSettings {
    /// Separator for manual entry and between record fields
    pub delimiter: char,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Joins traversal values on one line
    pub separator: String,
    /// Draw the tree before the traversals
    pub show_tree: bool,
    /// Colored terminal output
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            separator: ", ".into(),
            show_tree: true,
            color: true,
        }
    }
}

/// Raw input section for intermediate parsing (Option detects "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawInputSettings {
    pub delimiter: Option<char>,
}

/// Raw display section for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDisplaySettings {
    pub separator: Option<String>,
    pub show_tree: Option<bool>,
    pub color: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub input: RawInputSettings,
    pub display: RawDisplaySettings,
}

/// Unified configuration for bstview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub input: InputSettings,
    pub display: DisplaySettings,
}

/// Get the XDG config directory for bstview.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bstview").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bstview.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value, otherwise keep self.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            input: InputSettings {
                delimiter: overlay.input.delimiter.unwrap_or(self.input.delimiter),
            },
            display: DisplaySettings {
                separator: overlay
                    .display
                    .separator
                    .clone()
                    .unwrap_or_else(|| self.display.separator.clone()),
                show_tree: overlay.display.show_tree.unwrap_or(self.display.show_tree),
                color: overlay.display.color.unwrap_or(self.display.color),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/bstview/bstview.toml`
    /// 3. Environment variables: `BSTVIEW_*` prefix
    pub fn load() -> ApplicationResult<Self> {
        let global = global_config_path();
        Self::load_layered(global.as_deref())
    }

    /// Like [`load`](Self::load), with an explicit config file in place of the global one.
    pub fn load_layered(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let current = Self::load_from(config_file)?;
        Self::apply_env_overrides(current)
    }

    /// Defaults merged with a config file, if it exists. No environment overrides.
    pub fn load_from(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();
        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }
        Ok(current)
    }

    /// Apply BSTVIEW_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BSTVIEW")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("input.delimiter") {
            let mut chars = val.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => settings.input.delimiter = c,
                _ => {
                    return Err(ApplicationError::Config {
                        message: format!("BSTVIEW_INPUT__DELIMITER must be one character, got {val:?}"),
                    })
                }
            }
        }
        if let Ok(val) = config.get_string("display.separator") {
            settings.display.separator = val;
        }
        if let Ok(val) = config.get_bool("display.show_tree") {
            settings.display.show_tree = val;
        }
        if let Ok(val) = config.get_bool("display.color") {
            settings.display.color = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bstview configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bstview/bstview.toml
#   Env:    BSTVIEW_* environment variables, e.g. BSTVIEW_DISPLAY__SEPARATOR=" "

[input]
# Separator for manually typed values and between record fields in files
# delimiter = ","

[display]
# Separator between traversal values
# separator = ", "

# Draw the tree before printing traversals
# show_tree = true

# Colored output (NO_COLOR is honoured as well)
# color = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_file_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None).expect("load defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.input.delimiter, ',');
        assert_eq!(settings.display.separator, ", ");
        assert!(settings.display.show_tree);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_only_specified_fields_change() {
        let overlay = RawSettings {
            input: RawInputSettings {
                delimiter: Some(';'),
            },
            display: RawDisplaySettings {
                separator: None,
                show_tree: Some(false),
                color: None,
            },
        };

        let result = Settings::default().merge_with(&overlay);

        assert_eq!(result.input.delimiter, ';');
        assert_eq!(result.display.separator, ", ");
        assert!(!result.display.show_tree);
        assert!(result.display.color);
    }

    #[test]
    fn given_settings_when_serializing_then_template_keys_roundtrip() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("[input]"));
        assert!(toml.contains("delimiter = \",\""));

        let parsed: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(parsed.input.delimiter.is_none());
    }
}
