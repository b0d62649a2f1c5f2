//! Layout registry configuration.
//!
//! # Responsibility
//! - Describe startup options for seeding a registry.
//! - Load them from JSON text or a JSON file.
//!
//! # Invariants
//! - Missing keys fall back to [`LayoutConfig::default`].
//! - A loaded config is validated before it is returned.

use crate::logging::log_registry_summary;
use crate::model::layout::LayoutArgs;
use crate::registry::builtin::{builtin_layout_ids, register_builtin_layouts};
use crate::registry::layout_registry::{LayoutRegistry, LayoutRegistryError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Base URL used for layout preview images when none is configured.
pub const DEFAULT_IMAGES_URL: &str = "/images";

/// Startup options for a layout registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Base URL of the admin images directory.
    pub images_url: String,
    /// Right-to-left site; flips the built-in default layout.
    pub rtl: bool,
    /// Whether per-request resolution should reuse its first result.
    pub cache_resolution: bool,
    /// Layouts registered after the built-ins.
    pub extra_layouts: Vec<ExtraLayout>,
    /// Absolute directory for rolling log files; no file logging when unset.
    pub log_dir: Option<String>,
    /// Log level; the build-mode default when unset.
    pub log_level: Option<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            images_url: DEFAULT_IMAGES_URL.to_string(),
            rtl: false,
            cache_resolution: true,
            extra_layouts: vec![],
            log_dir: None,
            log_level: None,
        }
    }
}

/// One extra layout declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraLayout {
    pub id: String,
    #[serde(flatten)]
    pub args: LayoutArgs,
}

impl LayoutConfig {
    /// Parses and validates config from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images_url.trim().is_empty() {
            return Err(ConfigError::Invalid("images_url must not be empty".to_string()));
        }
        if let Some(position) = self
            .extra_layouts
            .iter()
            .position(|extra| extra.id.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "extra_layouts[{position}].id must not be empty"
            )));
        }

        let builtin_ids = builtin_layout_ids();
        let mut seen = BTreeSet::new();
        for (position, extra) in self.extra_layouts.iter().enumerate() {
            let id = extra.id.trim();
            if builtin_ids.iter().any(|builtin| *builtin == id) {
                return Err(ConfigError::Invalid(format!(
                    "extra_layouts[{position}].id clashes with built-in layout `{id}`"
                )));
            }
            if !seen.insert(id) {
                return Err(ConfigError::Invalid(format!(
                    "extra_layouts[{position}].id duplicates extra layout id `{id}`"
                )));
            }
        }
        Ok(())
    }

    /// Validates this config, then builds a registry seeded with built-in
    /// and extra layouts.
    pub fn build_registry(&self) -> Result<LayoutRegistry, ConfigError> {
        self.validate()?;
        let mut registry = LayoutRegistry::with_images_url(self.images_url.clone());
        register_builtin_layouts(&mut registry, self).map_err(ConfigError::Registry)?;
        log_registry_summary(&registry);
        Ok(registry)
    }
}

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
    Registry(LayoutRegistryError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read layout config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse layout config: {err}"),
            Self::Invalid(message) => write!(f, "invalid layout config: {message}"),
            Self::Registry(err) => write!(f, "failed to seed layouts: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
            Self::Registry(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ExtraLayout, LayoutConfig};
    use crate::model::layout::LayoutArgs;

    #[test]
    fn empty_object_yields_defaults() {
        let config = LayoutConfig::from_json_str("{}").expect("empty config should parse");
        assert_eq!(config, LayoutConfig::default());
        assert!(config.cache_resolution);
    }

    #[test]
    fn parses_extra_layouts_with_flattened_args() {
        let config = LayoutConfig::from_json_str(
            r#"{
                "rtl": true,
                "extra_layouts": [
                    { "id": "landing", "label": "Landing", "types": ["singular"] }
                ]
            }"#,
        )
        .expect("config should parse");

        assert!(config.rtl);
        let extra = &config.extra_layouts[0];
        assert_eq!(extra.id, "landing");
        assert_eq!(extra.args.label.as_deref(), Some("Landing"));
        assert_eq!(extra.args.image, None);
    }

    #[test]
    fn rejects_blank_images_url_and_extra_id() {
        let err = LayoutConfig::from_json_str(r#"{ "images_url": " " }"#)
            .expect_err("blank images_url must fail");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = LayoutConfig::from_json_str(r#"{ "extra_layouts": [ { "id": "" } ] }"#)
            .expect_err("blank extra id must fail");
        assert!(err.to_string().contains("extra_layouts[0].id"));
    }

    #[test]
    fn rejects_duplicate_and_builtin_extra_ids() {
        let err = LayoutConfig::from_json_str(
            r#"{ "extra_layouts": [ { "id": "landing" }, { "id": " landing " } ] }"#,
        )
        .expect_err("duplicate extra id must fail");
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("extra_layouts[1].id duplicates"));

        let err = LayoutConfig::from_json_str(
            r#"{ "extra_layouts": [ { "id": "full-width-content" } ] }"#,
        )
        .expect_err("built-in id must fail");
        assert!(err.to_string().contains("clashes with built-in layout `full-width-content`"));
    }

    #[test]
    fn build_registry_validates_hand_built_config() {
        let config = LayoutConfig {
            extra_layouts: vec![
                ExtraLayout {
                    id: "landing".to_string(),
                    args: LayoutArgs::new(),
                },
                ExtraLayout {
                    id: "landing".to_string(),
                    args: LayoutArgs::new().label("Typo"),
                },
            ],
            ..LayoutConfig::default()
        };
        let err = config.build_registry().expect_err("duplicate extra id must fail");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = LayoutConfig::from_json_str("{ rtl: ").expect_err("malformed json must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
