use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::meta::settings::MetaSettings;
use crate::plugins::boilerplate::BoilerplateOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub meta: MetaSettings,
    #[serde(default)]
    pub boilerplate: BoilerplateOptions,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Active theme, as far as the meta data plugin cares
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,
    /// Cover image used when a page has none
    #[serde(default)]
    pub default_cover: Option<String>,
}

fn default_theme_name() -> String {
    "default".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            default_cover: None,
        }
    }
}

impl Config {
    /// Path to the user config file, if a config dir exists
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("meta-data").join("config.toml"))
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so the plugins work without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // User config in ~/.config/meta-data/ (optional global overrides)
        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override), TOML or JSON by extension
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables such as METADATA__META__SEPARATOR
        builder = builder.add_source(
            config::Environment::with_prefix("METADATA")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.meta.separator, "|");
        assert!(config.boilerplate.option_one);
        assert!(config.theme.default_cover.is_none());
    }

    #[test]
    fn test_load_toml_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.toml");
        fs::write(
            &path,
            r#"
[meta]
separator = "»"
post_title = "{{page-title}} on {{site-title}}"
meta_dublin = true

[theme]
name = "paper"
default_cover = "https://ex.com/cover.jpg"

[boilerplate]
option_two = "hello"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.meta.separator, "»");
        assert_eq!(config.meta.post_title, "{{page-title}} on {{site-title}}");
        assert!(config.meta.meta_dublin);
        assert!(config.meta.meta_og);
        assert_eq!(config.theme.name, "paper");
        assert_eq!(
            config.theme.default_cover.as_deref(),
            Some("https://ex.com/cover.jpg")
        );
        assert_eq!(config.boilerplate.option_two, "hello");
        assert!(config.boilerplate.option_one);
    }

    #[test]
    fn test_load_json_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.json");
        fs::write(
            &path,
            r#"{ "meta": { "keywords": "rust\nseo", "meta_twitter": false } }"#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.meta.keyword_list(), "rust, seo");
        assert!(!config.meta.meta_twitter);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert!(Config::load(Some(path.to_str().unwrap())).is_err());
    }
}
