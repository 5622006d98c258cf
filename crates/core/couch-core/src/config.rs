use crate::error::{AppError, AppResult};
use crate::filters::FilterOptions;
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATE_FORMAT: &str = "MM/DD/YYYY hh:mm";
pub const DEFAULT_SHORTEN_MAX: i64 = 10;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_shorten_max")]
    pub shorten_max: i64,
    #[serde(default)]
    pub catalog_files: Vec<PathBuf>,
}

/// New settings start in the user's language.
fn default_locale() -> String {
    Locale::from_env().to_string()
}

fn default_fallback_locale() -> String {
    Locale::default().to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_shorten_max() -> i64 {
    DEFAULT_SHORTEN_MAX
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            fallback_locale: default_fallback_locale(),
            date_format: default_date_format(),
            shorten_max: default_shorten_max(),
            catalog_files: Vec::new(),
        }
    }
}

impl Config {
    /// Keys accepted by [`Config::get`] and [`Config::set`].
    pub const KEYS: [&'static str; 5] = [
        "locale",
        "fallback_locale",
        "date_format",
        "shorten_max",
        "catalog_files",
    ];

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            date_format: self.date_format.clone(),
            shorten_max: self.shorten_max,
        }
    }

    pub fn get(&self, key: &str) -> AppResult<String> {
        let value = match key {
            "locale" => self.locale.clone(),
            "fallback_locale" => self.fallback_locale.clone(),
            "date_format" => self.date_format.clone(),
            "shorten_max" => self.shorten_max.to_string(),
            "catalog_files" => self
                .catalog_files
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(","),
            _ => return Err(AppError::Config(format!("Unknown config key: {}", key))),
        };
        Ok(value)
    }

    /// Updates one setting from its textual form. `catalog_files` takes a
    /// comma separated list; an empty value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "locale" => self.locale = value.to_string(),
            "fallback_locale" => self.fallback_locale = value.to_string(),
            "date_format" => self.date_format = value.to_string(),
            "shorten_max" => {
                self.shorten_max = value.trim().parse().map_err(|_| {
                    AppError::Config(format!("shorten_max must be an integer, got '{}'", value))
                })?
            }
            "catalog_files" => {
                self.catalog_files = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
                    .collect()
            }
            _ => return Err(AppError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
    pub config: Config,
}

impl ConfigManager {
    pub fn new(base_dir: &Path) -> AppResult<Self> {
        let config_path = base_dir.join("config.toml");
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(|e| AppError::Io {
                path: config_path.clone(),
                source: e,
            })?;
            match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "Ignoring unreadable config {}: {}",
                        config_path.display(),
                        e
                    );
                    Config::default()
                }
            }
        } else {
            Config::default()
        };

        // Auto-save default if missing
        if !config_path.exists() {
            if let Err(e) = std::fs::create_dir_all(base_dir)
                .map_err(AppError::IoGeneric)
                .and_then(|_| Self::save_to_path(&config, &config_path))
            {
                log::warn!("Failed to save default config: {}", e);
            }
        }

        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn save(&self) -> AppResult<()> {
        Self::save_to_path(&self.config, &self.config_path)
    }

    fn save_to_path(config: &Config, path: &Path) -> AppResult<()> {
        let content =
            toml::to_string_pretty(config).map_err(|e| AppError::Config(e.to_string()))?;

        // Write to a sibling tempfile then rename over the target
        let parent = path.parent().unwrap_or(Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent).map_err(AppError::IoGeneric)?;
        std::fs::write(temp.path(), &content).map_err(AppError::IoGeneric)?;
        temp.persist(path)
            .map_err(|e| AppError::IoGeneric(e.error))?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.config.set(key, value)?;
        self.save()
    }

    pub fn reset(&mut self) -> AppResult<()> {
        self.config = Config::default();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_created_when_missing() {
        let dir = TempDir::new().unwrap();
        let config_manager = ConfigManager::new(dir.path()).unwrap();
        assert_eq!(config_manager.config.shorten_max, 10);
        assert_eq!(config_manager.config.date_format, "MM/DD/YYYY hh:mm");
        assert!(dir.path().join("config.toml").exists());
    }

    #[test]
    fn config_persists_across_loads() {
        let dir = TempDir::new().unwrap();
        {
            let mut config_manager = ConfigManager::new(dir.path()).unwrap();
            config_manager.set("shorten_max", "25").unwrap();
            config_manager.set("locale", "fr").unwrap();
        }
        let config_manager = ConfigManager::new(dir.path()).unwrap();
        assert_eq!(config_manager.config.shorten_max, 25);
        assert_eq!(config_manager.config.locale, "fr");
    }

    #[test]
    fn reset_restores_defaults() {
        let dir = TempDir::new().unwrap();
        let mut config_manager = ConfigManager::new(dir.path()).unwrap();
        config_manager.set("date_format", "YYYY").unwrap();
        config_manager.reset().unwrap();
        assert_eq!(config_manager.config, Config::default());
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "shorten_max = \"many\"").unwrap();
        let config_manager = ConfigManager::new(dir.path()).unwrap();
        assert_eq!(config_manager.config, Config::default());
    }

    #[test]
    fn partial_config_uses_field_defaults() {
        let config: Config = toml::from_str("locale = \"it\"").unwrap();
        assert_eq!(config.locale, "it");
        assert_eq!(config.fallback_locale, "en");
        assert_eq!(config.shorten_max, 10);
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("shorten_max", "ten").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert!(config.get("theme").is_err());
    }

    #[test]
    fn catalog_files_round_trip_through_text() {
        let mut config = Config::default();
        config.set("catalog_files", "/a/fr.json, /b/it.json").unwrap();
        assert_eq!(config.catalog_files.len(), 2);
        assert_eq!(config.get("catalog_files").unwrap(), "/a/fr.json,/b/it.json");
        config.set("catalog_files", "").unwrap();
        assert!(config.catalog_files.is_empty());
    }
}
