use crate::error::{JotError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATEGORY: &str = "personal";

/// The built-in category set offered by the CLI. The store itself accepts
/// any string; this list only gates what the CLI presents and validates.
pub static BUILTIN_CATEGORIES: Lazy<Vec<String>> = Lazy::new(|| {
    ["personal", "work", "ideas", "other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
});

/// Configuration for jot, stored alongside the data as config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotConfig {
    /// Category assigned when `--category` is not given.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// The category set the CLI offers and validates against.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_categories() -> Vec<String> {
    BUILTIN_CATEGORIES.clone()
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            categories: default_categories(),
        }
    }
}

impl JotConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JotError::Io)?;
        let config: JotConfig = serde_json::from_str(&content).map_err(JotError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JotError::Serialization)?;
        fs::write(config_path, content).map_err(JotError::Io)?;
        Ok(())
    }

    /// Set the default category; it must be one of the configured set.
    pub fn set_default_category(&mut self, category: &str) -> Result<()> {
        let category = category.to_lowercase();
        if !self.categories.contains(&category) {
            return Err(JotError::Api(format!(
                "Unknown category \"{}\" (configured: {})",
                category,
                self.categories.join(", ")
            )));
        }
        self.default_category = category;
        Ok(())
    }

    /// Replace the category set. The default category follows along if it
    /// would otherwise dangle.
    pub fn set_categories(&mut self, categories: Vec<String>) -> Result<()> {
        let categories: Vec<String> = categories
            .into_iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        if categories.is_empty() {
            return Err(JotError::Api("Category set cannot be empty".to_string()));
        }
        if !categories.contains(&self.default_category) {
            self.default_category = categories[0].clone();
        }
        self.categories = categories;
        Ok(())
    }

    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = JotConfig::default();
        assert_eq!(config.default_category, "personal");
        assert_eq!(config.categories, vec!["personal", "work", "ideas", "other"]);
    }

    #[test]
    fn test_load_missing_config_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = JotConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, JotConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = JotConfig::default();
        config.set_default_category("work").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = JotConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_category, "work");
    }

    #[test]
    fn test_set_default_category_rejects_unknown() {
        let mut config = JotConfig::default();
        assert!(config.set_default_category("groceries").is_err());
        assert_eq!(config.default_category, "personal");
    }

    #[test]
    fn test_set_categories_normalizes() {
        let mut config = JotConfig::default();
        config
            .set_categories(vec![" Work ".into(), "Errands".into(), "".into()])
            .unwrap();
        assert_eq!(config.categories, vec!["work", "errands"]);
        // "personal" dangled, so the default moved to the first entry.
        assert_eq!(config.default_category, "work");
    }

    #[test]
    fn test_set_categories_rejects_empty_set() {
        let mut config = JotConfig::default();
        assert!(config.set_categories(vec!["  ".into()]).is_err());
    }

    #[test]
    fn test_partial_config_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{ "default_category": "work" }"#,
        )
        .unwrap();

        let loaded = JotConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_category, "work");
        assert_eq!(loaded.categories, *BUILTIN_CATEGORIES);
    }
}
