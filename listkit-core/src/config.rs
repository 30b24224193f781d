use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ListkitError, Result};
use crate::greeting::Greeting;
use crate::posts::DEFAULT_POSTS_URL;

/// Environment variable pointing at an alternate config file
pub const CONFIG_ENV: &str = "LISTKIT_CONFIG";
/// Environment variable overriding `fetch.posts_url`
pub const POSTS_URL_ENV: &str = "LISTKIT_POSTS_URL";

/// Configuration for listkit, read from `~/.listkit/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListkitConfig {
    pub greeting: GreetingConfig,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub name: String,
    pub age: Option<u32>,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
            age: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub posts_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
        }
    }
}

impl ListkitConfig {
    /// Load from `$LISTKIT_CONFIG` or `~/.listkit/config.toml`
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path.
    ///
    /// A missing file yields defaults; unreadable or invalid TOML is an error.
    /// Environment overrides are applied last.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            Self::from_toml_str(&content, path)?
        } else {
            debug!(path = %path.display(), "config not found, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Parse TOML content; `path` is only used for error messages
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| ListkitError::config(path, e.message().to_string()))
    }

    /// Get config file path: `$LISTKIT_CONFIG` or `~/.listkit/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".listkit/config.toml")
    }

    /// Apply overrides from a variable lookup (the process environment in `load_from`)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(POSTS_URL_ENV).filter(|url| !url.trim().is_empty()) {
            debug!(url = %url, "posts url overridden from environment");
            self.fetch.posts_url = url;
        }
    }

    /// Greeting built from the configured defaults
    pub fn greeting(&self) -> Greeting {
        Greeting {
            name: self.greeting.name.clone(),
            age: self.greeting.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ListkitConfig::default();
        assert_eq!(config.greeting.name, "World");
        assert_eq!(config.greeting.age, None);
        assert_eq!(config.fetch.posts_url, DEFAULT_POSTS_URL);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ListkitConfig::from_toml_str(
            "[greeting]\nname = \"Ada\"\nage = 36\n",
            Path::new("config.toml"),
        )
        .unwrap();

        assert_eq!(config.greeting(), Greeting::new("Ada").with_age(36));
        assert_eq!(config.fetch.posts_url, DEFAULT_POSTS_URL);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ListkitConfig::from_toml_str("[greeting\nname = 1", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ListkitError::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let err = ListkitConfig::from_toml_str("[greeting]\nage = \"old\"", Path::new("c.toml"))
            .unwrap_err();
        assert!(matches!(err, ListkitError::Config { .. }));
    }

    #[test]
    fn test_overrides_replace_posts_url() {
        let mut config = ListkitConfig::default();
        config.apply_overrides(|key| {
            (key == POSTS_URL_ENV).then(|| "http://localhost:8080/posts".to_string())
        });
        assert_eq!(config.fetch.posts_url, "http://localhost:8080/posts");

        config.apply_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.fetch.posts_url, "http://localhost:8080/posts");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[fetch]\nposts_url = \"http://example.test/posts\"").unwrap();
        file.flush().unwrap();

        let config = ListkitConfig::load_from(file.path()).unwrap();
        if env::var(POSTS_URL_ENV).is_err() {
            assert_eq!(config.fetch.posts_url, "http://example.test/posts");
        }
        assert_eq!(config.greeting.name, "World");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ListkitConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.greeting, GreetingConfig::default());
    }
}
