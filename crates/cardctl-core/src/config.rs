use crate::error::{CardError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ComposeConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Program and leading arguments, e.g. `[docker, compose]`.
    #[serde(default = "default_compose_command")]
    pub command: Vec<String>,
    #[serde(default = "default_service")]
    pub service: String,
}

fn default_compose_command() -> Vec<String> {
    vec!["docker-compose".to_string()]
}

fn default_service() -> String {
    "backend".to_string()
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            command: default_compose_command(),
            service: default_service(),
        }
    }
}

impl ComposeConfig {
    /// The compose command as the operator would type it.
    pub fn display_name(&self) -> String {
        self.command.join(" ")
    }
}

// ---------------------------------------------------------------------------
// DatabaseConfig
// ---------------------------------------------------------------------------

/// Where the backend container reaches postgres, as seen from inside the
/// compose network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_host")]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
}

fn default_db_host() -> String {
    "db".to_string()
}

fn default_db_port() -> u16 {
    5432
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Env file location, relative to the project root unless absolute.
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

fn default_env_file() -> PathBuf {
    PathBuf::from(paths::DEFAULT_ENV_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
            compose: ComposeConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Config {
    /// Load `.cardctl/config.yaml` under `root`. A missing file yields defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg = Self::parse(&data)?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    pub fn parse(data: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.compose.command.is_empty() || self.compose.command[0].trim().is_empty() {
            return Err(CardError::EmptyComposeCommand);
        }
        Ok(())
    }

    pub fn env_file_path(&self, root: &Path) -> PathBuf {
        paths::env_file_path(root, &self.env_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_compose_project() {
        let cfg = Config::default();
        assert_eq!(cfg.env_file, PathBuf::from("backend/.env"));
        assert_eq!(cfg.compose.command, vec!["docker-compose".to_string()]);
        assert_eq!(cfg.compose.service, "backend");
        assert_eq!(cfg.database.host, "db");
        assert_eq!(cfg.database.port, 5432);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let cfg = Config::parse("compose:\n  command: [docker, compose]\n").unwrap();
        assert_eq!(cfg.compose.command, vec!["docker", "compose"]);
        assert_eq!(cfg.compose.service, "backend");
        assert_eq!(cfg.compose.display_name(), "docker compose");
        assert_eq!(cfg.database, DatabaseConfig::default());
    }

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn empty_compose_command_rejected() {
        let err = Config::parse("compose:\n  command: []\n").unwrap_err();
        assert!(matches!(err, CardError::EmptyComposeCommand));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = Config::parse("database: [not, a, map]\n").unwrap_err();
        assert!(matches!(err, CardError::Yaml(_)));
    }

    #[test]
    fn load_reads_config_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".cardctl")).unwrap();
        std::fs::write(
            dir.path().join(".cardctl/config.yaml"),
            "env_file: api/.env\ndatabase:\n  host: postgres\n  port: 6543\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.env_file_path(dir.path()), dir.path().join("api/.env"));
        assert_eq!(cfg.database.host, "postgres");
        assert_eq!(cfg.database.port, 6543);
    }
}
