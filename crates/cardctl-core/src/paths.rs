use std::path::{Path, PathBuf};

pub const CARDCTL_DIR: &str = ".cardctl";
pub const CONFIG_FILE: &str = ".cardctl/config.yaml";

pub const DEFAULT_ENV_FILE: &str = "backend/.env";

/// Compose files whose presence marks a project root.
pub const COMPOSE_FILES: [&str; 2] = ["docker-compose.yml", "docker-compose.yaml"];

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve the env file location. Absolute paths in config are used as-is.
pub fn env_file_path(root: &Path, env_file: &Path) -> PathBuf {
    if env_file.is_absolute() {
        env_file.to_path_buf()
    } else {
        root.join(env_file)
    }
}
