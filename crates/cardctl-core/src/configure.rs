//! The `configure` flow: overwrite guard, operator prompts, env file write.

use crate::config::DatabaseConfig;
use crate::env_file::{
    EnvRecord, EnvSettings, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_USER,
    DEFAULT_EASYPOST_API_KEY,
};
use crate::error::Result;
use crate::prompt::{self, PromptIo};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigureOutcome {
    Written { path: PathBuf, record: EnvRecord },
    /// The operator declined to overwrite an existing file; nothing was touched.
    Cancelled,
}

pub fn collect_settings(io: &mut dyn PromptIo) -> Result<EnvSettings> {
    let secret_key = prompt::secret(io, "Enter a new Flask SECRET_KEY", None)?;
    let db_user = prompt::text(io, "Enter the DATABASE_USER", Some(DEFAULT_DB_USER))?;
    let db_password =
        prompt::secret(io, "Enter the DATABASE_PASSWORD", Some(DEFAULT_DB_PASSWORD))?;
    let db_name = prompt::text(io, "Enter the DATABASE_NAME", Some(DEFAULT_DB_NAME))?;
    let easypost_api_key = prompt::text(
        io,
        "Enter your EASYPOST_API_KEY",
        Some(DEFAULT_EASYPOST_API_KEY),
    )?;
    Ok(EnvSettings {
        secret_key,
        db_user,
        db_password,
        db_name,
        easypost_api_key,
    })
}

pub fn run(io: &mut dyn PromptIo, path: &Path, db: &DatabaseConfig) -> Result<ConfigureOutcome> {
    if path.exists() {
        let question = format!(
            "{} already exists. Do you want to overwrite it?",
            path.display()
        );
        if !prompt::confirm(io, &question)? {
            tracing::debug!(path = %path.display(), "overwrite declined");
            return Ok(ConfigureOutcome::Cancelled);
        }
    }

    let settings = collect_settings(io)?;
    tracing::debug!(?settings, "collected settings");

    let record = settings.to_record(db);
    record.write(path)?;
    Ok(ConfigureOutcome::Written {
        path: path.to_path_buf(),
        record,
    })
}
