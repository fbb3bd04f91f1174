//! The backend environment file: an ordered set of `KEY=value` lines.
//!
//! Values are written verbatim. Nothing is quoted, escaped or URL-encoded, and
//! the backend reads the file exactly as `configure` produced it.

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::io;
use std::fmt;
use std::path::Path;

pub const FLASK_APP: &str = "app.py";
pub const FLASK_ENV: &str = "development";

pub const DEFAULT_DB_USER: &str = "carduser";
pub const DEFAULT_DB_PASSWORD: &str = "cardpass";
pub const DEFAULT_DB_NAME: &str = "card_platform_db";
pub const DEFAULT_EASYPOST_API_KEY: &str = "EASYPOST_API_KEY_HERE";

/// Values collected from the operator.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvSettings {
    pub secret_key: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub easypost_api_key: String,
}

impl fmt::Debug for EnvSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvSettings")
            .field("secret_key", &"<redacted>")
            .field("db_user", &self.db_user)
            .field("db_password", &"<redacted>")
            .field("db_name", &self.db_name)
            .field("easypost_api_key", &"<redacted>")
            .finish()
    }
}

impl EnvSettings {
    /// `postgresql://{user}:{password}@{host}:{port}/{name}`
    pub fn database_url(&self, db: &DatabaseConfig) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, db.host, db.port, self.db_name
        )
    }

    pub fn to_record(&self, db: &DatabaseConfig) -> EnvRecord {
        let mut record = EnvRecord::default();
        record.push("FLASK_APP", FLASK_APP);
        record.push("FLASK_ENV", FLASK_ENV);
        record.push("SECRET_KEY", &self.secret_key);
        record.push("DATABASE_URL", self.database_url(db));
        record.push("EASYPOST_API_KEY", &self.easypost_api_key);
        record.push("POSTGRES_USER", &self.db_user);
        record.push("POSTGRES_PASSWORD", &self.db_password);
        record.push("POSTGRES_DB", &self.db_name);
        record
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvRecord {
    entries: Vec<(String, String)>,
}

impl EnvRecord {
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    /// Overwrite `path` with the rendered record.
    pub fn write(&self, path: &Path) -> Result<()> {
        io::atomic_write(path, self.render().as_bytes())?;
        tracing::debug!(path = %path.display(), keys = self.len(), "wrote env file");
        Ok(())
    }
}
