use crate::*;
use confique::Config as _;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "prequel.toml";

#[derive(Debug, confique::Config)]
pub struct Config {
    #[config(env = "PREQUEL_MIN_COLUMN_WIDTH", default = 5)]
    pub min_column_width: usize,
    #[config(env = "PREQUEL_MAX_COLUMN_WIDTH", default = 25)]
    pub max_column_width: usize,
    /// Scratch file the editor text is mirrored to.
    #[config(env = "PREQUEL_DRAFT_FILE", default = "prequel.sql")]
    pub draft_file: PathBuf,
    #[config(nested)]
    pub connection: ConnectionConfig,
}

#[derive(Debug, confique::Config)]
pub struct ConnectionConfig {
    #[config(env = "PREQUEL_DRIVER", default = "mysql")]
    pub driver: String,
    #[config(env = "PREQUEL_HOST", default = "localhost")]
    pub host: String,
    #[config(env = "PREQUEL_PORT", default = 3306)]
    pub port: u16,
    #[config(env = "PREQUEL_USER", default = "")]
    pub user: String,
    #[config(env = "PREQUEL_PASSWORD", default = "")]
    pub password: String,
    #[config(env = "PREQUEL_DATABASE")]
    pub database: Option<String>,
}

impl Config {
    /// Load from the environment, then `prequel.toml` in the working directory.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from the environment, then the given file. A missing file is
    /// skipped; environment variables take precedence over file values.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::builder().env().file(path.as_ref()).load()?;
        config.validate()?;
        debug!(path = %path.as_ref().display(), "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result {
        if self.min_column_width > self.max_column_width {
            return Err(Error::Config(format!(
                "min_column_width ({}) is larger than max_column_width ({})",
                self.min_column_width, self.max_column_width
            )));
        }
        self.connection.validate()
    }

    pub fn column_widths(&self) -> ColumnWidths {
        ColumnWidths::new(self.min_column_width, self.max_column_width)
    }
}

impl ConnectionConfig {
    pub fn validate(&self) -> Result {
        if self.driver.is_empty() {
            return Err(Error::Config("missing the 'driver' field".into()));
        }
        if self.database.as_deref().is_none_or(str::is_empty) {
            return Err(Error::Config("missing the 'database' field".into()));
        }
        Ok(())
    }

    /// Driver DSN: `user[:password]@tcp(host:port)[/database]`.
    pub fn dsn(&self) -> String {
        let mut dsn = self.user.clone();
        if !self.password.is_empty() {
            dsn.push(':');
            dsn.push_str(&self.password);
        }
        if !dsn.is_empty() {
            dsn.push('@');
        }
        dsn.push_str(&format!("tcp({}:{})", self.host, self.port));
        if let Some(database) = self.database.as_deref().filter(|d| !d.is_empty()) {
            dsn.push('/');
            dsn.push_str(database);
        }
        dsn
    }
}
