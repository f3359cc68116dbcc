use crate::config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolves and prepares the directories the service writes to or serves from.
pub struct PathManager {
    db_path: PathBuf,
    static_dir: PathBuf,
}

impl PathManager {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            db_path: config.db_path.clone(),
            static_dir: config.static_dir.clone(),
        }
    }

    /// Directory holding the SQLite file, if the path has one.
    pub fn db_dir(&self) -> Option<&Path> {
        self.db_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Creates the database directory and the static directory if missing.
    pub fn init(&self) -> Result<(), std::io::Error> {
        if let Some(db_dir) = self.db_dir() {
            if !db_dir.exists() {
                info!("Creating db directory: {:?}", db_dir);
                fs::create_dir_all(db_dir)?;
            }
        }

        if !self.static_dir.exists() {
            info!("Creating static directory: {:?}", self.static_dir);
            fs::create_dir_all(&self.static_dir)?;
        }

        Ok(())
    }
}
