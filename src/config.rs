use crate::error::{DocstashError, Result};
use crate::logging;
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const CONFIG_FILENAME: &str = "config.json";

fn default_log_level() -> String {
    logging::default_log_level().to_string()
}

/// Configuration for docstash, stored as config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocstashConfig {
    /// Directory holding the collection data. When unset, the platform
    /// data directory is used.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Level for the optional file logger ("trace" through "error").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DocstashConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl DocstashConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DocstashError::Io)?;
        let config: DocstashConfig =
            serde_json::from_str(&content).map_err(DocstashError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        // Ensure directory exists
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DocstashError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DocstashError::Serialization)?;

        // Atomic write
        let tmp_path = config_dir.join(format!(".config-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(DocstashError::Io)?;
        fs::rename(&tmp_path, &config_path).map_err(DocstashError::Io)?;
        Ok(())
    }

    /// Directory holding the collection data: the configured `data_dir`,
    /// or the platform data directory when unset.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let dirs = ProjectDirs::from("com", "docstash", "docstash").ok_or_else(|| {
            DocstashError::Store("could not determine a platform data directory".to_string())
        })?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Build a filesystem backend rooted at the resolved data directory.
    pub fn open_backend(&self) -> Result<FsBackend> {
        Ok(FsBackend::new(self.resolve_data_dir()?))
    }
}
