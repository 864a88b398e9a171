use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or};
use std::path::PathBuf;

/// Upload storage settings
#[derive(Clone, Debug)]
pub struct FileStorageConfig {
    /// Root under which every lesson directory lives
    pub upload_dir: PathBuf,
    /// Largest accepted request body for uploads, in bytes
    pub max_upload_bytes: usize,
}

impl FileStorageConfig {
    pub const DEFAULT_UPLOAD_DIR: &'static str = "./uploads";
    pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            max_upload_bytes: Self::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UPLOAD_DIR)
    }
}

impl FromEnv for FileStorageConfig {
    /// - UPLOAD_DIR: defaults to `./uploads`
    /// - MAX_UPLOAD_BYTES: defaults to 10 MiB
    fn from_env() -> Result<Self, ConfigError> {
        let upload_dir = env_or_default("UPLOAD_DIR", Self::DEFAULT_UPLOAD_DIR);
        let max_upload_bytes = env_parse_or("MAX_UPLOAD_BYTES", Self::DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Self {
            upload_dir: PathBuf::from(upload_dir),
            max_upload_bytes,
        })
    }
}
