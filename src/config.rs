use crate::error::{Result, SkinScanError};
use serde::{Deserialize, Serialize};
use skin_scan_common::UploadPolicy;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Webフォームと異なるポリシーで確認したい場合の上書き
    pub policy: UploadPolicy,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.policy.check()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.policy.check()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SkinScanError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("skin-scan").join("config.json"))
    }

    pub fn set_max_file_size(&mut self, bytes: u64) -> Result<()> {
        if bytes == 0 {
            return Err(SkinScanError::Config("max size must be positive".into()));
        }
        self.policy.max_file_size = bytes;
        Ok(())
    }
}
