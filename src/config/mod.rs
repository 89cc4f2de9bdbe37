#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::AppConfig;

use crate::utils::error::Result;

/// 載入配置檔；未指定路徑時使用預設值
pub fn load(path: Option<&str>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path);
            AppConfig::from_file(path)
        }
        None => Ok(AppConfig::default()),
    }
}
