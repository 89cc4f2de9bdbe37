use crate::adapters::connection::ConnectionDriver;
use crate::adapters::output::OutputFormat;
use crate::adapters::shapes::ShapeSpec;
use crate::domain::model::ConnectionSettings;
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub reporting: ReportingConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportingConfig {
    pub start: Option<String>,
    pub end: Option<String>,
    pub format: Option<OutputFormat>,
    pub require_auth: Option<bool>,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub driver: Option<ConnectionDriver>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .finish()
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SolidError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DB_PASSWORD})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SolidError::ConfigError {
            message: format!("env pattern failed to compile: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得報表輸出格式，預設 HTML
    pub fn output_format(&self) -> OutputFormat {
        self.reporting.format.unwrap_or_default()
    }

    /// 是否要求登入才能產生報表
    pub fn require_auth(&self) -> bool {
        self.reporting.require_auth.unwrap_or(false)
    }

    pub fn driver(&self) -> ConnectionDriver {
        self.database.driver.unwrap_or_default()
    }

    /// 組出連線設定，未填的欄位使用本機預設值
    pub fn connection_settings(&self) -> ConnectionSettings {
        let db = &self.database;
        let host = db.host.clone().unwrap_or_else(|| "localhost".to_string());
        let host = match db.port {
            Some(port) => format!("{}:{}", host, port),
            None => host,
        };

        ConnectionSettings::new(
            host,
            db.username.clone().unwrap_or_else(|| "root".to_string()),
            db.password.clone().unwrap_or_default(),
            db.database.clone().unwrap_or_else(|| "app".to_string()),
        )
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let start = self
            .reporting
            .start
            .as_deref()
            .map(|s| validation::parse_datetime("reporting.start", s, false))
            .transpose()?;
        let end = self
            .reporting
            .end
            .as_deref()
            .map(|s| validation::parse_datetime("reporting.end", s, true))
            .transpose()?;
        if let (Some(start), Some(end)) = (start, end) {
            validation::validate_date_order(start, end)?;
        }

        if let Some(host) = &self.database.host {
            validation::validate_non_empty_string("database.host", host)?;
        }
        if let Some(port) = self.database.port {
            validation::validate_range("database.port", port, 1, u16::MAX)?;
        }
        if let Some(database) = &self.database.database {
            validation::validate_non_empty_string("database.database", database)?;
        }

        for shape in &self.shapes {
            shape.validate()?;
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
