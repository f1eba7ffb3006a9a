//! mise-config - 配置加载库

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use thiserror::Error;

use secrecy::Secret;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// 表格后端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetsBackend {
    #[default]
    Google,
    /// 内存表格（本地开发，预置演示数据）
    Memory,
}

/// Google Sheets 配置
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    #[serde(default)]
    pub backend: SheetsBackend,
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default)]
    pub service_account_email: String,
    pub private_key: Option<Secret<String>>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            backend: SheetsBackend::default(),
            spreadsheet_id: String::new(),
            api_base_url: default_api_base_url(),
            token_uri: default_token_uri(),
            service_account_email: String::new(),
            private_key: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SheetsConfig {
    /// Google 后端必须提供表格 ID 和服务账号凭据
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == SheetsBackend::Memory {
            return Ok(());
        }
        if self.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::Invalid("sheets.spreadsheet_id must be set".into()));
        }
        if self.service_account_email.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "sheets.service_account_email must be set".into(),
            ));
        }
        if self.private_key.is_none() {
            return Err(ConfigError::Invalid("sheets.private_key must be set".into()));
        }
        Ok(())
    }
}

/// 工作表区域配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RangesConfig {
    pub items: String,
    pub dishes: String,
    pub production_plan: String,
    pub category_order: String,
    pub dish_category_order: String,
    pub sales_log: String,
    pub order_log_sheet: String,
    pub inventory_log_sheet: String,
}

impl Default for RangesConfig {
    fn default() -> Self {
        Self {
            items: "Master_Items!A2:D".to_string(),
            dishes: "Master_Dishes!A2:B".to_string(),
            production_plan: "Production_Plans!A:Z".to_string(),
            category_order: "Category_Order!A2:A".to_string(),
            dish_category_order: "Dish_Category_Order!A2:A".to_string(),
            sales_log: "Sales_Log!A2:D".to_string(),
            order_log_sheet: "Order_Log".to_string(),
            inventory_log_sheet: "Inventory_Log".to_string(),
        }
    }
}

/// 业务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    pub outlets: Vec<String>,
    /// 门店所在时区相对 UTC 的分钟偏移
    pub utc_offset_minutes: i32,
    /// 斜杠日期按 日/月/年 解析
    pub day_first_dates: bool,
    pub currency_symbol: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            outlets: ["Yelahanka", "Thanisandra", "Kammanahalli", "Indiranagar"]
                .into_iter()
                .map(String::from)
                .collect(),
            utc_offset_minutes: 330,
            day_first_dates: false,
            currency_symbol: "₹".to_string(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub ranges: RangesConfig,
    #[serde(default)]
    pub business: BusinessConfig,
}

fn default_app_name() -> String {
    "kitchen-ops".to_string()
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        // .env 文件可选
        let _ = dotenvy::dotenv();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let figment = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed("MISE_").split("__"));

        Self::from_figment(figment)
    }

    /// 从任意 Figment 提取并校验
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.sheets.validate()?;

        if config.business.outlets.is_empty() {
            return Err(ConfigError::Invalid("business.outlets must not be empty".into()));
        }

        Ok(config)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}

#[cfg(test)]
mod tests;
