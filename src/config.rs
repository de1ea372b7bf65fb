//! Application configuration module / 应用配置模块
//!
//! Loaded from config.json in the working directory.
//! Creates default config file on first run / 首次运行时创建默认配置文件

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::search::pagination::DEFAULT_BAR_LENGTH;
use crate::search::types::DEFAULT_PAGE_SIZE;

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration / 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Listing and paging configuration / 列表分页配置
    #[serde(default)]
    pub board: BoardConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration / 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Data directory path / 数据目录路径
    pub data_dir: String,
    /// Database file (relative to data_dir) / 数据库文件
    pub db_file: String,
    pub max_connections: u32,
}

/// Listing and paging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Page size when the request gives none
    pub page_size: i64,
    /// Largest page size a request may ask for
    pub max_page_size: i64,
    /// Page links shown in the paging bar
    pub bar_length: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8180,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            db_file: "board.db".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 100,
            bar_length: DEFAULT_BAR_LENGTH,
        }
    }
}

impl AppConfig {
    /// Get the full database URL / 获取完整的数据库URL
    pub fn get_database_url(&self) -> String {
        let db_path = Path::new(&self.database.data_dir).join(&self.database.db_file);
        format!("sqlite:{}?mode=rwc", db_path.to_string_lossy())
    }

    pub fn get_data_dir(&self) -> PathBuf {
        PathBuf::from(&self.database.data_dir)
    }

    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Reject paging values the board cannot serve
    pub fn validate(&self) -> Result<(), String> {
        let board = &self.board;
        if board.bar_length < 1 {
            return Err(format!("board.bar_length must be >= 1, got {}", board.bar_length));
        }
        if board.max_page_size < 1 {
            return Err(format!("board.max_page_size must be >= 1, got {}", board.max_page_size));
        }
        if board.page_size < 1 || board.page_size > board.max_page_size {
            return Err(format!(
                "board.page_size must be within 1..={}, got {}",
                board.max_page_size, board.page_size
            ));
        }
        if self.database.max_connections == 0 {
            return Err("database.max_connections must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Get the config file path / 获取配置文件路径
fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from ./config.json, creating it if missing
pub fn load_config() -> Result<AppConfig, String> {
    load_config_from(&get_config_path())
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config_from(config_path: &Path) -> Result<AppConfig, String> {
    let config = if config_path.exists() {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        config
    } else {
        let config = AppConfig::default();
        save_config_to(&config, config_path)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        config
    };

    config.validate()?;
    Ok(config)
}

/// Save configuration to file / 保存配置到文件
pub fn save_config_to(config: &AppConfig, config_path: &Path) -> Result<(), String> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}
