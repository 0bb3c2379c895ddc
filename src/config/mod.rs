//! # 配置管理模块
//!
//! 处理应用配置加载、环境变量覆盖和验证

mod app_config;
mod manager;

pub use app_config::{
    AUTHORIZATION_CODE, AppConfig, ClientConfig, ClientRegistration, OAuth2ClientConfig,
    ServerConfig,
};
pub use manager::ConfigManager;

use std::env;
use std::path::PathBuf;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "BFF_CONFIG_PATH";

/// 解析配置文件路径
///
/// 优先级：显式路径 > `BFF_CONFIG_PATH` > `config/config.{RUST_ENV}.toml`
#[must_use]
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    select_config_path(
        explicit,
        env::var(CONFIG_PATH_ENV).ok(),
        env::var("RUST_ENV").ok(),
    )
}

fn select_config_path(
    explicit: Option<PathBuf>,
    env_path: Option<String>,
    rust_env: Option<String>,
) -> PathBuf {
    explicit
        .or_else(|| env_path.map(PathBuf::from))
        .unwrap_or_else(|| {
            let env = rust_env.unwrap_or_else(|| "dev".to_string());
            PathBuf::from(format!("config/config.{env}.toml"))
        })
}

/// 验证配置有效性
pub(crate) fn validate_config(config: &AppConfig) -> crate::error::Result<()> {
    config.validate().map_err(crate::error::BffError::config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = select_config_path(
            Some(PathBuf::from("/etc/bff.toml")),
            Some("/tmp/other.toml".to_string()),
            Some("prod".to_string()),
        );
        assert_eq!(path, PathBuf::from("/etc/bff.toml"));
    }

    #[test]
    fn test_env_path_before_rust_env() {
        let path = select_config_path(None, Some("/tmp/other.toml".to_string()), None);
        assert_eq!(path, PathBuf::from("/tmp/other.toml"));
    }

    #[test]
    fn test_default_path_uses_rust_env() {
        assert_eq!(
            select_config_path(None, None, Some("prod".to_string())),
            PathBuf::from("config/config.prod.toml")
        );
        assert_eq!(
            select_config_path(None, None, None),
            PathBuf::from("config/config.dev.toml")
        );
    }
}
