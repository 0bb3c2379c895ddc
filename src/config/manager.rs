//! # 配置管理器
//!
//! 统一的配置加载入口，支持环境变量覆盖。配置只在启动时读取一次。

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::AppConfig;
use crate::error::{BffError, Result};

/// 环境变量覆盖前缀
const ENV_PREFIX: &str = "BFF_";

/// 不参与配置覆盖的控制类环境变量（已去掉前缀并转换为配置路径）
const RESERVED_ENV_PATHS: &[&str] = &["config.path"];

/// 配置管理器
#[derive(Debug)]
pub struct ConfigManager {
    /// 配置文件路径
    path: PathBuf,
    /// 当前配置
    config: AppConfig,
    /// 已应用的环境变量覆盖数量
    overrides_applied: usize,
}

impl ConfigManager {
    /// 从指定文件创建配置管理器，并应用进程环境变量覆盖
    pub fn from_file(config_path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_overrides(config_path, &Self::build_env_overrides(env::vars()))
    }

    /// 从指定文件创建配置管理器，使用给定的覆盖映射
    pub fn from_file_with_overrides(
        config_path: impl AsRef<Path>,
        overrides: &HashMap<String, String>,
    ) -> Result<Self> {
        let path = config_path.as_ref().to_path_buf();
        let mut config = Self::load_config_file(&path)?;

        let overrides_applied = Self::apply_env_overrides(&mut config, overrides)?;
        super::validate_config(&config)?;

        info!("配置管理器初始化完成: {}", path.display());
        info!("- 客户端注册: {} 个", config.oauth2.registration.len());
        info!("- 环境变量覆盖: {} 个", overrides_applied);

        Ok(Self {
            path,
            config,
            overrides_applied,
        })
    }

    /// 获取当前配置
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 取出配置
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// 配置文件路径
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 已应用的环境变量覆盖数量
    #[must_use]
    pub const fn overrides_applied(&self) -> usize {
        self.overrides_applied
    }

    /// 加载配置文件
    fn load_config_file(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            return Err(BffError::config(format!(
                "配置文件不存在: {}",
                path.display()
            )));
        }

        let config_content = std::fs::read_to_string(path).map_err(|e| {
            BffError::config_with_source(format!("读取配置文件失败: {}", path.display()), e)
        })?;

        toml::from_str(&config_content).map_err(|e| {
            BffError::config_with_source(
                format!("TOML解析失败 - 配置文件: {}, 详细错误: {e}", path.display()),
                e,
            )
        })
    }

    /// 构建环境变量覆盖映射
    ///
    /// 例如: `BFF_SERVER_PORT` -> `server.port`
    pub fn build_env_overrides<I>(vars: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let overrides: HashMap<String, String> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                let config_key = key.strip_prefix(ENV_PREFIX)?;
                let config_path = config_key.to_lowercase().replace('_', ".");
                (!RESERVED_ENV_PATHS.contains(&config_path.as_str()))
                    .then_some((config_path, value))
            })
            .collect();

        debug!("发现 {} 个环境变量覆盖", overrides.len());
        overrides
    }

    /// 应用环境变量覆盖，返回实际生效的覆盖数量
    pub fn apply_env_overrides(
        config: &mut AppConfig,
        overrides: &HashMap<String, String>,
    ) -> Result<usize> {
        let mut applied = 0;
        for (path, value) in overrides {
            debug!("应用环境变量覆盖: {} = {}", path, value);
            if Self::apply_override_to_config(config, path, value)? {
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// 将环境变量覆盖应用到配置对象，未知路径返回 `false`
    fn apply_override_to_config(config: &mut AppConfig, path: &str, value: &str) -> Result<bool> {
        let parts: Vec<&str> = path.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => config.server.host = value.to_string(),
            ["server", "port"] => {
                config.server.port = value.parse().map_err(|e| {
                    BffError::config_with_source(format!("无效的端口号: {value}"), e)
                })?;
            }
            ["server", "enable", "cors"] | ["server", "enablecors"] => {
                config.server.enable_cors = value.parse().map_err(|e| {
                    BffError::config_with_source(format!("无效的CORS开关: {value}"), e)
                })?;
            }
            ["client", "uri"] | ["client", "client", "uri"] => {
                config.client.client_uri = value.to_string();
            }
            _ => {
                warn!("未知的配置路径，忽略环境变量覆盖: {}", path);
                return Ok(false);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = r#"
[server]
host = "0.0.0.0"
port = 8081

[client]
client_uri = "https://bff.example.com"

[oauth2.registration.google]
authorization_grant_type = "authorization_code"
provider = "google"
"#;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_build_env_overrides_filters_prefix() {
        let overrides = ConfigManager::build_env_overrides(vars(&[
            ("BFF_SERVER_PORT", "9000"),
            ("BFF_CONFIG_PATH", "/etc/bff.toml"),
            ("HOME", "/root"),
        ]));

        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("server.port").map(String::as_str), Some("9000"));
    }

    #[test]
    fn test_load_and_override() {
        let file = write_config(SAMPLE);
        let overrides = ConfigManager::build_env_overrides(vars(&[
            ("BFF_SERVER_HOST", "10.0.0.1"),
            ("BFF_SERVER_PORT", "9000"),
            ("BFF_CLIENT_URI", "https://login.example.org"),
        ]));

        let manager = ConfigManager::from_file_with_overrides(file.path(), &overrides).unwrap();
        let config = manager.config();

        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.client.client_uri, "https://login.example.org");
        assert_eq!(manager.overrides_applied(), 3);
    }

    #[test]
    fn test_unknown_override_not_counted() {
        let file = write_config(SAMPLE);
        let overrides = ConfigManager::build_env_overrides(vars(&[
            ("BFF_SERVER_PORT", "9000"),
            ("BFF_CLIENT_URI", "https://login.example.org"),
            ("BFF_UNKNOWN_KEY", "ignored"),
        ]));

        let manager = ConfigManager::from_file_with_overrides(file.path(), &overrides).unwrap();

        assert_eq!(manager.config().server.host, "0.0.0.0");
        assert_eq!(manager.overrides_applied(), 2);
    }

    #[test]
    fn test_invalid_port_override_is_config_error() {
        let file = write_config(SAMPLE);
        let overrides = ConfigManager::build_env_overrides(vars(&[("BFF_SERVER_PORT", "http")]));

        let err = ConfigManager::from_file_with_overrides(file.path(), &overrides).unwrap_err();
        assert!(matches!(err, BffError::Config { .. }));
        assert!(err.to_string().contains("无效的端口号"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ConfigManager::from_file_with_overrides(
            "/nonexistent/bff/config.toml",
            &HashMap::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("配置文件不存在"));
    }

    #[test]
    fn test_validation_runs_after_overrides() {
        let file = write_config(SAMPLE);
        let overrides = ConfigManager::build_env_overrides(vars(&[("BFF_CLIENT_URI", "")]));

        let err = ConfigManager::from_file_with_overrides(file.path(), &overrides).unwrap_err();
        assert!(err.to_string().contains("client_uri"));
    }
}
