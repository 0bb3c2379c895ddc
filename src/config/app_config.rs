//! # 应用配置结构定义

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 触发登录选项的授权类型
pub const AUTHORIZATION_CODE: &str = "authorization_code";

/// 应用主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// BFF 客户端配置
    pub client: ClientConfig,
    /// OAuth2 客户端注册
    #[serde(default)]
    pub oauth2: OAuth2ClientConfig,
}

/// HTTP 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听主机
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 是否启用CORS
    #[serde(default)]
    pub enable_cors: bool,
    /// 允许的CORS源地址
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    7080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: false,
            cors_origins: vec![],
        }
    }
}

/// BFF 客户端配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// BFF 对外公开的基础地址，登录 URI 以此为前缀
    pub client_uri: String,
}

/// OAuth2 客户端配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuth2ClientConfig {
    /// 按注册键索引的客户端注册，保持配置文件中的声明顺序
    #[serde(default)]
    pub registration: IndexMap<String, ClientRegistration>,
}

/// 单个 OAuth2 客户端注册
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRegistration {
    /// 授权类型，如 `authorization_code`、`client_credentials`
    #[serde(default, alias = "authorization-grant-type")]
    pub authorization_grant_type: String,
    /// 提供商标识
    #[serde(default)]
    pub provider: String,
    /// 客户端 ID
    #[serde(default, alias = "client-id", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// 申请的 scope
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
}

impl ClientRegistration {
    /// 创建只包含授权类型和提供商的注册
    pub fn new(authorization_grant_type: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            authorization_grant_type: authorization_grant_type.into(),
            provider: provider.into(),
            client_id: None,
            scope: vec![],
        }
    }

    /// 是否使用 `authorization_code` 授权（精确匹配，区分大小写）
    #[must_use]
    pub fn is_authorization_code(&self) -> bool {
        self.authorization_grant_type == AUTHORIZATION_CODE
    }
}

impl AppConfig {
    /// 获取监听地址字符串
    #[must_use]
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be greater than 0".to_string());
        }
        if self.server.host.trim().is_empty() {
            return Err("server.host cannot be empty".to_string());
        }

        if self.client.client_uri.is_empty() {
            return Err("client.client_uri cannot be empty".to_string());
        }
        url::Url::parse(&self.client.client_uri)
            .map_err(|e| format!("client.client_uri is not a valid URI: {e}"))?;

        for (key, registration) in &self.oauth2.registration {
            if key.is_empty() {
                return Err("oauth2 registration key cannot be empty".to_string());
            }
            if registration.is_authorization_code() && registration.provider.is_empty() {
                return Err(format!(
                    "oauth2.registration.{key}.provider cannot be empty for authorization_code registrations"
                ));
            }
        }

        Ok(())
    }
}
