//! # 日志配置模块
//!
//! 提供日志初始化以及带有阶段/组件字段的结构化日志宏

use std::env;
use std::fmt;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志所处的生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStage {
    /// 进程启动
    Startup,
    /// 配置加载
    Configuration,
    /// 进程关闭
    Shutdown,
}

impl LogStage {
    /// 字段取值
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Configuration => "configuration",
            Self::Shutdown => "shutdown",
        }
    }
}

impl fmt::Display for LogStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 产生日志的组件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogComponent {
    /// 主程序
    Main,
    /// 配置管理
    Config,
    /// 登录选项构建
    LoginOptions,
    /// HTTP 服务器搭建
    ServerSetup,
}

impl LogComponent {
    /// 字段取值
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Config => "config",
            Self::LoginOptions => "login_options",
            Self::ServerSetup => "server_setup",
        }
    }
}

impl fmt::Display for LogComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 结构化 info 日志
///
/// 参数依次为 `request_id`、[`LogStage`]、[`LogComponent`]、操作名、描述，
/// 之后可追加任意 `tracing` 字段。
#[macro_export]
macro_rules! linfo {
    ($request_id:expr, $stage:expr, $component:expr, $operation:expr, $description:expr $(, $($fields:tt)+)?) => {
        ::tracing::info!(
            request_id = %$request_id,
            stage = %$stage,
            component = %$component,
            operation = %$operation,
            $($($fields)+,)?
            "{}",
            $description
        )
    };
}

/// 结构化 debug 日志，参数同 [`linfo!`]
#[macro_export]
macro_rules! ldebug {
    ($request_id:expr, $stage:expr, $component:expr, $operation:expr, $description:expr $(, $($fields:tt)+)?) => {
        ::tracing::debug!(
            request_id = %$request_id,
            stage = %$stage,
            component = %$component,
            operation = %$operation,
            $($($fields)+,)?
            "{}",
            $description
        )
    };
}

/// 结构化 warn 日志，参数同 [`linfo!`]
#[macro_export]
macro_rules! lwarn {
    ($request_id:expr, $stage:expr, $component:expr, $operation:expr, $description:expr $(, $($fields:tt)+)?) => {
        ::tracing::warn!(
            request_id = %$request_id,
            stage = %$stage,
            component = %$component,
            operation = %$operation,
            $($($fields)+,)?
            "{}",
            $description
        )
    };
}

/// 结构化 error 日志，参数同 [`linfo!`]
#[macro_export]
macro_rules! lerror {
    ($request_id:expr, $stage:expr, $component:expr, $operation:expr, $description:expr $(, $($fields:tt)+)?) => {
        ::tracing::error!(
            request_id = %$request_id,
            stage = %$stage,
            component = %$component,
            operation = %$operation,
            $($($fields)+,)?
            "{}",
            $description
        )
    };
}

/// 默认日志过滤规则
#[must_use]
pub fn default_filter(log_level: Option<&str>) -> String {
    let level = log_level.unwrap_or("info");
    format!("{level},bff_login_options=debug,tower_http=info")
}

/// 初始化日志系统
///
/// `RUST_LOG` 优先于命令行传入的日志级别。
pub fn init_optimized_logging(log_level: Option<&String>) {
    let log_filter = env::var("RUST_LOG")
        .unwrap_or_else(|_| default_filter(log_level.map(String::as_str)));

    let result = tracing_subscriber::registry()
        .with(EnvFilter::try_new(&log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("日志系统已初始化，跳过重复初始化");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_given_level() {
        assert_eq!(
            default_filter(Some("warn")),
            "warn,bff_login_options=debug,tower_http=info"
        );
        assert!(default_filter(None).starts_with("info,"));
    }

    #[test]
    fn test_stage_and_component_display() {
        assert_eq!(LogStage::Startup.to_string(), "startup");
        assert_eq!(LogComponent::LoginOptions.to_string(), "login_options");
    }

    #[test]
    fn test_macros_accept_extra_fields() {
        init_optimized_logging(None);
        linfo!(
            "test",
            LogStage::Startup,
            LogComponent::Main,
            "macro_fields",
            "带附加字段的日志",
            count = 3,
            path = "/login-options"
        );
        lwarn!("test", LogStage::Startup, LogComponent::Main, "macro_plain", "普通日志");
    }
}
