//! # BFF Login Options 主程序
//!
//! 向前端列出可用的 OAuth2 登录入口

use std::path::PathBuf;

use bff_login_options::{
    Result,
    config::{ConfigManager, resolve_config_path},
    lerror, linfo,
    logging::{self, LogComponent, LogStage},
    startup,
};
use clap::Parser;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "bff-login-options", version, about)]
struct Cli {
    /// 配置文件路径（默认读取 BFF_CONFIG_PATH 或 config/config.{RUST_ENV}.toml）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别，RUST_LOG 优先
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init_optimized_logging(cli.log_level.as_ref());

    // 配置加载失败时不能对外提供服务
    let config_path = resolve_config_path(cli.config);
    let config = match ConfigManager::from_file(&config_path) {
        Ok(manager) => {
            linfo!(
                "system",
                LogStage::Configuration,
                LogComponent::Config,
                "config_loaded",
                &format!("配置加载完成: {}", manager.path().display())
            );
            manager.into_config()
        }
        Err(e) => {
            lerror!(
                "system",
                LogStage::Configuration,
                LogComponent::Config,
                "config_load_failed",
                &format!("配置加载失败 ({}): {e:?}", config_path.display())
            );
            return Err(e);
        }
    };

    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::Main,
        "service_starting",
        "服务启动"
    );
    if let Err(e) = startup::run_server(&config).await {
        lerror!(
            "system",
            LogStage::Startup,
            LogComponent::Main,
            "service_start_failed",
            &format!("服务启动失败: {e:?}")
        );
        std::process::exit(1);
    }

    linfo!(
        "system",
        LogStage::Shutdown,
        LogComponent::Main,
        "service_shutdown",
        "服务正常关闭"
    );
    Ok(())
}
