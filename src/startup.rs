//! # 服务启动
//!
//! 从配置构建登录选项、创建服务器并管理其生命周期

use crate::{
    config::AppConfig,
    error::{Context, Result},
    ldebug, lerror, linfo,
    login::{LoginOptions, build_login_options},
    logging::{LogComponent, LogStage},
    server::{AppState, BffServer},
};

/// 根据配置构建登录选项
///
/// 进程生命周期内只调用一次。
pub fn prepare_login_options(config: &AppConfig) -> LoginOptions {
    let options = build_login_options(&config.oauth2.registration, &config.client.client_uri);

    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::LoginOptions,
        "login_options_built",
        &format!(
            "Built {} login option(s) from {} client registration(s)",
            options.len(),
            config.oauth2.registration.len()
        )
    );
    for option in options.iter() {
        ldebug!(
            "system",
            LogStage::Startup,
            LogComponent::LoginOptions,
            "login_option",
            "login option registered",
            label = %option.label,
            login_uri = %option.login_uri
        );
    }

    options
}

/// 创建服务器实例
pub fn create_server(config: &AppConfig) -> Result<BffServer> {
    let login_options = prepare_login_options(config);

    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::ServerSetup,
        "listen_info",
        &format!("BFF server will listen on {}", config.listen_address())
    );

    BffServer::new(config.server.clone(), AppState::new(login_options))
        .context("Failed to create BFF server")
}

/// 等待 Ctrl+C 信号
async fn handle_ctrl_c_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => linfo!(
            "system",
            LogStage::Shutdown,
            LogComponent::ServerSetup,
            "ctrl_c_received",
            "Ctrl+C signal received, shutting down"
        ),
        Err(e) => lerror!(
            "system",
            LogStage::Shutdown,
            LogComponent::ServerSetup,
            "ctrl_c_error",
            &format!("Failed to listen for Ctrl+C: {e:?}")
        ),
    }
}

/// 启动服务并阻塞直到收到关闭信号
pub async fn run_server(config: &AppConfig) -> Result<()> {
    let server = create_server(config)?;
    server.serve(handle_ctrl_c_signal()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AUTHORIZATION_CODE, ClientConfig, ClientRegistration};

    #[test]
    fn test_prepare_login_options_from_config() {
        let mut config = AppConfig {
            client: ClientConfig {
                client_uri: "http://localhost:7080".to_string(),
            },
            ..Default::default()
        };
        config.oauth2.registration.insert(
            "quiz-bff".to_string(),
            ClientRegistration::new(AUTHORIZATION_CODE, "keycloak"),
        );
        config.oauth2.registration.insert(
            "machine".to_string(),
            ClientRegistration::new("client_credentials", "keycloak"),
        );

        let options = prepare_login_options(&config);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "keycloak");
        assert_eq!(
            options[0].login_uri,
            "http://localhost:7080/oauth2/authorization/quiz-bff"
        );
    }
}
