//! # BFF 服务器
//!
//! Axum HTTP服务器，对外提供登录选项接口

use crate::config::ServerConfig;
use crate::error::{BffError, Result};
use crate::login::LoginOptions;
use crate::logging::{LogComponent, LogStage};
use crate::{linfo, lwarn};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 服务器应用状态
///
/// 登录选项在启动时构建后注入，之后只读。
#[derive(Debug, Clone)]
pub struct AppState {
    login_options: LoginOptions,
}

impl AppState {
    /// 以启动时构建的登录选项创建状态
    #[must_use]
    pub const fn new(login_options: LoginOptions) -> Self {
        Self { login_options }
    }

    /// 登录选项快照
    #[must_use]
    pub const fn login_options(&self) -> &LoginOptions {
        &self.login_options
    }
}

/// 创建带中间件的完整路由器
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let app = super::routes::create_routes(state);
    let service_builder = ServiceBuilder::new().layer(TraceLayer::new_for_http());

    if !config.enable_cors {
        return app.layer(service_builder);
    }

    let mut cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    if config.cors_origins.is_empty() || config.cors_origins.iter().any(|o| o == "*") {
        cors_layer = cors_layer.allow_origin(Any);
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<std::result::Result<Vec<_>, _>>();

        match origins {
            Ok(origins) => cors_layer = cors_layer.allow_origin(origins),
            Err(e) => {
                lwarn!(
                    "system",
                    LogStage::Startup,
                    LogComponent::ServerSetup,
                    "cors_config_fail",
                    &format!("Invalid CORS origin configuration: {e}, falling back to allow any")
                );
                cors_layer = cors_layer.allow_origin(Any);
            }
        }
    }

    app.layer(service_builder.layer(cors_layer))
}

/// BFF 服务器
pub struct BffServer {
    /// 配置
    config: ServerConfig,
    /// 路由器
    router: Router,
}

impl BffServer {
    /// 创建新的服务器
    pub fn new(config: ServerConfig, state: AppState) -> Result<Self> {
        // 提前校验监听地址，避免在 serve 时才失败
        parse_bind_address(&config)?;

        let router = create_router(state, &config);
        Ok(Self { config, router })
    }

    /// 获取绑定地址
    pub fn bind_address(&self) -> Result<SocketAddr> {
        parse_bind_address(&self.config)
    }

    /// 启动服务器，`shutdown` 完成后优雅退出
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.bind_address()?;

        linfo!(
            "system",
            LogStage::Startup,
            LogComponent::ServerSetup,
            "server_start",
            &format!("Starting BFF server on {addr}")
        );

        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            BffError::server_start_with_source(format!("无法监听地址 {addr}"), e)
        })?;

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| BffError::server_start_with_source("BFF server error", e))?;

        Ok(())
    }
}

fn parse_bind_address(config: &ServerConfig) -> Result<SocketAddr> {
    let ip = config.host.parse::<std::net::IpAddr>().map_err(|e| {
        BffError::server_init_with_source(format!("Invalid bind address '{}'", config.host), e)
    })?;
    Ok(SocketAddr::new(ip, config.port))
}
