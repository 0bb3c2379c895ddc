//! # 路由配置

use crate::server::handlers::{login_options, system};
use crate::server::server::AppState;
use axum::Router;
use axum::routing::get;

/// 登录选项查询路径
pub const LOGIN_OPTIONS_PATH: &str = "/login-options";

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(LOGIN_OPTIONS_PATH, get(login_options::get_login_options))
        .route("/ping", get(system::ping_handler))
        .fallback(system::not_found_handler)
        .with_state(state)
}
