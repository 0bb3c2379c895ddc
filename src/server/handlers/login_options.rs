//! 登录选项处理器

use crate::login::LoginOptions;
use crate::server::server::AppState;
use axum::Json;
use axum::extract::State;

/// 返回启动时构建好的登录选项
///
/// 每次请求返回同一份快照，不会重新计算。
pub async fn get_login_options(State(state): State<AppState>) -> Json<LoginOptions> {
    Json(state.login_options().clone())
}
