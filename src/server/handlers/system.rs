//! # 系统处理器

use crate::error::BffError;
use axum::http::Uri;

/// Ping 处理器
pub async fn ping_handler() -> &'static str {
    "pong"
}

/// 未匹配路由
pub async fn not_found_handler(uri: Uri) -> BffError {
    BffError::not_found(uri.path())
}
