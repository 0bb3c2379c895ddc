//! # 错误处理测试

use crate::error::{BffError, Context};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::error::Error;

#[test]
fn test_config_error_creation() {
    let err = BffError::config("测试配置错误");
    assert!(matches!(err, BffError::Config { .. }));
    assert_eq!(err.to_string(), "配置错误: 测试配置错误");
}

#[test]
fn test_config_error_with_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "文件不存在");
    let err = BffError::config_with_source("配置文件加载失败", io_err);

    assert!(matches!(err, BffError::Config { .. }));
    assert!(err.to_string().contains("配置错误: 配置文件加载失败"));
    assert!(err.source().is_some());
}

#[test]
fn test_context_wraps_and_keeps_status() {
    let result: Result<(), BffError> = Err(BffError::not_found("/missing"));

    let err = result.context("处理请求失败").unwrap_err();
    assert!(matches!(err, BffError::Context { .. }));
    assert_eq!(err.to_string(), "处理请求失败: 资源未找到: /missing");
    assert_eq!(err.to_http_response_parts(), (StatusCode::NOT_FOUND, "NOT_FOUND"));
}

#[test]
fn test_into_response_status() {
    let response = BffError::not_found("/nowhere").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = BffError::config("bad").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
