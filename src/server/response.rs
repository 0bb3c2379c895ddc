//! # API 响应结构
//!
//! 错误响应统一使用 JSON 信封；登录选项接口直接返回数组，不经过信封。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// # 标准错误信息
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// 错误代码
    pub code: String,
    /// 错误描述
    pub message: String,
}

/// # 标准错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 固定为 `false`
    pub success: bool,
    /// 错误详情
    pub error: ErrorInfo,
    /// 生成时间
    pub timestamp: DateTime<Utc>,
}
