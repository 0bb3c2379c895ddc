//! # 请求处理器

pub mod login_options;
pub mod system;
