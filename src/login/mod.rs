//! # 登录选项模块
//!
//! 将 OAuth2 客户端注册转换为前端可展示的登录选项

mod options;

pub use options::{AUTHORIZATION_PATH, LoginOption, LoginOptions, build_login_options};
