//! # BFF Login Options
//!
//! 后端转发层（BFF）登录选项服务核心库

pub mod config;
pub mod error;
pub mod logging;
pub mod login;
pub mod server;
pub mod startup;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{BffError, Result};
pub use login::{LoginOption, LoginOptions};
