//! # HTTP 服务模块
//!
//! 对前端提供登录选项查询接口

pub mod handlers;
pub mod response;
pub mod routes;
#[allow(clippy::module_inception)]
pub mod server;

pub use routes::create_routes;
pub use server::{AppState, BffServer, create_router};
