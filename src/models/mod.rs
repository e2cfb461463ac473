//! 业务模型
//!
//! 与 entity 模块的数据库模型分离：这里是对外 API 的请求/响应形状。

pub mod auth;
pub mod common;
pub mod courses;
pub mod fees;
pub mod marks;
pub mod students;
pub mod users;

pub use common::response::ApiResponse;
