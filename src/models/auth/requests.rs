use serde::Deserialize;

// 注册请求（来自HTTP请求）
//
// 字段都是 Option：缺失时由 handler 统一回 "Please provide email and password."，
// 而不是暴露反序列化错误。
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// 邮箱
    pub email: Option<String>,
    /// 密码
    pub password: Option<String>,
}

// 登录请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 邮箱
    pub email: Option<String>,
    /// 密码
    pub password: Option<String>,
}
