//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，并实现 `actix_web::ResponseError`：
//! 所有 handler 直接用 `?` 向上抛，HTTP 状态码与响应信封在这里统一生成。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::models::ApiResponse;

/// 5xx 错误对外的统一文案，内部细节只进日志
const GENERIC_SERVER_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - status() 方法 - 返回 HTTP 状态码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_cmis_errors {
    ($(
        $variant:ident($status:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum CmisError {
            $($variant(String),)*
        }

        impl CmisError {
            /// 获取 HTTP 状态码
            pub fn status(&self) -> StatusCode {
                match self {
                    $(CmisError::$variant(_) => {
                        StatusCode::from_u16($status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                    })*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CmisError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CmisError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CmisError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CmisError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_cmis_errors! {
    BadRequest(400, "Bad Request"),
    Unauthorized(401, "Unauthorized"),
    NotFound(404, "Not Found"),
    // 冲突沿用原 API 的 400 状态码
    Conflict(400, "Conflict"),
    Configuration(500, "Configuration Error"),
    DatabaseConnection(500, "Database Connection Error"),
    DatabaseOperation(500, "Database Operation Error"),
    Internal(500, "Internal Server Error"),
}

impl CmisError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CmisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CmisError {}

impl ResponseError for CmisError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self.format_simple());
            return HttpResponse::build(status)
                .json(ApiResponse::<()>::error(GENERIC_SERVER_MESSAGE));
        }
        HttpResponse::build(status).json(ApiResponse::<()>::error(self.message()))
    }
}

impl From<sea_orm::DbErr> for CmisError {
    fn from(err: sea_orm::DbErr) -> Self {
        // 唯一约束竞争：预检查之外的兜底，按冲突处理
        if let Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return CmisError::Conflict(duplicate_key_message(&detail));
        }
        CmisError::DatabaseOperation(err.to_string())
    }
}

fn duplicate_key_message(detail: &str) -> String {
    match duplicate_key_field(detail) {
        Some(field) => format!("A record with this {field} already exists."),
        None => "A record with this value already exists.".to_string(),
    }
}

/// 从数据库的唯一约束报错里解析出字段名
///
/// SQLite: `UNIQUE constraint failed: students.email`
/// Postgres: `duplicate key value violates unique constraint "students_email_key"`
fn duplicate_key_field(detail: &str) -> Option<String> {
    if let Some(rest) = detail.split("UNIQUE constraint failed:").nth(1) {
        let column = rest.split(',').next()?.trim();
        return column.split('.').next_back().map(camelize);
    }
    if let Some(constraint) = detail.split('"').nth(1) {
        // 约束名形如 <table>_<column>_key，列名自身可能带下划线，
        // 所以去掉表名前缀取整段，不能只取末段
        let name = constraint.strip_suffix("_key").unwrap_or(constraint);
        let name = name.strip_prefix("idx_").unwrap_or(name);
        let column = ["users_", "students_", "courses_", "marks_", "fees_"]
            .into_iter()
            .find_map(|table| name.strip_prefix(table))
            .unwrap_or(name);
        return Some(camelize(column));
    }
    None
}

/// snake_case 字段名转成对外 API 的 camelCase
fn camelize(field: &str) -> String {
    let mut parts = field.split('_');
    let mut out = String::with_capacity(field.len());
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

pub type Result<T> = std::result::Result<T, CmisError>;
