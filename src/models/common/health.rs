use serde::Serialize;

// 健康检查响应。前端部署脚本直接探测这个形状，不走统一信封
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

impl HealthStatus {
    pub fn running() -> Self {
        Self {
            message: "CMIS API is running",
            version: "v1",
            status: "OK",
        }
    }
}
