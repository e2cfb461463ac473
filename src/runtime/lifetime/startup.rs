use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::storage::Storage;
use crate::utils::jwt::Jwt;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub jwt: Jwt,
}

/// 准备服务器启动的上下文
///
/// 连接存储并跑完迁移，从配置构造令牌签名服务。
/// 这里出错没有降级路径，直接终止启动。
pub async fn prepare_server_startup(config: &AppConfig) -> StartupContext {
    let storage = crate::storage::create_storage(config)
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let jwt = Jwt::new(&config.jwt);
    debug!("Token signing service ready");

    StartupContext { storage, jwt }
}
