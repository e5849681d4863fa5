use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 确保头像存储目录存在
fn ensure_avatar_dir() {
    let config = AppConfig::get();
    let dir = &config.avatars.dir;
    if !Path::new(dir).exists() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!("Failed to create avatar directory '{}': {}", dir, e);
        } else {
            warn!("Avatar directory '{}' created", dir);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化和头像目录准备
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    ensure_avatar_dir();

    StartupContext { storage }
}
