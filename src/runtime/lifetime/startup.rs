use crate::errors::Result;
use crate::models::common::EntityCounts;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub counts: EntityCounts,
}

/// 准备启动上下文：创建存储（运行迁移）并统计现有数据
pub async fn prepare_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let counts = storage.entity_counts().await?;
    info!("Entity store contents: {}", counts);

    Ok(StartupContext { storage, counts })
}
