//! 目录快照状态
//!
//! 显式持有当前目录；`reload` 成功才替换快照，失败保留旧快照。

use std::sync::Arc;

use async_trait::async_trait;
use mise_bootstrap::ReadinessProbe;
use mise_errors::AppResult;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::application::handlers::CatalogLoader;
use crate::domain::catalog::Catalog;

pub struct CatalogState {
    loader: CatalogLoader,
    current: RwLock<Option<Arc<Catalog>>>,
}

impl CatalogState {
    pub fn new(loader: CatalogLoader) -> Self {
        Self {
            loader,
            current: RwLock::new(None),
        }
    }

    /// 重新加载目录
    pub async fn reload(&self) -> AppResult<Arc<Catalog>> {
        match self.loader.load().await {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                *self.current.write().await = Some(catalog.clone());
                info!("Catalog snapshot replaced");
                Ok(catalog)
            }
            Err(e) => {
                warn!(error = %e, "Catalog reload failed, keeping previous snapshot");
                Err(e)
            }
        }
    }

    /// 当前快照；尚未加载时为 None
    pub async fn snapshot(&self) -> Option<Arc<Catalog>> {
        self.current.read().await.clone()
    }

    /// 当前快照，尚未加载时先加载
    pub async fn snapshot_or_load(&self) -> AppResult<Arc<Catalog>> {
        if let Some(catalog) = self.snapshot().await {
            return Ok(catalog);
        }
        self.reload().await
    }
}

#[async_trait]
impl ReadinessProbe for CatalogState {
    fn component_name(&self) -> &'static str {
        "catalog"
    }

    async fn check(&self) -> Result<(), String> {
        match self.snapshot().await {
            Some(_) => Ok(()),
            None => Err("catalog not loaded".to_string()),
        }
    }
}
