//! In-Memory Menu Repository Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, MenuId};
use crate::domain::menu::Menu;
use crate::ports::MenuRepository;

/// Menus keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuRepository {
    menus: Arc<RwLock<HashMap<MenuId, Menu>>>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a stored menu.
    pub async fn get(&self, id: &MenuId) -> Option<Menu> {
        self.menus.read().await.get(id).cloned()
    }

    /// Snapshot of all stored menus (useful for tests).
    pub async fn menus(&self) -> Vec<Menu> {
        self.menus.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn add(&self, menu: &Menu) -> Result<(), DomainError> {
        self.menus.write().await.insert(*menu.id(), menu.clone());
        Ok(())
    }
}
