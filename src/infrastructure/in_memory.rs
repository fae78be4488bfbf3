use crate::domain::order::{Order, OrderId};
use crate::domain::pagination::Pagination;
use crate::domain::pay_config::{PayLevel, UserPayConfig};
use crate::domain::ports::{OrderStore, PayConfigStore};
use crate::domain::query::{OrderQuery, select_page};
use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory order store.
///
/// Uses `Arc<RwLock<HashMap<OrderId, Order>>>` so clones share the same data.
/// Each read takes its own lock, so a count and a later fetch may observe
/// different states when a writer runs in between.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order);
        Ok(())
    }

    async fn count(&self, query: &OrderQuery) -> Result<u64, StoreError> {
        let orders = self.orders.read().await;
        Ok(orders.values().filter(|o| query.matches(o)).count() as u64)
    }

    async fn fetch(
        &self,
        query: &OrderQuery,
        pagination: &Pagination,
    ) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().await;
        Ok(select_page(orders.values().cloned(), query, pagination))
    }
}

/// A thread-safe in-memory store for payer tier policies, keyed by level.
#[derive(Default, Clone)]
pub struct InMemoryPayConfigStore {
    configs: Arc<RwLock<HashMap<PayLevel, UserPayConfig>>>,
}

impl InMemoryPayConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PayConfigStore for InMemoryPayConfigStore {
    async fn upsert(&self, config: UserPayConfig) -> Result<(), StoreError> {
        let mut configs = self.configs.write().await;
        configs.insert(config.level, config);
        Ok(())
    }

    async fn get(&self, level: PayLevel) -> Result<Option<UserPayConfig>, StoreError> {
        let configs = self.configs.read().await;
        Ok(configs.get(&level).cloned())
    }

    async fn all(&self) -> Result<Vec<UserPayConfig>, StoreError> {
        let configs = self.configs.read().await;
        let mut all: Vec<_> = configs.values().cloned().collect();
        all.sort_by_key(|c| (c.min_score, c.level));
        Ok(all)
    }

    async fn delete(&self, level: PayLevel) -> Result<bool, StoreError> {
        let mut configs = self.configs.write().await;
        Ok(configs.remove(&level).is_some())
    }
}
