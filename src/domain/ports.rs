use super::order::Order;
use super::pagination::Pagination;
use super::pay_config::{PayLevel, UserPayConfig};
use super::query::OrderQuery;
use crate::error::StoreError;
use async_trait::async_trait;

/// Read/write access to persisted orders.
///
/// `count` and `fetch` are independent reads. Nothing ties them to the same
/// snapshot, so a concurrent writer may land between them.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(&self, order: Order) -> Result<(), StoreError>;
    async fn count(&self, query: &OrderQuery) -> Result<u64, StoreError>;
    /// Returns the matching orders newest first, windowed by `pagination`.
    async fn fetch(
        &self,
        query: &OrderQuery,
        pagination: &Pagination,
    ) -> Result<Vec<Order>, StoreError>;
}

#[async_trait]
pub trait PayConfigStore: Send + Sync {
    async fn upsert(&self, config: UserPayConfig) -> Result<(), StoreError>;
    async fn get(&self, level: PayLevel) -> Result<Option<UserPayConfig>, StoreError>;
    /// All configs ordered by `min_score` ascending.
    async fn all(&self) -> Result<Vec<UserPayConfig>, StoreError>;
    async fn delete(&self, level: PayLevel) -> Result<bool, StoreError>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type PayConfigStoreBox = Box<dyn PayConfigStore>;
