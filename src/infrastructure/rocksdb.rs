use crate::domain::order::Order;
use crate::domain::pagination::Pagination;
use crate::domain::pay_config::{PayLevel, UserPayConfig};
use crate::domain::ports::{OrderStore, PayConfigStore};
use crate::domain::query::{OrderQuery, select_page};
use crate::error::StoreError;
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing orders, keyed by big-endian order id.
pub const CF_ORDERS: &str = "orders";
/// Column Family for storing payer tier policies, keyed by level.
pub const CF_PAY_CONFIGS: &str = "pay_configs";

impl From<rocksdb::Error> for StoreError {
    fn from(e: rocksdb::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// A persistent store implementation using RocksDB.
///
/// Orders and pay configs live in separate Column Families and are encoded
/// as JSON. Filtering happens while scanning the orders family.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at `path`, creating the column
    /// families on first use.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_orders = ColumnFamilyDescriptor::new(CF_ORDERS, Options::default());
        let cf_pay_configs = ColumnFamilyDescriptor::new(CF_PAY_CONFIGS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_orders, cf_pay_configs])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily, StoreError> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Backend(format!("{name} column family not found")))
    }

    fn put<T: Serialize>(&self, cf: &str, key: &[u8], value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| StoreError::Codec(format!("Serialization error: {e}")))?;
        self.db.put_cf(self.cf(cf)?, key, bytes)?;
        Ok(())
    }

    fn scan<T: DeserializeOwned>(&self, cf: &str) -> Result<Vec<T>, StoreError> {
        let mut items = Vec::new();
        for item in self.db.iterator_cf(self.cf(cf)?, IteratorMode::Start) {
            let (_key, value) = item?;
            let decoded = serde_json::from_slice(&value)
                .map_err(|e| StoreError::Codec(format!("Deserialization error: {e}")))?;
            items.push(decoded);
        }
        Ok(items)
    }
}

#[async_trait]
impl OrderStore for RocksDBStore {
    async fn insert(&self, order: Order) -> Result<(), StoreError> {
        self.put(CF_ORDERS, &order.id.to_be_bytes(), &order)
    }

    async fn count(&self, query: &OrderQuery) -> Result<u64, StoreError> {
        let orders: Vec<Order> = self.scan(CF_ORDERS)?;
        Ok(orders.iter().filter(|o| query.matches(o)).count() as u64)
    }

    async fn fetch(
        &self,
        query: &OrderQuery,
        pagination: &Pagination,
    ) -> Result<Vec<Order>, StoreError> {
        let orders: Vec<Order> = self.scan(CF_ORDERS)?;
        Ok(select_page(orders, query, pagination))
    }
}

#[async_trait]
impl PayConfigStore for RocksDBStore {
    async fn upsert(&self, config: UserPayConfig) -> Result<(), StoreError> {
        self.put(CF_PAY_CONFIGS, &[config.level], &config)
    }

    async fn get(&self, level: PayLevel) -> Result<Option<UserPayConfig>, StoreError> {
        match self.db.get_cf(self.cf(CF_PAY_CONFIGS)?, [level])? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| StoreError::Codec(format!("Deserialization error: {e}"))),
            None => Ok(None),
        }
    }

    async fn all(&self) -> Result<Vec<UserPayConfig>, StoreError> {
        let mut configs: Vec<UserPayConfig> = self.scan(CF_PAY_CONFIGS)?;
        configs.sort_by_key(|c| (c.min_score, c.level));
        Ok(configs)
    }

    async fn delete(&self, level: PayLevel) -> Result<bool, StoreError> {
        let cf = self.cf(CF_PAY_CONFIGS)?;
        let existed = self.db.get_pinned_cf(cf, [level])?.is_some();
        if existed {
            self.db.delete_cf(cf, [level])?;
        }
        Ok(existed)
    }
}
