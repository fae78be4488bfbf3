use crate::domain::pay_config::{PayLevel, UserPayConfig};
use crate::domain::ports::PayConfigStoreBox;
use crate::error::Result;
use tracing::{info, warn};

/// Administrative access to payer tier policies.
///
/// Every write re-validates the config before it reaches the store, so a
/// persisted tier always satisfies the fee-rate invariant.
pub struct PayConfigService {
    store: PayConfigStoreBox,
}

impl PayConfigService {
    pub fn new(store: PayConfigStoreBox) -> Self {
        Self { store }
    }

    /// Creates or replaces the tier identified by `config.level`.
    pub async fn save(&self, config: UserPayConfig) -> Result<()> {
        if let Err(e) = config.validate() {
            warn!(level = config.level, error = %e, "rejecting pay config");
            return Err(e.into());
        }
        info!(level = config.level, fee_rate = %config.fee_rate.value(), "saving pay config");
        self.store.upsert(config).await?;
        Ok(())
    }

    pub async fn get(&self, level: PayLevel) -> Result<Option<UserPayConfig>> {
        Ok(self.store.get(level).await?)
    }

    pub async fn list(&self) -> Result<Vec<UserPayConfig>> {
        Ok(self.store.all().await?)
    }

    /// Removes a tier, returning whether it existed.
    pub async fn delete(&self, level: PayLevel) -> Result<bool> {
        let removed = self.store.delete(level).await?;
        if removed {
            info!(level, "deleted pay config");
        }
        Ok(removed)
    }

    /// Finds the tier covering `score`: the highest `min_score` not above it
    /// whose upper bound, if any, lies above it.
    pub async fn tier_for_score(&self, score: i64) -> Result<Option<UserPayConfig>> {
        let configs = self.store.all().await?;
        Ok(configs.into_iter().rev().find(|c| c.covers(score)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::FeeRate;
    use crate::error::{LedgerError, ValidationError};
    use crate::infrastructure::in_memory::InMemoryPayConfigStore;
    use rust_decimal_macros::dec;

    fn service() -> PayConfigService {
        PayConfigService::new(Box::new(InMemoryPayConfigStore::new()))
    }

    #[tokio::test]
    async fn test_save_and_resolve_tiers() {
        let svc = service();
        svc.save(UserPayConfig::new(0, 0, Some(100), Some(500), dec!(0.05)).unwrap())
            .await
            .unwrap();
        svc.save(UserPayConfig::new(1, 100, Some(1000), None, dec!(0.02)).unwrap())
            .await
            .unwrap();
        svc.save(UserPayConfig::new(2, 1000, None, None, dec!(0)).unwrap())
            .await
            .unwrap();

        assert_eq!(svc.tier_for_score(0).await.unwrap().unwrap().level, 0);
        assert_eq!(svc.tier_for_score(100).await.unwrap().unwrap().level, 1);
        assert_eq!(svc.tier_for_score(999).await.unwrap().unwrap().level, 1);
        assert_eq!(svc.tier_for_score(5000).await.unwrap().unwrap().level, 2);
        assert!(svc.tier_for_score(-1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_config_without_persisting() {
        let svc = service();
        let config = UserPayConfig {
            level: 3,
            min_score: 50,
            max_score: Some(10),
            daily_limit: None,
            fee_rate: FeeRate::ZERO,
        };

        let err = svc.save(config).await.unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::ScoreRangeInverted { min: 50, max: 10 })
        ));
        assert!(svc.get(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let svc = service();
        svc.save(UserPayConfig::new(1, 0, None, None, dec!(0.10)).unwrap())
            .await
            .unwrap();
        svc.save(UserPayConfig::new(1, 0, None, Some(200), dec!(0.20)).unwrap())
            .await
            .unwrap();

        let stored = svc.get(1).await.unwrap().unwrap();
        assert_eq!(stored.fee_rate.value(), dec!(0.20));
        assert_eq!(stored.daily_limit, Some(200));
        assert_eq!(svc.list().await.unwrap().len(), 1);

        assert!(svc.delete(1).await.unwrap());
        assert!(!svc.delete(1).await.unwrap());
    }
}
