use crate::domain::money::{FeeRate, validate_rates};
use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tier identifier of a payer policy.
pub type PayLevel = u8;

/// Financial policy applied to payers whose score falls within the tier.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct UserPayConfig {
    pub level: PayLevel,
    /// Inclusive lower bound.
    pub min_score: i64,
    /// Exclusive upper bound; `None` means unbounded.
    pub max_score: Option<i64>,
    /// Cap on daily transaction volume; `None` means unlimited.
    pub daily_limit: Option<i64>,
    pub fee_rate: FeeRate,
}

impl UserPayConfig {
    /// Builds a config from unchecked input, validating the fee rate first and
    /// the score range second.
    pub fn new(
        level: PayLevel,
        min_score: i64,
        max_score: Option<i64>,
        daily_limit: Option<i64>,
        fee_rate: Decimal,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            level,
            min_score,
            max_score,
            daily_limit,
            fee_rate: FeeRate::new(fee_rate)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-checks the invariants of an already built config.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_rates([self.fee_rate.value()])?;
        match self.max_score {
            Some(max) if max < self.min_score => Err(ValidationError::ScoreRangeInverted {
                min: self.min_score,
                max,
            }),
            _ => Ok(()),
        }
    }

    pub fn covers(&self, score: i64) -> bool {
        score >= self.min_score && self.max_score.is_none_or(|max| score < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_validates_fee_rate() {
        assert_eq!(
            UserPayConfig::new(1, 0, None, None, dec!(1.5)),
            Err(ValidationError::RateOutOfRange)
        );
        assert_eq!(
            UserPayConfig::new(1, 0, None, None, dec!(0.015)),
            Err(ValidationError::RateDecimalPlacesExceeded)
        );
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        assert_eq!(
            UserPayConfig::new(1, 100, Some(50), None, dec!(0.01)),
            Err(ValidationError::ScoreRangeInverted { min: 100, max: 50 })
        );
    }

    #[test]
    fn test_covers() {
        let bounded = UserPayConfig::new(1, 100, Some(500), Some(1000), dec!(0.02)).unwrap();
        assert!(!bounded.covers(99));
        assert!(bounded.covers(100));
        assert!(bounded.covers(499));
        assert!(!bounded.covers(500));

        let open = UserPayConfig::new(2, 500, None, None, dec!(0)).unwrap();
        assert!(open.covers(500));
        assert!(open.covers(i64::MAX));
    }
}
