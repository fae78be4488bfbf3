use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of fractional digits a monetary value may carry.
pub const MAX_DECIMAL_PLACES: u32 = 2;

/// Number of significant fractional digits, ignoring trailing zeros.
///
/// `10.00` has zero, `10.005` has three.
fn decimal_places(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// Reads a decimal from its exact textual form.
///
/// Numeric-looking CSV fields would otherwise reach `Decimal` as `f64` and be
/// rounded before validation, so only strings are accepted and digits beyond
/// `Decimal`'s precision are an error rather than rounded away.
fn deserialize_exact<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Decimal::from_str_exact(raw.trim()).map_err(serde::de::Error::custom)
}

/// Validates fee rates in the order supplied, stopping at the first violation.
///
/// Each rate must lie in `[0, 1]` and carry at most two decimal places. The
/// range check runs before the precision check for every rate.
pub fn validate_rates<I>(rates: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = Decimal>,
{
    for rate in rates {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(ValidationError::RateOutOfRange);
        }
        if decimal_places(rate) > MAX_DECIMAL_PLACES {
            return Err(ValidationError::RateDecimalPlacesExceeded);
        }
    }
    Ok(())
}

/// Validates a transaction amount: strictly positive, at most two decimal places.
pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::AmountMustBeGreaterThanZero);
    }
    if decimal_places(amount) > MAX_DECIMAL_PLACES {
        return Err(ValidationError::AmountDecimalPlacesExceeded);
    }
    Ok(())
}

/// A positive monetary amount with at most two decimal places.
///
/// Deserialization parses the exact text and goes through [`validate_amount`],
/// so an `Amount` read from CSV or JSON is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        validate_amount(value)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::new(deserialize_exact(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A proportional charge in `[0, 1]` with at most two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(into = "Decimal")]
pub struct FeeRate(Decimal);

impl FeeRate {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        validate_rates([value])?;
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for FeeRate {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for FeeRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::new(deserialize_exact(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl From<FeeRate> for Decimal {
    fn from(rate: FeeRate) -> Self {
        rate.0
    }
}
