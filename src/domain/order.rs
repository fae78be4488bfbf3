use crate::domain::money::{Amount, FeeRate};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a ledger order.
pub type OrderId = u64;

/// Literal format of every timestamp crossing the system boundary.
pub const TRADE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Receive,
    Payment,
    Transfer,
    Community,
}

/// Status as persisted. The external vocabulary is translated by
/// [`crate::domain::status`] before it ever meets this type.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Success,
    Pending,
    Failed,
    Disputing,
    Refund,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Success,
        OrderStatus::Pending,
        OrderStatus::Failed,
        OrderStatus::Disputing,
        OrderStatus::Refund,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Success => "success",
            OrderStatus::Pending => "pending",
            OrderStatus::Failed => "failed",
            OrderStatus::Disputing => "disputing",
            OrderStatus::Refund => "refund",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == token)
            .ok_or_else(|| token.to_string())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction between a payer and a payee.
///
/// `amount` and `fee_rate` are validated when the order is built or
/// deserialized; reads never re-validate them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub order_name: String,
    pub r#type: OrderType,
    pub status: OrderStatus,
    pub payer_username: String,
    pub payee_username: String,
    pub amount: Amount,
    #[serde(default)]
    pub fee_rate: FeeRate,
    #[serde(default)]
    pub remark: String,
    #[serde(with = "trade_time")]
    pub trade_time: NaiveDateTime,
}

impl Order {
    /// Returns whether `username` is the payer or the payee of this order.
    pub fn involves(&self, username: &str) -> bool {
        self.payer_username == username || self.payee_username == username
    }
}

/// Length of a timestamp in the boundary format.
const TRADE_TIME_LEN: usize = "YYYY-MM-DD HH:mm:ss".len();

/// Parses a timestamp in the fixed `YYYY-MM-DD HH:mm:ss` format.
///
/// chrono's format is lenient about padding, whitespace, signs and leap
/// seconds, so the input must also render back to itself unchanged.
pub fn parse_trade_time(value: &str) -> Option<NaiveDateTime> {
    if value.len() != TRADE_TIME_LEN {
        return None;
    }
    let parsed = NaiveDateTime::parse_from_str(value, TRADE_TIME_FORMAT).ok()?;
    if parsed.nanosecond() >= 1_000_000_000 {
        return None;
    }
    (parsed.format(TRADE_TIME_FORMAT).to_string() == value).then_some(parsed)
}

/// Serde adapter keeping `trade_time` in the boundary format on every codec.
pub mod trade_time {
    use super::TRADE_TIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TRADE_TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_trade_time(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("expected YYYY-MM-DD HH:mm:ss, got {raw:?}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens_round_trip_through_from_str() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("refunded".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_json_uses_boundary_time_format() {
        let json = r#"{
            "id": 7,
            "type": "payment",
            "status": "refund",
            "payer_username": "alice",
            "payee_username": "bob",
            "amount": "12.50",
            "fee_rate": "0.01",
            "trade_time": "2025-01-15 08:30:00"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.r#type, OrderType::Payment);
        assert_eq!(order.status, OrderStatus::Refund);
        assert!(order.involves("alice"));
        assert!(order.involves("bob"));
        assert!(!order.involves("carol"));

        let out = serde_json::to_value(&order).unwrap();
        assert_eq!(out["trade_time"], "2025-01-15 08:30:00");
    }

    #[test]
    fn test_order_rejects_invalid_amount() {
        let json = r#"{
            "id": 1, "type": "transfer", "status": "success",
            "payer_username": "a", "payee_username": "b",
            "amount": "0", "trade_time": "2025-01-15 08:30:00"
        }"#;
        assert!(serde_json::from_str::<Order>(json).is_err());
    }

    #[test]
    fn test_parse_trade_time_is_strict() {
        assert!(parse_trade_time("2025-01-31 23:59:59").is_some());
        assert!(parse_trade_time("01/01/2025").is_none());
        assert!(parse_trade_time("2025-01-31").is_none());
        assert!(parse_trade_time("2025-01-31T23:59:59").is_none());
        assert!(parse_trade_time("2025-1-5 1:2:3").is_none());
        assert!(parse_trade_time("2025-01-01  00:00:00").is_none());
        assert!(parse_trade_time("+2025-01-01 00:00:00").is_none());
        assert!(parse_trade_time("2025-01-01 00:00:60").is_none());
        assert!(parse_trade_time(" 2025-01-01 00:00:0").is_none());
        assert!(parse_trade_time("2025-02-30 00:00:00").is_none());
    }

    #[test]
    fn test_order_rejects_loose_trade_time() {
        let json = r#"{
            "id": 1, "type": "transfer", "status": "success",
            "payer_username": "a", "payee_username": "b",
            "amount": "1.00", "trade_time": "2025-1-5 1:2:3"
        }"#;
        assert!(serde_json::from_str::<Order>(json).is_err());
    }
}
