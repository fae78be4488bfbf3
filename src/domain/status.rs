//! Translation from the status vocabulary exposed to API callers into the
//! vocabulary persisted on orders.

use crate::domain::order::OrderStatus;
use serde::{Deserialize, Serialize};

/// Status tokens accepted from callers.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ExternalStatus {
    Success,
    Pending,
    Failed,
    Disputing,
    Refunded,
}

impl ExternalStatus {
    pub const ALL: [ExternalStatus; 5] = [
        ExternalStatus::Success,
        ExternalStatus::Pending,
        ExternalStatus::Failed,
        ExternalStatus::Disputing,
        ExternalStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExternalStatus::Success => "success",
            ExternalStatus::Pending => "pending",
            ExternalStatus::Failed => "failed",
            ExternalStatus::Disputing => "disputing",
            ExternalStatus::Refunded => "refunded",
        }
    }
}

/// External to internal status table, one row per [`ExternalStatus`] in
/// declaration order. `refunded` is the only token spelled differently once
/// persisted; every other row maps a token onto itself.
pub const STATUS_VOCABULARY: [(ExternalStatus, OrderStatus); 5] = [
    (ExternalStatus::Success, OrderStatus::Success),
    (ExternalStatus::Pending, OrderStatus::Pending),
    (ExternalStatus::Failed, OrderStatus::Failed),
    (ExternalStatus::Disputing, OrderStatus::Disputing),
    (ExternalStatus::Refunded, OrderStatus::Refund),
];

/// Maps a caller-facing status onto the persisted [`OrderStatus`].
pub fn to_internal(external: ExternalStatus) -> OrderStatus {
    STATUS_VOCABULARY[external as usize].1
}
