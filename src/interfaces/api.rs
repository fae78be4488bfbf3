use crate::domain::order::{Order, OrderType};
use crate::domain::status::ExternalStatus;
use serde::{Deserialize, Serialize};

/// Body of a transaction listing request.
///
/// `type` and `status` are closed vocabularies: unknown tokens fail
/// deserialization. Time bounds stay raw strings so that a malformed value is
/// reported as a request error naming the field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionListRequest {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default)]
    pub r#type: Option<OrderType>,
    #[serde(default)]
    pub status: Option<ExternalStatus>,
    #[serde(default, rename = "startTime")]
    pub start_time: Option<String>,
    #[serde(default, rename = "endTime")]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub total: u64,
    /// Page actually applied after normalization.
    pub page: u64,
    /// Page size actually applied after normalization.
    pub size: u32,
    pub data: Vec<Order>,
}
