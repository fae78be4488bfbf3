use crate::domain::order::parse_trade_time;
use crate::domain::pagination::Pagination;
use crate::domain::ports::OrderStoreBox;
use crate::domain::query::OrderQuery;
use crate::domain::status;
use crate::error::{RequestError, Result, StoreError};
use crate::interfaces::api::{TransactionListRequest, TransactionListResponse};
use chrono::NaiveDateTime;
use tracing::{debug, error, warn};

/// Serves paginated transaction history to ledger parties.
///
/// Every listing is scoped to the caller: the party clause is the only
/// authorization check, and there is no way to build a query without it.
pub struct TransactionQueryEngine {
    order_store: OrderStoreBox,
}

impl TransactionQueryEngine {
    pub fn new(order_store: OrderStoreBox) -> Self {
        Self { order_store }
    }

    /// Lists the caller's orders matching `request`.
    ///
    /// Malformed input fails before the store is touched. The total and the
    /// page come from two separate reads; callers needing both from one
    /// snapshot must provide a store that serializes them.
    #[tracing::instrument(skip(self, caller, request), fields(caller = caller.unwrap_or("<anonymous>")))]
    pub async fn list(
        &self,
        caller: Option<&str>,
        request: TransactionListRequest,
    ) -> Result<TransactionListResponse> {
        let caller = caller.filter(|c| !c.is_empty()).ok_or_else(|| {
            warn!("rejecting unauthenticated listing request");
            RequestError::Unauthenticated
        })?;

        let pagination = Pagination::normalize(request.page, request.page_size);
        let query = build_query(caller, &request)?;
        debug!(
            page = pagination.page,
            page_size = pagination.page_size,
            conditions = ?query.conditions(),
            "listing transactions"
        );

        let total = self.order_store.count(&query).await.map_err(log_store_failure)?;
        let data = self
            .order_store
            .fetch(&query, &pagination)
            .await
            .map_err(log_store_failure)?;

        Ok(TransactionListResponse {
            total,
            page: pagination.page,
            size: pagination.page_size,
            data,
        })
    }
}

/// Composes the listing predicate from the optional filters of `request`.
pub fn build_query(caller: &str, request: &TransactionListRequest) -> Result<OrderQuery> {
    let mut query = OrderQuery::for_party(caller);

    if let Some(order_type) = request.r#type {
        query = query.with_type(order_type);
    }
    if let Some(external) = request.status {
        query = query.with_status(status::to_internal(external));
    }
    if let Some(raw) = request.start_time.as_deref() {
        query = query.traded_from(parse_bound("startTime", raw)?);
    }
    if let Some(raw) = request.end_time.as_deref() {
        query = query.traded_until(parse_bound("endTime", raw)?);
    }

    Ok(query)
}

fn parse_bound(field: &'static str, raw: &str) -> std::result::Result<NaiveDateTime, RequestError> {
    parse_trade_time(raw).ok_or_else(|| {
        warn!(field, value = raw, "malformed time bound");
        RequestError::MalformedTime {
            field,
            value: raw.to_string(),
        }
    })
}

fn log_store_failure(err: StoreError) -> StoreError {
    error!(detail = err.detail(), "order store read failed");
    err
}
