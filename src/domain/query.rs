use crate::domain::order::{Order, OrderStatus, OrderType};
use crate::domain::pagination::Pagination;
use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// One narrowing clause of an [`OrderQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Type(OrderType),
    Status(OrderStatus),
    /// Inclusive lower bound on `trade_time`.
    TradedFrom(NaiveDateTime),
    /// Inclusive upper bound on `trade_time`.
    TradedUntil(NaiveDateTime),
}

impl Condition {
    fn matches(&self, order: &Order) -> bool {
        match self {
            Condition::Type(t) => order.r#type == *t,
            Condition::Status(s) => order.status == *s,
            Condition::TradedFrom(start) => order.trade_time >= *start,
            Condition::TradedUntil(end) => order.trade_time <= *end,
        }
    }
}

/// Predicate over orders, scoped to a single ledger party.
///
/// The party clause (`payer == party OR payee == party`) is fixed at
/// construction and cannot be removed; every other clause is ANDed onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    party: String,
    conditions: Vec<Condition>,
}

impl OrderQuery {
    pub fn for_party(username: impl Into<String>) -> Self {
        Self {
            party: username.into(),
            conditions: Vec::new(),
        }
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_type(self, order_type: OrderType) -> Self {
        self.and(Condition::Type(order_type))
    }

    pub fn with_status(self, status: OrderStatus) -> Self {
        self.and(Condition::Status(status))
    }

    pub fn traded_from(self, start: NaiveDateTime) -> Self {
        self.and(Condition::TradedFrom(start))
    }

    pub fn traded_until(self, end: NaiveDateTime) -> Self {
        self.and(Condition::TradedUntil(end))
    }

    pub fn party(&self) -> &str {
        &self.party
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn matches(&self, order: &Order) -> bool {
        order.involves(&self.party) && self.conditions.iter().all(|c| c.matches(order))
    }
}

/// Listing order: most recent `trade_time` first, ties broken by id descending.
pub fn newest_first(a: &Order, b: &Order) -> Ordering {
    b.trade_time.cmp(&a.trade_time).then_with(|| b.id.cmp(&a.id))
}

/// Filters, sorts and slices `orders` the way every store answers a page read.
pub fn select_page<I>(orders: I, query: &OrderQuery, pagination: &Pagination) -> Vec<Order>
where
    I: IntoIterator<Item = Order>,
{
    let mut matched: Vec<Order> = orders.into_iter().filter(|o| query.matches(o)).collect();
    matched.sort_by(newest_first);
    let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
    matched
        .into_iter()
        .skip(offset)
        .take(pagination.limit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::parse_trade_time;
    use rust_decimal_macros::dec;

    fn order(id: u64, payer: &str, payee: &str, time: &str) -> Order {
        Order {
            id,
            order_name: String::new(),
            r#type: OrderType::Payment,
            status: OrderStatus::Success,
            payer_username: payer.into(),
            payee_username: payee.into(),
            amount: dec!(1.00).try_into().unwrap(),
            fee_rate: Default::default(),
            remark: String::new(),
            trade_time: parse_trade_time(time).unwrap(),
        }
    }

    #[test]
    fn test_party_clause_is_always_applied() {
        let q = OrderQuery::for_party("alice");
        assert!(q.matches(&order(1, "alice", "bob", "2025-01-01 00:00:00")));
        assert!(q.matches(&order(2, "bob", "alice", "2025-01-01 00:00:00")));
        assert!(!q.matches(&order(3, "bob", "carol", "2025-01-01 00:00:00")));
    }

    #[test]
    fn test_conditions_are_anded() {
        let q = OrderQuery::for_party("alice")
            .with_type(OrderType::Payment)
            .with_status(OrderStatus::Refund);
        let mut o = order(1, "alice", "bob", "2025-01-01 00:00:00");
        assert!(!q.matches(&o));
        o.status = OrderStatus::Refund;
        assert!(q.matches(&o));
        o.r#type = OrderType::Transfer;
        assert!(!q.matches(&o));
        assert_eq!(q.conditions().len(), 2);
    }

    #[test]
    fn test_time_bounds_are_inclusive() {
        let start = parse_trade_time("2025-01-01 00:00:00").unwrap();
        let end = parse_trade_time("2025-01-31 23:59:59").unwrap();
        let q = OrderQuery::for_party("alice").traded_from(start).traded_until(end);

        assert!(q.matches(&order(1, "alice", "b", "2025-01-01 00:00:00")));
        assert!(q.matches(&order(2, "alice", "b", "2025-01-31 23:59:59")));
        assert!(!q.matches(&order(3, "alice", "b", "2024-12-31 23:59:59")));
        assert!(!q.matches(&order(4, "alice", "b", "2025-02-01 00:00:00")));
    }

    #[test]
    fn test_select_page_orders_newest_first_with_id_tiebreak() {
        let orders = vec![
            order(1, "alice", "b", "2025-01-01 00:00:00"),
            order(2, "alice", "b", "2025-01-03 00:00:00"),
            order(3, "alice", "b", "2025-01-03 00:00:00"),
            order(4, "x", "y", "2025-01-05 00:00:00"),
        ];
        let q = OrderQuery::for_party("alice");
        let page = select_page(orders, &q, &Pagination::default());
        let ids: Vec<_> = page.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_select_page_beyond_end_is_empty() {
        let orders = vec![order(1, "alice", "b", "2025-01-01 00:00:00")];
        let q = OrderQuery::for_party("alice");
        let page = select_page(orders, &q, &Pagination::normalize(Some(5), Some(10)));
        assert!(page.is_empty());
    }
}
