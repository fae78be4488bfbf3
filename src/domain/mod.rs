//! Ledger domain: monetary invariants, orders, status vocabulary, paging and
//! the predicates used to list a party's transactions.

pub mod money;
pub mod order;
pub mod pagination;
pub mod pay_config;
pub mod ports;
pub mod query;
pub mod status;
