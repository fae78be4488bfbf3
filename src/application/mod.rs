//! Application layer orchestrating the ledger use cases.
//!
//! [`transactions::TransactionQueryEngine`] serves transaction history and
//! [`pay_config::PayConfigService`] administers payer tiers. Both talk to
//! storage only through the async ports in [`crate::domain::ports`].

pub mod pay_config;
pub mod transactions;
