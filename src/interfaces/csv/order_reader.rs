use crate::domain::order::Order;
use crate::error::{LedgerError, Result};
use std::io::Read;

/// Reads ledger orders from a CSV source.
///
/// Amounts and fee rates go through the monetary validator while each row is
/// deserialized, so a row violating an invariant surfaces as an error instead
/// of reaching the store.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes orders.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}
