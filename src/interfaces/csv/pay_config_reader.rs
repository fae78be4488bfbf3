use crate::domain::pay_config::UserPayConfig;
use crate::error::{LedgerError, Result};
use std::io::Read;

/// Reads payer tier policies from a CSV source with the columns
/// `level,min_score,max_score,daily_limit,fee_rate`. Empty bounds mean
/// unbounded.
pub struct PayConfigReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PayConfigReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator of validated configs.
    pub fn configs(self) -> impl Iterator<Item = Result<UserPayConfig>> {
        self.reader.into_deserialize().map(|result| {
            let config: UserPayConfig = result.map_err(LedgerError::from)?;
            config.validate()?;
            Ok(config)
        })
    }
}
