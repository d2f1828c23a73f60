use crate::domain::request::{TransIdInput, TransactionAttributes};
use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a batch file. Every column is optional; the request kind is
/// decided later from which columns are filled in.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RequestRecord {
    amount: Option<u64>,
    trans_id: Option<String>,
    trans_date: Option<String>,
    page_action: Option<String>,
    identifier: Option<String>,
}

impl From<RequestRecord> for TransactionAttributes {
    fn from(record: RequestRecord) -> Self {
        Self {
            amount: record.amount,
            // Kept as text so leading zeros survive.
            trans_id: record.trans_id.map(TransIdInput::Digits),
            trans_date: record.trans_date,
            page_action: record.page_action,
            identifier: record.identifier,
        }
    }
}

/// Reads transaction attributes from a CSV source.
///
/// Expects a header row naming any of `amount`, `trans_id`, `trans_date`,
/// `page_action` and `identifier`. Whitespace is trimmed and short rows are
/// accepted.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one set of attributes per row.
    pub fn requests(self) -> impl Iterator<Item = Result<TransactionAttributes>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map(|record: RequestRecord| record.into())
                .map_err(GatewayError::from)
        })
    }
}
