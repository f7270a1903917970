use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Money, Operation};

/// Reads an operation script with the header `type, amount`.
pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

impl CsvReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    amount: Option<Money>,
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let op = match (row.kind.trim().to_ascii_lowercase().as_str(), row.amount) {
            ("activate", None) => Operation::Activate,
            ("suspend", None) => Operation::Suspend,
            ("close", None) => Operation::Close,
            ("deposit", Some(amount)) => Operation::Deposit { amount },
            ("withdraw", Some(amount)) => Operation::Withdraw { amount },
            ("deposit" | "withdraw", None) => {
                return Err(Error::Ingestion(format!("{} requires an amount", row.kind)));
            }
            ("activate" | "suspend" | "close", Some(_)) => {
                return Err(Error::Ingestion(format!("{} takes no amount", row.kind)));
            }
            (other, _) => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(op)
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Take ownership of the reader so the iterator owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => return Box::pin(stream::empty::<Result<Operation, Error>>()),
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::*;

    async fn read_all(input: &'static str) -> Vec<Result<Operation, Error>> {
        let mut reader = CsvReader::new(input.as_bytes());
        reader.stream().collect().await
    }

    fn money(s: &str) -> Money {
        Money::from_decimal_str(s).unwrap()
    }

    #[tokio::test]
    async fn parses_every_operation() {
        let ops = read_all(
            "type, amount\n\
             activate,\n\
             Suspend,\n\
             deposit, 1000.0\n\
             WITHDRAW, 100.5\n\
             close,\n",
        )
        .await;

        let ops: Vec<Operation> = ops.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(
            ops,
            vec![
                Operation::Activate,
                Operation::Suspend,
                Operation::Deposit { amount: money("1000") },
                Operation::Withdraw { amount: money("100.50") },
                Operation::Close,
            ]
        );
    }

    #[tokio::test]
    async fn short_rows_without_amount_are_accepted() {
        let ops = read_all("type, amount\nactivate\nclose\n").await;
        assert!(matches!(ops[0], Ok(Operation::Activate)));
        assert!(matches!(ops[1], Ok(Operation::Close)));
    }

    #[tokio::test]
    async fn bad_rows_fail_individually() {
        let ops = read_all(
            "type, amount\n\
             deposit,\n\
             close, 5\n\
             transfer, 10\n\
             withdraw, lots\n\
             suspend,\n",
        )
        .await;

        assert_eq!(ops.len(), 5);
        assert!(ops[..4].iter().all(|r| matches!(r, Err(Error::Ingestion(_)))));
        assert!(matches!(ops[4], Ok(Operation::Suspend)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let res = CsvReader::from_path("/definitely/not/here.csv");
        assert!(matches!(res, Err(Error::IO(_))));
    }

    #[tokio::test]
    async fn second_stream_is_empty() {
        let mut reader = CsvReader::new("type, amount\nclose,\n".as_bytes());
        assert_eq!(reader.stream().count().await, 1);
        assert_eq!(reader.stream().count().await, 0);
    }
}
