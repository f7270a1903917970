use std::path::PathBuf;

use crate::domain::{Error, Money};
use crate::script::{DEFAULT_ACCOUNT_ID, default_opening_balance};

pub const USAGE: &str = "usage: account_lifecycle [SCRIPT.csv [ID OPENING_BALANCE]]";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Operation script to replay; `None` runs the reference sequence.
    pub script: Option<PathBuf>,
    pub account_id: String,
    pub opening_balance: Money,
}

impl Config {
    /// Parses positional arguments, program name already skipped.
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        let (script, account_id, opening) = match args.as_slice() {
            [] => (None, DEFAULT_ACCOUNT_ID, None),
            [script] => (Some(script), DEFAULT_ACCOUNT_ID, None),
            [script, id, opening] => (Some(script), id.as_str(), Some(opening.as_str())),
            _ => return Err(Error::Config(USAGE.to_string())),
        };

        if account_id.trim().is_empty() {
            return Err(Error::Config("account id must not be empty".to_string()));
        }

        let opening_balance = match opening {
            Some(opening) => Money::from_decimal_str(opening).ok_or_else(|| {
                Error::Config(format!("Invalid opening balance: {}", opening))
            })?,
            None => default_opening_balance(),
        };

        Ok(Self {
            script: script.map(PathBuf::from),
            account_id: account_id.to_string(),
            opening_balance,
        })
    }
}
