use std::pin::Pin;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Money, Operation};

pub const DEFAULT_ACCOUNT_ID: &str = "1234";

pub fn default_opening_balance() -> Money {
    Money::from_decimal(Decimal::new(10_000, 0))
}

fn whole(units: i64) -> Money {
    Money::from_decimal(Decimal::new(units, 0))
}

/// The demonstration run: exercise every transition, then poke the closed account.
pub fn reference_sequence() -> Vec<Operation> {
    vec![
        Operation::Activate,
        Operation::Suspend,
        Operation::Activate,
        Operation::Deposit { amount: whole(1000) },
        Operation::Withdraw { amount: whole(100) },
        Operation::Close,
        Operation::Activate,
        Operation::Suspend,
        Operation::Withdraw { amount: whole(500) },
        Operation::Deposit { amount: whole(1000) },
    ]
}

/// In-memory operation source.
#[derive(Debug, Default)]
pub struct ScriptedOperations {
    ops: Vec<Operation>,
}

impl ScriptedOperations {
    pub fn new(ops: Vec<Operation>) -> Self {
        Self { ops }
    }

    pub fn reference() -> Self {
        Self::new(reference_sequence())
    }
}

impl OperationStream for ScriptedOperations {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        let ops = std::mem::take(&mut self.ops);
        Box::pin(stream::iter(ops.into_iter().map(Ok::<Operation, Error>)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Account;
    use crate::domain::account::Status;

    #[test]
    fn reference_amounts() {
        assert_eq!(default_opening_balance().to_string(), "10000.00");
        let amounts: Vec<String> = reference_sequence()
            .into_iter()
            .filter_map(|op| match op {
                Operation::Deposit { amount } | Operation::Withdraw { amount } => {
                    Some(amount.to_string())
                }
                _ => None,
            })
            .collect();
        assert_eq!(amounts, ["1000.00", "100.00", "500.00", "1000.00"]);
    }

    #[test]
    fn reference_sequence_ends_closed_at_10900() {
        let mut account = Account::new(DEFAULT_ACCOUNT_ID, default_opening_balance());
        let lines: Vec<String> = reference_sequence()
            .into_iter()
            .map(|op| op.apply(&mut account).to_string())
            .collect();

        assert_eq!(
            lines,
            [
                "Account is already activated!",
                "Account is suspended!",
                "Account is activated!",
                "Account number: 1234, balance: 11000.00",
                "Account number: 1234, balance: 10900.00",
                "Account is closed!",
                "You cannot activate a closed account!",
                "You cannot suspend a closed account!",
                "You cannot withdraw on a closed account!",
                "You cannot deposit on a closed account!",
            ]
        );
        assert_eq!(account.status(), Status::Closed);
        assert_eq!(account.balance(), whole(10_900));
    }
}
