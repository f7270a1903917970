use crate::domain::{Account, Money, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Activate,
    Suspend,
    Deposit { amount: Money },
    Withdraw { amount: Money },
    Close,
}

impl Operation {
    pub fn apply(self, account: &mut Account) -> Outcome {
        match self {
            Operation::Activate => account.activate(),
            Operation::Suspend => account.suspend(),
            Operation::Deposit { amount } => account.deposit(amount),
            Operation::Withdraw { amount } => account.withdraw(amount),
            Operation::Close => account.close(),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Activate => f.write_str("activate"),
            Operation::Suspend => f.write_str("suspend"),
            Operation::Deposit { amount } => write!(f, "deposit,amount={}", amount),
            Operation::Withdraw { amount } => write!(f, "withdraw,amount={}", amount),
            Operation::Close => f.write_str("close"),
        }
    }
}
