use crate::domain::{Money, Outcome, Rejection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Suspended,
    Closed, // terminal
}

#[derive(Debug, Clone)]
pub struct Account {
    id: String,
    balance: Money,
    status: Status,
}

impl Account {
    pub fn new(id: impl Into<String>, opening_balance: Money) -> Self {
        Self {
            id: id.into(),
            balance: opening_balance,
            status: Status::Active,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn activate(&mut self) -> Outcome {
        match self.status {
            Status::Active => Outcome::AlreadyActivated,
            Status::Suspended => {
                self.status = Status::Active;
                Outcome::Activated
            }
            Status::Closed => Outcome::Rejected(Rejection::ActivateClosed),
        }
    }

    pub fn suspend(&mut self) -> Outcome {
        match self.status {
            Status::Active => {
                self.status = Status::Suspended;
                Outcome::Suspended
            }
            Status::Suspended => Outcome::AlreadySuspended,
            Status::Closed => Outcome::Rejected(Rejection::SuspendClosed),
        }
    }

    pub fn deposit(&mut self, amount: Money) -> Outcome {
        match self.status {
            Status::Active => match self.balance.checked_add(amount) {
                Some(balance) => {
                    self.balance = balance;
                    self.summary()
                }
                None => Outcome::Rejected(Rejection::DepositOverflow),
            },
            Status::Suspended => Outcome::Rejected(Rejection::DepositSuspended),
            Status::Closed => Outcome::Rejected(Rejection::DepositClosed),
        }
    }

    /// No overdraft check: the balance may go negative.
    pub fn withdraw(&mut self, amount: Money) -> Outcome {
        match self.status {
            Status::Active => match self.balance.checked_sub(amount) {
                Some(balance) => {
                    self.balance = balance;
                    self.summary()
                }
                None => Outcome::Rejected(Rejection::WithdrawOverflow),
            },
            Status::Suspended => Outcome::Rejected(Rejection::WithdrawSuspended),
            Status::Closed => Outcome::Rejected(Rejection::WithdrawClosed),
        }
    }

    pub fn close(&mut self) -> Outcome {
        match self.status {
            Status::Closed => Outcome::AlreadyClosed,
            Status::Active | Status::Suspended => {
                self.status = Status::Closed;
                Outcome::Closed
            }
        }
    }

    fn summary(&self) -> Outcome {
        Outcome::Balance {
            id: self.id.clone(),
            balance: self.balance,
        }
    }
}
