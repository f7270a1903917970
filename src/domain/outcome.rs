use crate::domain::Money;

/// A status guard refused the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ActivateClosed,
    SuspendClosed,
    DepositSuspended,
    DepositClosed,
    DepositOverflow,
    WithdrawSuspended,
    WithdrawClosed,
    WithdrawOverflow,
}

/// Result of one call on an [`Account`](crate::domain::Account).
///
/// Every call yields exactly one outcome and its `Display` is the line shown
/// to the user. Guard rejections are ordinary outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Activated,
    AlreadyActivated,
    Suspended,
    AlreadySuspended,
    Closed,
    AlreadyClosed,
    Balance { id: String, balance: Money },
    Rejected(Rejection),
}

impl Outcome {
    /// Whether the call changed the account's status or balance.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            Outcome::Activated | Outcome::Suspended | Outcome::Closed | Outcome::Balance { .. }
        )
    }
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Rejection::ActivateClosed => "You cannot activate a closed account!",
            Rejection::SuspendClosed => "You cannot suspend a closed account!",
            Rejection::DepositSuspended => "You cannot deposit on a suspended account!",
            Rejection::DepositClosed => "You cannot deposit on a closed account!",
            Rejection::WithdrawSuspended => "You cannot withdraw on a suspended account!",
            Rejection::WithdrawClosed => "You cannot withdraw on a closed account!",
            Rejection::DepositOverflow => {
                "You cannot deposit that amount: the balance would overflow!"
            }
            Rejection::WithdrawOverflow => {
                "You cannot withdraw that amount: the balance would overflow!"
            }
        };
        f.write_str(msg)
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Activated => f.write_str("Account is activated!"),
            Outcome::AlreadyActivated => f.write_str("Account is already activated!"),
            Outcome::Suspended => f.write_str("Account is suspended!"),
            Outcome::AlreadySuspended => f.write_str("Account is already suspended!"),
            Outcome::Closed | Outcome::AlreadyClosed => f.write_str("Account is closed!"),
            Outcome::Balance { id, balance } => {
                write!(f, "Account number: {}, balance: {}", id, balance)
            }
            Outcome::Rejected(rejection) => core::fmt::Display::fmt(rejection, f),
        }
    }
}
