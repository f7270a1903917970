pub mod account;
pub mod error;
pub mod money;
pub mod operation;
pub mod outcome;
pub mod traits;

pub use account::Account;
pub use error::Error;
pub use money::Money;
pub use operation::Operation;
pub use outcome::{Outcome, Rejection};
pub use traits::{DeadLetterQueue, OperationStream, OutputSink};
