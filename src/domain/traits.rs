use futures::Stream;

use crate::domain::{Error, Operation, Outcome};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

/// Where outcome lines go once an operation has been applied.
pub trait OutputSink {
    fn report(&mut self, outcome: &Outcome);
}
