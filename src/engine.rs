use crate::domain::{
    Account, Error, Operation,
    traits::{DeadLetterQueue, OperationStream, OutputSink},
};

use futures::StreamExt;

#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: OperationStream,
    O: OutputSink,
    D: DeadLetterQueue,
{
    ingestion: I,
    output: O,
    dlq: D,
    account: Account,
}

impl<I, O, D> Engine<I, O, D>
where
    I: OperationStream,
    O: OutputSink,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output: O, dlq: D, account: Account) -> Self {
        Self {
            ingestion,
            output,
            dlq,
            account,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => self.apply_operation(op),
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) {
        let outcome = op.apply(&mut self.account);

        if outcome.is_applied() {
            tracing::debug!(
                account = self.account.id(),
                operation = %op,
                status = ?self.account.status(),
                balance = %self.account.balance(),
                "operation applied"
            );
        } else {
            tracing::info!(
                account = self.account.id(),
                operation = %op,
                status = ?self.account.status(),
                "operation not applied: {}",
                outcome
            );
        }

        self.output.report(&outcome);
    }

    pub fn account(&self) -> &Account {
        &self.account
    }
}
