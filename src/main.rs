mod config;
mod dlq;
mod domain;
mod engine;
mod ingestion;
mod output;
mod script;

use std::env;

use crate::config::Config;
use crate::dlq::StdErrDLQ;
use crate::domain::Account;
use crate::engine::Engine;
use crate::ingestion::CsvReader;
use crate::output::StdOutOutput;
use crate::script::ScriptedOperations;

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout is reserved for outcome lines
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(env::args().skip(1))?;
    let account = Account::new(config.account_id, config.opening_balance);

    tracing::debug!(account = account.id(), balance = %account.balance(), "account opened");

    match config.script {
        Some(path) => {
            let mut engine = Engine::new(
                CsvReader::from_path(&path)?,
                StdOutOutput::default(),
                StdErrDLQ::default(),
                account,
            );
            engine.process().await?;
            log_final(engine.account());
        }
        None => {
            let mut engine = Engine::new(
                ScriptedOperations::reference(),
                StdOutOutput::default(),
                StdErrDLQ::default(),
                account,
            );
            engine.process().await?;
            log_final(engine.account());
        }
    }

    Ok(())
}

fn log_final(account: &Account) {
    tracing::debug!(
        account = account.id(),
        status = ?account.status(),
        balance = %account.balance(),
        "script finished"
    );
}
