//! RollCall assistant — interactive directory chat over stdin.
//!
//! Wires the resolver to the in-memory sample department so the reply
//! surface can be exercised without either portal running.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use rc_assistant::{AssistantConfig, ChatSession};
use rc_attendance::{InMemoryLedger, LedgerStatsProvider};
use rc_roster::InMemoryRoster;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rc-assistant starting");

    let config = AssistantConfig::from_env();
    let roster = Arc::new(InMemoryRoster::with_sample_data());
    let ledger = Arc::new(InMemoryLedger::with_sample_sessions());
    let provider = LedgerStatsProvider::new(ledger, roster.clone(), roster.clone());

    let mut session = ChatSession::new(config, roster.clone(), roster.clone(), roster)
        .with_stats(Arc::new(provider));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout.write_all(b"> ").await?;
    stdout.flush().await?;
    while let Some(line) = lines.next_line().await? {
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        let reply = session.submit(line).await;
        stdout.write_all(reply.message.as_bytes()).await?;
        stdout.write_all(b"\n\n> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
