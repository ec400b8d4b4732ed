//! Type definitions for CLI arguments shared across commands, and the
//! broadcast loop the send-type commands run.

use inscriber_core::{
    broadcaster::{Broadcaster, RunSummary},
    config::{NonceSource, RunConfig, Url},
    node::HttpNodeClient,
    status::StatusLog,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::InscriberError;
use crate::util::bold;

#[derive(Clone, Debug, clap::Args)]
pub struct ConnectionCliArgs {
    /// RPC URL to send requests.
    #[arg(
        env = "RPC_URL",
        short,
        long,
        long_help = "RPC URL of the target node. Only `eth_` namespace methods are used.",
        default_value = "http://localhost:8545"
    )]
    pub rpc_url: Url,

    /// Private key used to sign every transaction.
    #[arg(
        env = "INSCRIBER_PRIVATE_KEY",
        short,
        long = "priv-key",
        long_help = "Hex-encoded private key. Its derived address is used as both sender and recipient."
    )]
    pub private_key: String,

    /// Block state the starting nonce is read from.
    #[arg(
        long,
        long_help = "Read the starting nonce from the pending block state (counts queued txs) or from the latest mined block only.",
        value_enum,
        default_value_t = NonceSourceCli::Pending
    )]
    pub nonce_source: NonceSourceCli,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum NonceSourceCli {
    #[default]
    Pending,
    Confirmed,
}

impl From<NonceSourceCli> for NonceSource {
    fn from(value: NonceSourceCli) -> Self {
        match value {
            NonceSourceCli::Pending => NonceSource::Pending,
            NonceSourceCli::Confirmed => NonceSource::Confirmed,
        }
    }
}

/// Status lines replayed under the error report when a run aborts.
const ERROR_RECAP_LINES: usize = 5;

/// Runs one broadcast to completion, rendering status events as they arrive.
/// CTRL-C stops the run before its next send; whatever was already sent stays
/// out.
pub async fn broadcast(config: RunConfig) -> Result<RunSummary, InscriberError> {
    info!("connecting to {}", config.rpc_url);
    let node = HttpNodeClient::connect(&config.rpc_url)?;
    let (events, mut rx) = mpsc::channel(32);

    let cancel_token = CancellationToken::new();
    let ctrlc_token = cancel_token.clone();
    tokio::task::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("CTRL-C received, stopping before the next send...");
            ctrlc_token.cancel();
        }
    });

    let broadcaster = Broadcaster::new(node, config, events).with_cancel_token(cancel_token);
    let worker = tokio::task::spawn(async move { broadcaster.run().await });

    // The worker owns the run; this side only renders its status lines.
    let mut log = StatusLog::default();
    while let Some(event) = rx.recv().await {
        info!("{event}");
        log.push(event.to_string());
    }

    match worker.await? {
        Ok(summary) => {
            info!(
                "{}",
                bold(format!(
                    "sent {}/{} transactions from nonce {} on chain {}",
                    summary.sent, summary.requested, summary.starting_nonce, summary.chain_id
                ))
            );
            Ok(summary)
        }
        Err(e) => {
            log.push(format!("Error: {e}"));
            info!("{}", bold("run aborted, last status lines:"));
            for line in log.tail(ERROR_RECAP_LINES) {
                info!("  {line}");
            }
            Err(e.into())
        }
    }
}
