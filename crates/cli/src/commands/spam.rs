use std::time::Duration;

use inscriber_core::config::{parse_private_key, RunConfig};

use super::common::{broadcast, ConnectionCliArgs};
use crate::error::InscriberError;

#[derive(Clone, Debug, clap::Args)]
pub struct SpamCliArgs {
    #[command(flatten)]
    pub conn: ConnectionCliArgs,

    /// Calldata payload carried by every transaction.
    #[arg(
        long,
        long_help = "UTF-8 text attached verbatim as calldata, e.g. 'data:,{\"p\":\"bsc-20\",\"op\":\"mint\",\"tick\":\"bsci\",\"amt\":\"1000\"}'"
    )]
    pub payload: String,

    /// Gas price in wei for every transaction.
    #[arg(short, long)]
    pub gas_price: u128,

    /// Number of transactions to send.
    #[arg(short = 'n', long)]
    pub count: u64,

    /// Milliseconds to wait before each send, the first included.
    #[arg(short, long)]
    pub delay_ms: u64,
}

impl SpamCliArgs {
    pub fn into_config(self) -> Result<RunConfig, InscriberError> {
        let signer = parse_private_key(&self.conn.private_key)?;
        Ok(RunConfig {
            rpc_url: self.conn.rpc_url,
            signer,
            payload: self.payload,
            gas_price: self.gas_price,
            tx_count: self.count,
            send_interval: Duration::from_millis(self.delay_ms),
            nonce_source: self.conn.nonce_source.into(),
        })
    }
}

pub async fn spam(args: SpamCliArgs) -> Result<(), InscriberError> {
    let config = args.into_config()?;
    broadcast(config).await?;
    Ok(())
}
