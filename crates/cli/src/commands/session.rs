use inscriber_core::{config::parse_private_key, node::HttpNodeClient, session::ChainSession};
use tokio::sync::mpsc;
use tracing::info;

use super::common::ConnectionCliArgs;
use crate::{error::InscriberError, util::bold};

/// Resolves the chain session and prints it without sending anything. Lets
/// operators sanity-check the endpoint and key before a real run.
pub async fn session(args: ConnectionCliArgs) -> Result<(), InscriberError> {
    let signer = parse_private_key(&args.private_key)?;
    info!("connecting to {}", args.rpc_url);
    let node = HttpNodeClient::connect(&args.rpc_url)?;
    let (events, mut rx) = mpsc::channel(8);

    let resolved =
        ChainSession::resolve(&node, &signer, args.nonce_source.into(), &events).await;
    drop(events);
    while let Some(event) = rx.recv().await {
        info!("{event}");
    }

    let session = resolved?;
    info!(
        "{}",
        bold(format!(
            "sender {} is at nonce {} on chain {}",
            session.sender, session.starting_nonce, session.chain_id
        ))
    );
    Ok(())
}
