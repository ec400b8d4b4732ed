use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use tokio::sync::mpsc;
use tracing::debug;

use crate::{
    config::NonceSource, error::Error, node::NodeClient, status::StatusEvent, Result,
};

/// Chain-scoped inputs resolved once per run: the nonce and chain id are
/// fetched exactly one time and never re-queried, so the values are only
/// valid while this process is the account's sole sender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainSession {
    pub chain_id: u64,
    pub starting_nonce: u64,
    pub sender: Address,
}

impl ChainSession {
    /// Derives the sender address and queries the node for its transaction
    /// count and chain id, emitting a status event after each answer. Either
    /// query failing aborts the resolution.
    pub async fn resolve<N: NodeClient + ?Sized>(
        node: &N,
        signer: &PrivateKeySigner,
        nonce_source: NonceSource,
        events: &mpsc::Sender<StatusEvent>,
    ) -> Result<Self> {
        let sender = signer.address();

        let starting_nonce = node
            .transaction_count(sender, nonce_source)
            .await
            .map_err(|e| Error::NonceQuery {
                address: sender,
                source: e,
            })?;
        let _ = events
            .send(StatusEvent::NonceResolved {
                nonce: starting_nonce,
            })
            .await;

        let chain_id = node.chain_id().await.map_err(Error::ChainIdQuery)?;
        let _ = events.send(StatusEvent::ChainIdResolved { chain_id }).await;

        debug!(%sender, starting_nonce, chain_id, "chain session resolved");
        Ok(Self {
            chain_id,
            starting_nonce,
            sender,
        })
    }
}
