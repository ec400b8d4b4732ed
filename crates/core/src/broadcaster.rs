use alloy::eips::eip2718::Encodable2718;
use tokio::{sync::mpsc, time};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    config::RunConfig,
    error::Error,
    node::NodeClient,
    session::ChainSession,
    status::StatusEvent,
    tx, Result,
};

/// Drives one run end to end: a single session resolution, then `tx_count`
/// sequential sends with a locally advancing nonce. The first submission
/// failure aborts the run; transactions already accepted stay accepted.
pub struct Broadcaster<N: NodeClient> {
    node: N,
    config: RunConfig,
    events: mpsc::Sender<StatusEvent>,
    cancel_token: CancellationToken,
}

/// What a finished run did. Returned for both completed and cancelled runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub chain_id: u64,
    pub starting_nonce: u64,
    pub requested: u64,
    pub sent: u64,
}

impl RunSummary {
    pub fn completed(&self) -> bool {
        self.sent == self.requested
    }
}

impl<N: NodeClient> Broadcaster<N> {
    pub fn new(node: N, config: RunConfig, events: mpsc::Sender<StatusEvent>) -> Self {
        Self {
            node,
            config,
            events,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Token checked once per iteration, before the pre-send delay. A
    /// transaction that was already broadcast cannot be recalled, so
    /// cancellation only stops future sends.
    pub fn with_cancel_token(mut self, cancel_token: CancellationToken) -> Self {
        self.cancel_token = cancel_token;
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let session = ChainSession::resolve(
            &self.node,
            &self.config.signer,
            self.config.nonce_source,
            &self.events,
        )
        .await?;

        let payload = self.config.payload_bytes();
        let mut nonce = session.starting_nonce;
        let mut sent = 0u64;

        for index in 0..self.config.tx_count {
            // The delay runs before every send, the first included, and
            // doubles as the cancellation checkpoint.
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    debug!(sent, "run cancelled");
                    let _ = self.events.send(StatusEvent::Cancelled { sent }).await;
                    return Ok(self.summary(&session, sent));
                }
                _ = time::sleep(self.config.send_interval) => {}
            }

            let envelope = tx::build_and_sign(
                &self.config.signer,
                &session,
                nonce,
                &payload,
                self.config.gas_price,
            )
            .await?;

            let tx_hash = self
                .node
                .send_raw_transaction(envelope.encoded_2718().into())
                .await
                .map_err(|e| Error::Submission { nonce, source: e })?;
            debug!(index, nonce, %tx_hash, "transaction accepted");

            let _ = self
                .events
                .send(StatusEvent::TxSent {
                    index,
                    nonce,
                    tx_hash,
                })
                .await;

            // The node is never re-queried mid-run; the local increment is
            // the only thing keeping the sequence gapless.
            nonce += 1;
            sent += 1;
        }

        let _ = self.events.send(StatusEvent::Completed { sent }).await;
        Ok(self.summary(&session, sent))
    }

    fn summary(&self, session: &ChainSession, sent: u64) -> RunSummary {
        RunSummary {
            chain_id: session.chain_id,
            starting_nonce: session.starting_nonce,
            requested: self.config.tx_count,
            sent,
        }
    }
}
