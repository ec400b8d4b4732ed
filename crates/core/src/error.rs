use alloy::{
    network::{Ethereum, TransactionBuilderError},
    primitives::Address,
    signers::local::LocalSignerError,
    transports::TransportError,
};
use thiserror::Error;

/// Run-ending failures. Every variant aborts the run that raised it; nothing
/// in this crate retries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid private key")]
    KeyFormat(#[from] LocalSignerError),

    #[error("cannot reach node at '{url}': {reason}")]
    Connection { url: String, reason: String },

    #[error("failed to fetch nonce for {address}")]
    NonceQuery {
        address: Address,
        #[source]
        source: TransportError,
    },

    #[error("failed to fetch chain id")]
    ChainIdQuery(#[source] TransportError),

    #[error("failed to sign transaction")]
    Sign(#[from] TransactionBuilderError<Ethereum>),

    #[error("failed to send transaction with nonce {nonce}")]
    Submission {
        nonce: u64,
        #[source]
        source: TransportError,
    },
}
