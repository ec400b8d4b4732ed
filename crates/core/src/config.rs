use std::{str::FromStr, time::Duration};

use alloy::{primitives::Bytes, signers::local::PrivateKeySigner};
use serde::{Deserialize, Serialize};

use crate::{error::Error, Result};

pub use alloy::transports::http::reqwest::Url;

/// Where the starting nonce comes from.
///
/// `Pending` counts transactions the node has accepted but not yet mined, so
/// back-to-back runs against the same account stack cleanly. `Confirmed` only
/// counts mined transactions and will collide with anything still in the pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonceSource {
    #[default]
    Pending,
    Confirmed,
}

/// Everything a single run needs, resolved before any network activity.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// JSON-RPC endpoint of the target node.
    pub rpc_url: Url,
    /// Signs every transaction; its address is both sender and recipient.
    pub signer: PrivateKeySigner,
    /// UTF-8 text carried verbatim as calldata by every transaction.
    pub payload: String,
    /// Gas price in wei, fixed for the whole run.
    pub gas_price: u128,
    /// How many transactions to send.
    pub tx_count: u64,
    /// Pause before each send, including the first.
    pub send_interval: Duration,
    pub nonce_source: NonceSource,
}

impl RunConfig {
    pub fn payload_bytes(&self) -> Bytes {
        Bytes::from(self.payload.clone().into_bytes())
    }
}

/// Parses a hex private key, with or without a `0x` prefix. Surrounding
/// whitespace is tolerated so keys read from files or env vars don't need
/// pre-cleaning.
pub fn parse_private_key(raw: &str) -> Result<PrivateKeySigner> {
    PrivateKeySigner::from_str(raw.trim()).map_err(Error::KeyFormat)
}
