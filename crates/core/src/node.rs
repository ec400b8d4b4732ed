use std::sync::Arc;

use alloy::{
    primitives::{Address, Bytes, TxHash},
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::TransportError,
};
use async_trait::async_trait;

use crate::{
    config::{NonceSource, Url},
    error::Error,
};

/// The node operations a run depends on. Methods return raw transport errors;
/// callers attach the operation context when they map into [`Error`].
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Transaction count for `address`, read from the block state `source`
    /// selects.
    async fn transaction_count(
        &self,
        address: Address,
        source: NonceSource,
    ) -> Result<u64, TransportError>;

    async fn chain_id(&self) -> Result<u64, TransportError>;

    /// Submits an EIP-2718 encoded signed transaction and returns the hash
    /// reported by the node.
    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxHash, TransportError>;
}

#[async_trait]
impl<T: NodeClient + ?Sized> NodeClient for Arc<T> {
    async fn transaction_count(
        &self,
        address: Address,
        source: NonceSource,
    ) -> Result<u64, TransportError> {
        (**self).transaction_count(address, source).await
    }

    async fn chain_id(&self) -> Result<u64, TransportError> {
        (**self).chain_id().await
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxHash, TransportError> {
        (**self).send_raw_transaction(raw).await
    }
}

/// JSON-RPC client over HTTP. Connecting is lazy; the first failure surfaces
/// on the first call, not here.
#[derive(Clone)]
pub struct HttpNodeClient {
    provider: DynProvider,
}

impl HttpNodeClient {
    pub fn connect(url: &Url) -> crate::Result<Self> {
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::Connection {
                    url: url.to_string(),
                    reason: format!("unsupported scheme '{other}'"),
                });
            }
        }
        let provider = DynProvider::new(ProviderBuilder::new().connect_http(url.to_owned()));
        Ok(Self { provider })
    }
}

#[async_trait]
impl NodeClient for HttpNodeClient {
    async fn transaction_count(
        &self,
        address: Address,
        source: NonceSource,
    ) -> Result<u64, TransportError> {
        let count = self.provider.get_transaction_count(address);
        match source {
            NonceSource::Pending => count.pending().await,
            NonceSource::Confirmed => count.latest().await,
        }
    }

    async fn chain_id(&self) -> Result<u64, TransportError> {
        self.provider.get_chain_id().await
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxHash, TransportError> {
        let pending = self.provider.send_raw_transaction(&raw).await?;
        Ok(*pending.tx_hash())
    }
}
