use std::{fs::read, time::Duration};

use inscriber_core::config::{parse_private_key, NonceSource, RunConfig, Url};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A broadcast job read from disk. Defines the TOML schema for job files.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct JobFile {
    /// JSON-RPC endpoint of the target node.
    pub rpc_url: String,

    /// Hex-encoded private key; signs every transaction and its derived
    /// address is both sender and recipient.
    pub private_key: String,

    /// UTF-8 text attached verbatim as calldata to every transaction.
    pub payload: String,

    /// Gas price in wei. TOML integers cap at `i64::MAX`, far above any
    /// plausible gas price.
    pub gas_price: u64,

    /// Number of transactions to send.
    pub count: u64,

    /// Milliseconds to wait before each send.
    pub delay_ms: u64,

    /// Block state the starting nonce is read from.
    #[serde(default)]
    pub nonce_source: NonceSource,
}

impl JobFile {
    pub fn from_file(file_path: &str) -> Result<JobFile, Error> {
        let file_contents_str = String::from_utf8_lossy(&read(file_path)?).to_string();
        let job_file: JobFile = toml::from_str(&file_contents_str)?;
        Ok(job_file)
    }

    pub fn encode_toml(&self) -> Result<String, Error> {
        let encoded = toml::to_string(self)?;
        Ok(encoded)
    }

    pub fn save_toml(&self, file_path: &str) -> Result<(), Error> {
        let encoded = self.encode_toml()?;
        std::fs::write(file_path, encoded)?;
        Ok(())
    }

    /// Converts the job into run inputs, parsing the endpoint and credential.
    /// Fails before any network activity.
    pub fn into_config(self) -> Result<RunConfig, Error> {
        let rpc_url: Url = self
            .rpc_url
            .parse()
            .map_err(|_| Error::InvalidRpcUrl(self.rpc_url.to_owned()))?;
        let signer = parse_private_key(&self.private_key).map_err(Error::Core)?;
        Ok(RunConfig {
            rpc_url,
            signer,
            payload: self.payload,
            gas_price: self.gas_price.into(),
            tx_count: self.count,
            send_interval: Duration::from_millis(self.delay_ms),
            nonce_source: self.nonce_source,
        })
    }
}
