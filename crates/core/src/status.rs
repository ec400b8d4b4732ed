use std::{collections::VecDeque, fmt};

use alloy::primitives::TxHash;

/// Progress reports emitted over the status channel, one per completed step.
///
/// The [`fmt::Display`] text of each event is the operator-facing line;
/// consumers that need structure read the fields instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    NonceResolved { nonce: u64 },
    ChainIdResolved { chain_id: u64 },
    TxSent { index: u64, nonce: u64, tx_hash: TxHash },
    Cancelled { sent: u64 },
    Completed { sent: u64 },
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonceResolved { nonce } => write!(f, "Nonce obtained: {nonce}"),
            Self::ChainIdResolved { chain_id } => write!(f, "Chain ID obtained: {chain_id}"),
            Self::TxSent { tx_hash, .. } => write!(f, "Transaction sent! TX Hash: {tx_hash}"),
            Self::Cancelled { sent } => write!(f, "Run cancelled after {sent} transactions."),
            Self::Completed { .. } => write!(f, "All transactions sent successfully!"),
        }
    }
}

pub const DEFAULT_LOG_CAPACITY: usize = 500;

/// Bounded rolling record of status lines. When full, each push evicts the
/// oldest line.
#[derive(Clone, Debug)]
pub struct StatusLog {
    capacity: usize,
    lines: VecDeque<String>,
}

impl StatusLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// The most recent `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &str> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}
