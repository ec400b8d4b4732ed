use alloy::{
    consensus::TxEnvelope,
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Bytes, TxKind, U256},
    rpc::types::{TransactionInput, TransactionRequest},
    signers::local::PrivateKeySigner,
};

use crate::{error::Error, session::ChainSession, Result};

/// Gas limit for every transaction. Covers a plain transfer (21000) plus a
/// small calldata rider; oversized payloads are rejected by the node, not
/// trimmed here.
pub const TRANSFER_GAS_LIMIT: u64 = 22_000;

/// Builds and signs one zero-value self-transfer carrying `payload` as
/// calldata. The chain id from `session` makes the signature replay-protected
/// per EIP-155.
pub async fn build_and_sign(
    signer: &PrivateKeySigner,
    session: &ChainSession,
    nonce: u64,
    payload: &Bytes,
    gas_price: u128,
) -> Result<TxEnvelope> {
    let tx_req = TransactionRequest {
        from: Some(session.sender),
        to: Some(TxKind::Call(session.sender)),
        value: Some(U256::ZERO),
        gas: Some(TRANSFER_GAS_LIMIT),
        gas_price: Some(gas_price),
        nonce: Some(nonce),
        chain_id: Some(session.chain_id),
        input: TransactionInput::new(payload.to_owned()),
        ..Default::default()
    };
    let wallet = EthereumWallet::from(signer.to_owned());
    tx_req.build(&wallet).await.map_err(Error::Sign)
}

#[cfg(test)]
mod tests {
    use alloy::eips::eip2718::Encodable2718;

    use super::*;

    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_PAYLOAD: &[u8] = br#"data:,{"p":"bsc-20","op":"mint","tick":"bsci","amt":"1000"}"#;

    fn test_session(signer: &PrivateKeySigner) -> ChainSession {
        ChainSession {
            chain_id: 56,
            starting_nonce: 7,
            sender: signer.address(),
        }
    }

    #[tokio::test]
    async fn builds_replay_protected_self_transfer() {
        let signer: PrivateKeySigner = TEST_KEY.parse().unwrap();
        let session = test_session(&signer);
        let payload = Bytes::from_static(TEST_PAYLOAD);

        let envelope = build_and_sign(&signer, &session, 7, &payload, 6_000_000_000)
            .await
            .unwrap();

        let TxEnvelope::Legacy(signed) = envelope else {
            panic!("expected a legacy transaction");
        };
        let tx = signed.tx();
        assert_eq!(tx.chain_id, Some(56));
        assert_eq!(tx.nonce, 7);
        assert_eq!(tx.gas_price, 6_000_000_000);
        assert_eq!(tx.gas_limit, TRANSFER_GAS_LIMIT);
        assert_eq!(tx.to, TxKind::Call(session.sender));
        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.input.as_ref(), TEST_PAYLOAD);
    }

    #[tokio::test]
    async fn nonce_is_the_only_variation_between_sends() {
        let signer: PrivateKeySigner = TEST_KEY.parse().unwrap();
        let session = test_session(&signer);
        let payload = Bytes::from_static(TEST_PAYLOAD);

        let first = build_and_sign(&signer, &session, 7, &payload, 6_000_000_000)
            .await
            .unwrap();
        let second = build_and_sign(&signer, &session, 8, &payload, 6_000_000_000)
            .await
            .unwrap();
        assert_ne!(first.encoded_2718(), second.encoded_2718());

        let (TxEnvelope::Legacy(first), TxEnvelope::Legacy(second)) = (first, second) else {
            panic!("expected legacy transactions");
        };
        assert_ne!(first.hash(), second.hash());

        let (first, second) = (first.tx(), second.tx());
        assert_eq!(first.nonce + 1, second.nonce);
        assert_eq!(first.input, second.input);
        assert_eq!(first.gas_price, second.gas_price);
        assert_eq!(first.to, second.to);
    }
}
