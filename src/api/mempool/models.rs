//! Transaction models for the mempool.space Esplora API

use serde::{Deserialize, Serialize};

/// Confirmation status block of a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxStatus {
    pub confirmed: bool,
    /// Unix seconds of the confirming block; absent while unconfirmed.
    #[serde(default)]
    pub block_time: Option<i64>,
}

/// The previous output consumed by an input. The API may be unable to
/// resolve it, in which case the whole object is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prevout {
    /// Value in sats
    pub value: u64,
    #[serde(default)]
    pub scriptpubkey_address: Option<String>,
}

/// A transaction input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxInput {
    #[serde(default)]
    pub prevout: Option<Prevout>,
}

/// A transaction output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxOutput {
    /// Value in sats
    pub value: u64,
    #[serde(default)]
    pub scriptpubkey_address: Option<String>,
}

/// Response from GET /tx/{txid}
///
/// Only the fields the receipt needs are modeled; unknown fields in the
/// response body are ignored. The record is trusted as-is from upstream,
/// no validation is applied after deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub txid: String,
    /// Fee in sats
    pub fee: u64,
    pub status: TxStatus,
    pub vin: Vec<TxInput>,
    pub vout: Vec<TxOutput>,
}

/// Built-in example transaction shown before the first fetch so the
/// display is never empty.
pub fn example_transaction() -> Transaction {
    Transaction {
        txid: "bb744ff6ae4d27783c2b05c9d897e4ce026670ba326aac7230928b07724d8be6".to_string(),
        fee: 482,
        status: TxStatus {
            confirmed: true,
            block_time: Some(1_730_730_344),
        },
        vin: vec![TxInput {
            prevout: Some(Prevout {
                value: 269_838,
                scriptpubkey_address: Some("bc1qexamplefrom".to_string()),
            }),
        }],
        vout: vec![
            TxOutput {
                value: 269_356,
                scriptpubkey_address: Some("bc1qexampleto1".to_string()),
            },
            TxOutput {
                value: 482,
                scriptpubkey_address: Some("bc1qexamplefee".to_string()),
            },
        ],
    }
}
