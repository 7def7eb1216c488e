//! Derived receipt model

/// Receipt fields derived from a transaction record.
///
/// Ephemeral: recomputed from the current transaction on every render,
/// never persisted. `received` is signed because upstream data can be
/// inconsistent (outputs smaller than the fee).
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub txid: String,
    /// Total input value in sats (unresolved prevouts count as 0)
    pub sent: u64,
    /// Total output value minus fee, in sats
    pub received: i64,
    /// Fee in sats
    pub fee: u64,
    /// Fee as a percentage of total input; 0.0 when there is no input value
    pub fee_percent: f64,
    pub status_text: String,
    pub sent_time_text: String,
    pub received_time_text: String,
}
