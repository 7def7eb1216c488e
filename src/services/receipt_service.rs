use crate::api::mempool::Transaction;
use crate::models::Receipt;
use crate::utils::{format_sats, format_timestamp};

/// Broadcast time is approximated as one minute before confirmation.
const BROADCAST_OFFSET_SECS: i64 = 60;

/// Derive the receipt fields from a transaction record.
///
/// Pure: the record is read-only and the same input always yields the same
/// receipt. Inputs whose prevout the API could not resolve contribute 0 to
/// the sent total. A `block_time` on an unconfirmed transaction is ignored,
/// both time fields stay "Pending" until `confirmed` is set.
pub fn derive_receipt(tx: &Transaction) -> Receipt {
    let total_input: u64 = tx
        .vin
        .iter()
        .filter_map(|vin| vin.prevout.as_ref())
        .map(|prevout| prevout.value)
        .sum();
    let total_output: u64 = tx.vout.iter().map(|vout| vout.value).sum();

    let received = total_output as i64 - tx.fee as i64;
    let fee_percent = if total_input > 0 {
        (tx.fee as f64 / total_input as f64) * 100.0
    } else {
        0.0
    };

    let confirmed_time = if tx.status.confirmed {
        tx.status.block_time
    } else {
        None
    };

    Receipt {
        txid: tx.txid.clone(),
        sent: total_input,
        received,
        fee: tx.fee,
        fee_percent,
        status_text: if tx.status.confirmed {
            "Confirmed".to_string()
        } else {
            "Pending".to_string()
        },
        sent_time_text: format_timestamp(confirmed_time.map(|t| t - BROADCAST_OFFSET_SECS)),
        received_time_text: format_timestamp(confirmed_time),
    }
}

/// The five receipt lines shared by the clipboard text and the PDF body.
/// Card, copy and export all render from this one derivation so the
/// surfaces can never drift apart.
pub fn receipt_lines(receipt: &Receipt) -> [String; 5] {
    [
        format!("TxID: {}", receipt.txid),
        format!("Sent: {} sats", format_sats(receipt.sent as i64)),
        format!("Received: {} sats", format_sats(receipt.received)),
        format!(
            "Fee: {} sats ({:.2}%)",
            format_sats(receipt.fee as i64),
            receipt.fee_percent
        ),
        format!("Time (confirmed): {}", receipt.received_time_text),
    ]
}

/// Multi-line receipt text for the clipboard.
pub fn build_receipt_text(receipt: &Receipt) -> String {
    receipt_lines(receipt).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mempool::models::{example_transaction, Prevout, TxInput, TxOutput, TxStatus};

    fn tx_with(fee: u64, inputs: Vec<Option<u64>>, outputs: Vec<u64>) -> Transaction {
        Transaction {
            txid: "test".to_string(),
            fee,
            status: TxStatus {
                confirmed: true,
                block_time: Some(1_730_730_344),
            },
            vin: inputs
                .into_iter()
                .map(|value| TxInput {
                    prevout: value.map(|value| Prevout {
                        value,
                        scriptpubkey_address: None,
                    }),
                })
                .collect(),
            vout: outputs
                .into_iter()
                .map(|value| TxOutput {
                    value,
                    scriptpubkey_address: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_example_scenario() {
        let tx = tx_with(482, vec![Some(269_838)], vec![269_356, 482]);
        let receipt = derive_receipt(&tx);

        // received = total output - fee = (269,356 + 482) - 482; the
        // fee-sized change output is part of the output total.
        assert_eq!(receipt.sent, 269_838);
        assert_eq!(receipt.received, 269_356);
        assert_eq!(receipt.fee, 482);
        // 482 / 269838 * 100 = 0.17864...%
        assert!((receipt.fee_percent - (482.0 / 269_838.0 * 100.0)).abs() < f64::EPSILON);
        assert!((receipt.fee_percent - 0.178_64).abs() < 1e-4);
        assert_eq!(receipt.status_text, "Confirmed");
    }

    #[test]
    fn test_fee_percent_zero_input() {
        // No resolvable input value must not divide by zero.
        let tx = tx_with(100, vec![None], vec![50]);
        let receipt = derive_receipt(&tx);
        assert_eq!(receipt.sent, 0);
        assert_eq!(receipt.fee_percent, 0.0);
        assert!(receipt.fee_percent.is_finite());
    }

    #[test]
    fn test_missing_prevouts_count_as_zero() {
        let tx = tx_with(10, vec![Some(1_000), None, Some(500)], vec![1_200]);
        let receipt = derive_receipt(&tx);
        assert_eq!(receipt.sent, 1_500);
        assert_eq!(receipt.received, 1_190);
    }

    #[test]
    fn test_received_can_go_negative() {
        // Inconsistent upstream data (fee larger than outputs) must not panic.
        let tx = tx_with(1_000, vec![Some(2_000)], vec![400]);
        let receipt = derive_receipt(&tx);
        assert_eq!(receipt.received, -600);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let tx = example_transaction();
        assert_eq!(derive_receipt(&tx), derive_receipt(&tx));
    }

    #[test]
    fn test_unconfirmed_times_pending() {
        let mut tx = tx_with(482, vec![Some(269_838)], vec![269_356, 482]);
        tx.status.confirmed = false;
        tx.status.block_time = None;
        let receipt = derive_receipt(&tx);

        assert_eq!(receipt.status_text, "Pending");
        assert_eq!(receipt.sent_time_text, "Pending");
        assert_eq!(receipt.received_time_text, "Pending");
    }

    #[test]
    fn test_block_time_ignored_while_unconfirmed() {
        // Upstream is assumed to never set block_time on an unconfirmed tx;
        // if it does anyway, the confirmed flag wins on every surface.
        let mut tx = tx_with(482, vec![Some(269_838)], vec![269_356, 482]);
        tx.status.confirmed = false;
        let receipt = derive_receipt(&tx);

        assert_eq!(receipt.sent_time_text, "Pending");
        assert_eq!(receipt.received_time_text, "Pending");
        assert!(build_receipt_text(&receipt).contains("Time (confirmed): Pending"));
    }

    #[test]
    fn test_sent_time_is_sixty_seconds_before_confirmation() {
        let tx = example_transaction();
        let receipt = derive_receipt(&tx);

        assert_eq!(receipt.received_time_text, "2024-11-04 14:25:44");
        assert_eq!(receipt.sent_time_text, "2024-11-04 14:24:44");
    }

    #[test]
    fn test_receipt_text_lines() {
        let receipt = derive_receipt(&example_transaction());
        let text = build_receipt_text(&receipt);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "TxID: bb744ff6ae4d27783c2b05c9d897e4ce026670ba326aac7230928b07724d8be6"
        );
        assert_eq!(lines[1], "Sent: 269,838 sats");
        assert_eq!(lines[2], "Received: 269,356 sats");
        assert_eq!(lines[3], "Fee: 482 sats (0.18%)");
        assert_eq!(lines[4], "Time (confirmed): 2024-11-04 14:25:44");
    }
}
