use crate::api::mempool::Transaction;
use crate::services::receipt_service::derive_receipt;
use crate::utils::format_sats;

/// Render the receipt card as aligned key/value text.
///
/// Same field order as the clipboard/PDF surfaces, plus the timing and
/// status rows shown on screen only.
pub fn render_card(tx: &Transaction) -> String {
    let receipt = derive_receipt(tx);

    let rows = [
        ("Sent time", receipt.sent_time_text.clone()),
        ("Received time", receipt.received_time_text.clone()),
        ("Status", receipt.status_text.clone()),
        (
            "Amount sent / debited",
            format!("{} sats", format_sats(receipt.sent as i64)),
        ),
        (
            "Received",
            format!("{} sats", format_sats(receipt.received)),
        ),
        ("Fee", format!("{} sats", format_sats(receipt.fee as i64))),
        ("Fee %", format!("{:.2}%", receipt.fee_percent)),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut card = String::new();
    card.push_str("Receipt\n");
    card.push_str(&format!("  {}\n", receipt.txid));
    for (label, value) in &rows {
        card.push_str(&format!("  {:<width$}  {}\n", label, value, width = label_width));
    }
    card.push_str("  Source: mempool.space API");
    card
}
