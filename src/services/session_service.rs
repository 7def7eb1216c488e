use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::api::mempool::{example_transaction, ApiError, Transaction, TxGateway};
use crate::models::Receipt;
use crate::services::clipboard_service::ClipboardSink;
use crate::services::export_service::ReceiptExporter;
use crate::services::receipt_service::{build_receipt_text, derive_receipt, receipt_lines};

/// Copy/export notifications expire after this unless superseded first.
const NOTIFICATION_TTL: Duration = Duration::from_millis(1500);

const PDF_TITLE: &str = "Bitcoin Receipts - Bitcoin Transaction Receipt";

/// Short-lived status message from a copy/export action.
struct Notification {
    message: String,
    set_at: Instant,
}

/// Tag handed out when a fetch starts. A resolution only applies while its
/// tag is still the latest issued, so overlapping fetches settle in favor
/// of the most recent submit regardless of arrival order.
struct FetchTicket {
    seq: u64,
    txid: String,
}

/// The interaction session: one displayed transaction plus the state
/// transitions triggered by user actions.
///
/// `current_tx` starts as the built-in example so there is always a
/// receipt to show. A successful fetch replaces it wholesale; a failed
/// fetch leaves it untouched and stores the error instead. Copy and
/// export read the current transaction and never touch fetch state.
pub struct ReceiptSession<G, C, E> {
    gateway: G,
    clipboard: C,
    exporter: E,
    current_tx: Transaction,
    input_text: String,
    loading: bool,
    error: Option<String>,
    notification: Option<Notification>,
    fetch_seq: u64,
}

impl<G, C, E> ReceiptSession<G, C, E>
where
    G: TxGateway,
    C: ClipboardSink,
    E: ReceiptExporter,
{
    pub fn new(gateway: G, clipboard: C, exporter: E) -> Self {
        let current_tx = example_transaction();
        let input_text = current_tx.txid.clone();
        Self {
            gateway,
            clipboard,
            exporter,
            current_tx,
            input_text,
            loading: false,
            error: None,
            notification: None,
            fetch_seq: 0,
        }
    }

    pub fn current_tx(&self) -> &Transaction {
        &self.current_tx
    }

    /// Receipt derived from the currently displayed transaction.
    pub fn receipt(&self) -> Receipt {
        derive_receipt(&self.current_tx)
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification_at(Instant::now())
    }

    fn notification_at(&self, now: Instant) -> Option<&str> {
        self.notification
            .as_ref()
            .filter(|n| now.duration_since(n.set_at) < NOTIFICATION_TTL)
            .map(|n| n.message.as_str())
    }

    fn set_notification(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            set_at: Instant::now(),
        });
    }

    /// Fetch the transaction named by the current input text.
    ///
    /// A blank input is ignored without touching any state. Otherwise the
    /// error is cleared, loading is set and the gateway is called with the
    /// trimmed identifier.
    pub async fn submit(&mut self) {
        let Some(ticket) = self.begin_submit() else {
            return;
        };
        let result = self.gateway.fetch_transaction(&ticket.txid).await;
        self.complete_fetch(ticket, result);
    }

    fn begin_submit(&mut self) -> Option<FetchTicket> {
        let trimmed = self.input_text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring submit with blank txid input");
            return None;
        }

        self.error = None;
        self.loading = true;
        self.fetch_seq += 1;
        Some(FetchTicket {
            seq: self.fetch_seq,
            txid: trimmed.to_string(),
        })
    }

    fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Transaction, ApiError>) {
        if ticket.seq != self.fetch_seq {
            debug!(
                "Discarding stale fetch result for {} (seq {} superseded by {})",
                ticket.txid, ticket.seq, self.fetch_seq
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(tx) => {
                info!("Loaded transaction {}", tx.txid);
                self.current_tx = tx;
            }
            Err(e) => {
                warn!("Fetch for {} failed: {}", ticket.txid, e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Copy the displayed transaction's id to the clipboard.
    pub fn copy_txid(&mut self) {
        let txid = self.current_tx.txid.clone();
        match self.clipboard.copy_text(&txid) {
            Ok(()) => self.set_notification("TxID copied"),
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.set_notification("Copy failed");
            }
        }
    }

    /// Copy the full receipt text to the clipboard.
    pub fn copy_receipt(&mut self) {
        let text = build_receipt_text(&self.receipt());
        match self.clipboard.copy_text(&text) {
            Ok(()) => self.set_notification("Receipt copied"),
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.set_notification("Copy failed");
            }
        }
    }

    /// Export the receipt as a one-page PDF named after the first eight
    /// characters of the txid.
    pub fn export_pdf(&mut self) {
        let receipt = self.receipt();
        let lines = receipt_lines(&receipt);
        let short_id: String = receipt.txid.chars().take(8).collect();
        let filename = format!("bitcoin-receipt-{}.pdf", short_id);

        match self.exporter.export(PDF_TITLE, &lines, &filename) {
            Ok(path) => self.set_notification(format!("Saved {}", path.display())),
            Err(e) => {
                warn!("Receipt export failed: {}", e);
                self.set_notification("Export failed");
            }
        }
    }
}
