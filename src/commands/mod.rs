pub mod receipt;

use crate::api::mempool::TxGateway;
use crate::services::clipboard_service::ClipboardSink;
use crate::services::export_service::ReceiptExporter;
use crate::services::ReceiptSession;

/// Whether the command loop should keep reading input.
pub enum CommandOutcome {
    Continue,
    Quit,
}

/// Parse one input line and run it against the session.
///
/// A bare token that is not a known command is treated as a txid, so
/// pasting an id straight into the prompt works without typing `fetch`.
pub async fn handle_line<G, C, E>(
    session: &mut ReceiptSession<G, C, E>,
    line: &str,
) -> CommandOutcome
where
    G: TxGateway,
    C: ClipboardSink,
    E: ReceiptExporter,
{
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return CommandOutcome::Continue;
    }

    match parts[0] {
        "quit" | "exit" => return CommandOutcome::Quit,
        "help" => print_help(),
        "show" => println!("{}", receipt::render_card(session.current_tx())),
        "copy" => {
            session.copy_txid();
            print_notification(session);
        }
        "receipt" | "copy-receipt" => {
            session.copy_receipt();
            print_notification(session);
        }
        "export" | "pdf" => {
            session.export_pdf();
            print_notification(session);
        }
        "fetch" => {
            let txid = parts[1..].join(" ");
            fetch(session, &txid).await;
        }
        _ => {
            // Not a command: treat the whole line as a txid.
            fetch(session, line).await;
        }
    }

    CommandOutcome::Continue
}

async fn fetch<G, C, E>(session: &mut ReceiptSession<G, C, E>, txid: &str)
where
    G: TxGateway,
    C: ClipboardSink,
    E: ReceiptExporter,
{
    if txid.trim().is_empty() {
        println!("Usage: fetch <txid>");
        return;
    }

    session.set_input(txid);
    println!("Loading...");
    session.submit().await;

    match session.error() {
        // Last-good receipt stays on screen; the error prints inline.
        Some(err) => println!("{} (check txid or try again)", err),
        None => println!("{}", receipt::render_card(session.current_tx())),
    }
}

fn print_notification<G, C, E>(session: &ReceiptSession<G, C, E>)
where
    G: TxGateway,
    C: ClipboardSink,
    E: ReceiptExporter,
{
    if let Some(message) = session.notification() {
        println!("{}", message);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  fetch <txid>   Load a transaction and show its receipt");
    println!("  <txid>         Same as fetch");
    println!("  show           Re-print the current receipt");
    println!("  copy           Copy the TxID to the clipboard");
    println!("  receipt        Copy the full receipt text to the clipboard");
    println!("  export         Save the receipt as a PDF");
    println!("  quit           Exit");
}
