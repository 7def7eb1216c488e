use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod utils;

use api::mempool::MempoolClient;
use commands::CommandOutcome;
use services::{PdfExporter, ReceiptSession, SystemClipboard};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("bitcoin_receipts=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("Starting Bitcoin Receipts...");

    let client = match std::env::var("MEMPOOL_API_URL") {
        Ok(url) => {
            info!("API endpoint: {}", url);
            MempoolClient::with_base_url(url)
        }
        Err(_) => MempoolClient::new(),
    };
    let output_dir = std::env::var("RECEIPT_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string());
    let mut session = ReceiptSession::new(client, SystemClipboard, PdfExporter::new(output_dir));

    // Seed display: the built-in example receipt, so the screen is never empty.
    println!("{}", commands::receipt::render_card(session.current_tx()));
    println!();
    println!("Paste a Bitcoin TxID to generate a receipt, or type 'help'.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Ok(Some(line)) = lines.next_line().await {
        if let CommandOutcome::Quit = commands::handle_line(&mut session, &line).await {
            break;
        }
        prompt();
    }

    info!("Goodbye");
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
