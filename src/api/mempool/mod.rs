pub mod client;
pub mod models;

pub use client::{ApiError, MempoolClient, TxGateway};
pub use models::{example_transaction, Transaction};
