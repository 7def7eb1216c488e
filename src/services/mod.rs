pub mod clipboard_service;
pub mod export_service;
pub mod receipt_service;
pub mod session_service;

pub use clipboard_service::{ClipboardSink, SystemClipboard};
pub use export_service::{PdfExporter, ReceiptExporter};
pub use session_service::ReceiptSession;
