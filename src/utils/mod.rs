pub mod format;

pub use format::{format_sats, format_timestamp};
