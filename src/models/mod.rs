//! Data models for receipt commands and services

pub mod receipt;

pub use receipt::Receipt;
