//! Receipts module - heuristic parsing of OCR-recognized receipt text.

mod receipt_parser;
mod receipts_model;

pub use receipt_parser::parse_receipt_text;
pub use receipts_model::ReceiptScan;
