//! Heuristic extraction of transaction fields from OCR receipt text.
//!
//! The OCR engine itself lives on the client; this module only consumes its
//! recognized text. Everything here is best-effort pattern matching over
//! noisy input: a missed field is normal and surfaces as `None` on the scan.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use crate::receipts::receipts_model::ReceiptScan;

/// Monetary token: optional currency symbol, two decimal places, optional
/// thousands separators.
fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:[$€£]\s*)?(\d{1,3}(?:,\d{3})+\.\d{2}|\d+\.\d{2})").unwrap()
    })
}

fn total_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:grand\s+total|total|amount\s+due|balance\s+due)\b").unwrap()
    })
}

/// `SUBTOTAL` passes the plain total label's word boundary when written
/// `SUB-TOTAL` or `SUB TOTAL`, so it gets its own exclusion.
fn subtotal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bsub\s*-?\s*total\b|\bsubtotal\b").unwrap())
}

fn iso_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap())
}

fn slash_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap())
}

fn dotted_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b").unwrap())
}

/// Parses recognized receipt text into its recoverable fields.
///
/// - Total: the largest amount on a labeled line (`TOTAL`, `AMOUNT DUE`,
///   `BALANCE DUE`; `SUBTOTAL` never counts), falling back to the largest
///   monetary token anywhere in the text.
/// - Date: first valid `YYYY-MM-DD`, then `MM/DD/YYYY`, then `DD.MM.YYYY`.
///   Matches that do not form a real calendar date are ignored.
/// - Merchant: the first line that reads like a name rather than an
///   address number, date, amount, or label line.
pub fn parse_receipt_text(text: &str) -> ReceiptScan {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    ReceiptScan {
        merchant: find_merchant(&lines),
        total: find_total(&lines),
        date: find_date(text),
    }
}

fn parse_amount(token: &str) -> Option<Decimal> {
    Decimal::from_str(&token.replace(',', "")).ok()
}

fn amounts_in(line: &str) -> Vec<Decimal> {
    amount_re()
        .captures_iter(line)
        .filter_map(|c| parse_amount(&c[1]))
        .collect()
}

fn find_total(lines: &[&str]) -> Option<Decimal> {
    let labeled = lines
        .iter()
        .filter(|line| total_label_re().is_match(line) && !subtotal_re().is_match(line))
        .flat_map(|line| amounts_in(line))
        .max();
    if labeled.is_some() {
        return labeled;
    }

    lines.iter().flat_map(|line| amounts_in(line)).max()
}

fn find_date(text: &str) -> Option<NaiveDate> {
    if let Some(date) = iso_date_re().captures_iter(text).find_map(|c| {
        NaiveDate::from_ymd_opt(c[1].parse().ok()?, c[2].parse().ok()?, c[3].parse().ok()?)
    }) {
        return Some(date);
    }

    if let Some(date) = slash_date_re().captures_iter(text).find_map(|c| {
        NaiveDate::from_ymd_opt(c[3].parse().ok()?, c[1].parse().ok()?, c[2].parse().ok()?)
    }) {
        return Some(date);
    }

    dotted_date_re().captures_iter(text).find_map(|c| {
        NaiveDate::from_ymd_opt(c[3].parse().ok()?, c[2].parse().ok()?, c[1].parse().ok()?)
    })
}

fn find_merchant(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| looks_like_name(line))
        .map(|line| line.to_string())
}

fn looks_like_name(line: &str) -> bool {
    let alphabetic = line.chars().filter(|c| c.is_alphabetic()).count();
    alphabetic >= 3
        && !amount_re().is_match(line)
        && !total_label_re().is_match(line)
        && !iso_date_re().is_match(line)
        && !slash_date_re().is_match(line)
        && !dotted_date_re().is_match(line)
}
