#![forbid(unsafe_code)]

use crate::model::{Client, Inspection, Invoice, Item, ItemStatus};
use time::Date;
use time::macros::format_description;

/// Headline counts for the landing view. Revenue is the sum of invoice
/// grand totals, regardless of payment status.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dashboard {
    pub inspections: usize,
    pub clients: usize,
    pub invoices: usize,
    pub revenue: f64,
}

pub fn dashboard(inspections: &[Inspection], clients: &[Client], invoices: &[Invoice]) -> Dashboard {
    Dashboard {
        inspections: inspections.len(),
        clients: clients.len(),
        invoices: invoices.len(),
        revenue: invoices.iter().map(|invoice| invoice.total_amount).sum(),
    }
}

/// First `n` of an already-sorted listing.
pub fn recent<T>(items: &[T], n: usize) -> &[T] {
    &items[..items.len().min(n)]
}

/// Every failed item of the inspection, area order first, item order within
/// each area. This sequence is the sole input to the failure summary.
pub fn failed_items(inspection: &Inspection) -> Vec<&Item> {
    inspection
        .areas
        .iter()
        .flat_map(|area| area.items.iter())
        .filter(|item| item.status == ItemStatus::Fail)
        .collect()
}

const DEFAULT_CURRENCY: &str = "OMR";

/// Fixed two-decimal amount with thousands grouping and a currency-code
/// prefix. An empty or absent code falls back to the default.
pub fn format_currency(amount: f64, code: Option<&str>) -> String {
    let code = match code {
        Some(code) if !code.trim().is_empty() => code,
        _ => DEFAULT_CURRENCY,
    };
    let cents = (amount.abs() * 100.0).round() as i128;
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{code} {sign}{}.{fraction:02}", group_thousands(whole))
}

fn group_thousands(value: i128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"2024-03-15"` → `"March 15, 2024"`.
///
/// Parsed as a plain calendar date, never through a timestamp, so the
/// rendered day cannot drift with the host timezone. Empty or unparseable
/// input renders `"N/A"`.
pub fn format_long_date(date: &str) -> String {
    let input = format_description!("[year]-[month]-[day]");
    let output = format_description!("[month repr:long] [day padding:none], [year]");
    let parsed = Date::parse(date.trim(), input).ok();
    match parsed.and_then(|date| date.format(output).ok()) {
        Some(rendered) => rendered,
        None => "N/A".to_string(),
    }
}
