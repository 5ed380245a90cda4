//! Structured payload for the external document-rendering collaborator.
//!
//! Exporting (print dialog, PDF) is outside the core; the host hands this
//! payload to whatever renders the document. It is assembled from the
//! projected sequence after the pipeline has run, never from raw state.

use serde::Serialize;

use crate::rows::RowSource;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub id: String,
    pub title: String,
    pub amount_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListReport {
    pub title: String,
    /// Authoritative count across all pages.
    pub total_records: u64,
    /// Rows actually listed (the current projection).
    pub listed: u64,
    /// Sum of the listed amounts, minor units.
    pub listed_amount_cents: i64,
    pub lines: Vec<ReportLine>,
}

pub fn build_report<T: RowSource>(title: &str, items: &[T], total_records: u64) -> ListReport {
    let lines: Vec<ReportLine> = items
        .iter()
        .map(|item| ReportLine {
            id: item.row_id(),
            title: item.title(),
            amount_cents: item.price().map(|money| money.cents).unwrap_or(0),
        })
        .collect();

    ListReport {
        title: title.to_string(),
        total_records,
        listed: lines.len() as u64,
        listed_amount_cents: lines.iter().map(|line| line.amount_cents).sum(),
        lines,
    }
}
