//! Export format distribution

use crate::event::UsageEvent;
use crate::kpi::percent;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Known export event types and their labels
const KNOWN_EXPORTS: &[(&str, &str)] = &[
    ("pdfExport", "PDF Export"),
    ("clipboardExport", "Clipboard Export"),
    ("emailExport", "Email Export"),
    ("csvExport", "CSV Export"),
    ("docxExport", "DOCX Export"),
];

/// Share of one export format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportShare {
    /// Friendly label
    pub label: String,
    /// Export events with this label
    pub count: usize,
    /// Percentage of all exports
    pub percent: f64,
}

/// Friendly label for an export event type.
///
/// Unknown types get a space before `Export` and title case, so
/// `fooExport` becomes `Foo Export`.
#[must_use]
pub fn export_label(event_type: &str) -> String {
    if let Some((_, label)) = KNOWN_EXPORTS.iter().find(|(kind, _)| *kind == event_type) {
        return (*label).to_string();
    }
    title_case(&event_type.replace("Export", " Export"))
}

// Upper-case a letter that follows a non-letter, lower-case the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Export counts by label, most used first.
///
/// Event types that map to the same label are counted together.
#[must_use]
pub fn export_breakdown(events: &[UsageEvent]) -> Vec<ExportShare> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for event in events.iter().filter(|e| e.is_export()) {
        *counts.entry(export_label(&event.event_type)).or_default() += 1;
    }
    let total: usize = counts.values().sum();

    let mut shares: Vec<ExportShare> = counts
        .into_iter()
        .map(|(label, count)| ExportShare {
            label,
            count,
            percent: percent(count, total),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}
