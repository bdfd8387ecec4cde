//! Spreadsheet providers: the advanced metrics tab and the ordered opponent
//! list, both read through the source sheet's published CSV export. Column
//! names are configuration, not code, so a renamed tab or a new season's
//! schema is a mapping change rather than another pipeline copy.

use anyhow::{Context, Result, anyhow};

use crate::http_client::http_client;
use crate::reconcile::MetricsRow;

/// Header mapping for the metrics tab. The engine requires exactly these
/// fields once the provider has applied the mapping.
#[derive(Debug, Clone)]
pub struct MetricsSpec {
    pub name_col: String,
    pub rank_col: String,
    pub stuff_col: String,
    pub location_col: String,
    pub pitching_col: String,
    pub notes_col: String,
}

impl Default for MetricsSpec {
    fn default() -> Self {
        Self {
            name_col: "Name".to_string(),
            rank_col: "Rank".to_string(),
            stuff_col: "Stuff+".to_string(),
            location_col: "Location+".to_string(),
            pitching_col: "Pitching+".to_string(),
            notes_col: "Blurb".to_string(),
        }
    }
}

pub fn fetch_metrics(sheet_id: &str, tab: &str, spec: &MetricsSpec) -> Result<Vec<MetricsRow>> {
    let raw = fetch_tab_csv(sheet_id, tab)?;
    parse_metrics_csv(&raw, spec)
}

pub fn fetch_team_list(sheet_id: &str, tab: &str, skip_header: bool) -> Result<Vec<String>> {
    let raw = fetch_tab_csv(sheet_id, tab)?;
    parse_team_list_csv(&raw, skip_header)
}

fn fetch_tab_csv(sheet_id: &str, tab: &str) -> Result<String> {
    let client = http_client()?;
    let url = csv_export_url(sheet_id, tab);
    client
        .get(&url)
        .send()
        .with_context(|| format!("sheet tab request failed: {tab}"))?
        .error_for_status()
        .with_context(|| format!("sheet tab request rejected: {tab}"))?
        .text()
        .context("sheet tab body unreadable")
}

pub fn csv_export_url(sheet_id: &str, tab: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{sheet_id}/gviz/tq?tqx=out:csv&sheet={}",
        percent_encode(tab)
    )
}

/// Tab names carry spaces and slashes ("Ranks 4/25"); encode everything
/// outside the unreserved set.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Parse the metrics tab. A missing mapped column is a malformed source and
/// reported as an error; the caller decides whether to degrade.
pub fn parse_metrics_csv(raw: &str, spec: &MetricsSpec) -> Result<Vec<MetricsRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers = reader
        .headers()
        .context("metrics tab has no header row")?
        .clone();
    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| anyhow!("metrics tab missing column '{name}'"))
    };
    let name_idx = col(&spec.name_col)?;
    let rank_idx = col(&spec.rank_col)?;
    let stuff_idx = col(&spec.stuff_col)?;
    let location_idx = col(&spec.location_col)?;
    let pitching_idx = col(&spec.pitching_col)?;
    let notes_idx = col(&spec.notes_col)?;

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record.context("metrics tab row unreadable")?;
        let cell = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        let name = cell(name_idx);
        if name.trim().is_empty() {
            continue;
        }
        out.push(MetricsRow {
            rank: cell(rank_idx),
            name: name.trim().to_string(),
            stuff_plus: cell(stuff_idx),
            location_plus: cell(location_idx),
            pitching_plus: cell(pitching_idx),
            notes: cell(notes_idx),
        });
    }
    Ok(out)
}

/// First cell of every row, in sheet order. The external ordering is the
/// ranking criterion; row N becomes rank N downstream.
pub fn parse_team_list_csv(raw: &str, skip_header: bool) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(skip_header)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record.context("team list row unreadable")?;
        let Some(name) = record.get(0) else {
            continue;
        };
        let name = name.trim();
        if !name.is_empty() {
            out.push(name.to_string());
        }
    }
    Ok(out)
}
