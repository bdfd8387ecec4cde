/// Numeric coercion and text cleanup for merged table cells.
///
/// The display policy is inherited from the sheet this pipeline replaces:
/// metric columns are whole numbers, and a rounded zero renders as an empty
/// cell. A metric that is truly zero is therefore indistinguishable from one
/// that was never supplied once rendered; callers keep `Option<f64>` so the
/// distinction survives until display.

/// Lenient numeric parse. Strips thousands separators and decorations the
/// sheet sometimes carries ("105.6 ", "1,024").
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || s == "-" {
        return None;
    }
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-' || *c == ',')
        .collect();
    let cleaned = cleaned.replace(',', "");
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Coercion for merged metric fields: unparsable input defaults to 0.
pub fn parse_or_zero(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

/// Render a metric cell: round half-up to the nearest integer, and render a
/// rounded zero (or an absent value) as an empty string.
pub fn display_number(value: Option<f64>) -> String {
    let Some(v) = value else {
        return String::new();
    };
    let rounded = v.round() as i64;
    if rounded == 0 {
        String::new()
    } else {
        rounded.to_string()
    }
}

/// Trim surrounding whitespace and the leading dash separators the ranking
/// paragraphs use between player line and blurb. Internal punctuation and
/// unicode pass through untouched.
pub fn clean_text(raw: &str) -> String {
    raw.trim()
        .trim_start_matches(['-', '–', '—', ' '])
        .trim()
        .to_string()
}
