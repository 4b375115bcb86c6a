use super::model::Row;

/// Header line written by [`serialize_rows`], minus the separator.
pub const REVIEW_HEADER: [&str; 2] = ["SMILES", "Name"];

/// Render rows as two-column text for review and editing.
///
/// Each row becomes `smiles<sep>name` (empty name when absent); with
/// `include_header` a `SMILES<sep>Name` line comes first. Parsing the output
/// with [`ParseOptions::review`](super::model::ParseOptions::review) gives the
/// same rows back, provided no field contains the separator.
pub fn serialize_rows(rows: &[Row], include_header: bool, separator: &str) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if include_header {
        lines.push(REVIEW_HEADER.join(separator));
    }
    lines.extend(
        rows.iter()
            .map(|r| format!("{}{separator}{}", r.smiles, r.name_or_empty())),
    );
    lines.join("\n")
}

/// Fixed-decimal display of an optional number; `-` for missing or NaN.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:.decimals$}"),
        _ => "-".to_string(),
    }
}
