use super::model::Row;

// ---------------------------------------------------------------------------
// Row window: which contiguous slice of the parsed rows is submitted
// ---------------------------------------------------------------------------

/// Bounds `[start, end)` of the window over `len` rows.
///
/// * `start_index` past the end → empty range at `len`
/// * `n_molecules` absent or 0 → runs to the end
pub fn window_bounds(len: usize, start_index: usize, n_molecules: Option<usize>) -> (usize, usize) {
    let start = start_index.min(len);
    let end = match n_molecules {
        Some(n) if n > 0 => start.saturating_add(n).min(len),
        _ => len,
    };
    (start, end)
}

/// Return the rows inside the window, preserving their order.
pub fn window_rows(rows: &[Row], start_index: usize, n_molecules: Option<usize>) -> Vec<Row> {
    let (start, end) = window_bounds(rows.len(), start_index, n_molecules);
    rows[start..end].to_vec()
}
