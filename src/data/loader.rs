use std::path::{Path, PathBuf};

use super::detect::{detect_delimiter, guess_columns};
use super::model::{Delimiter, ParseOptions, ParsedInput, Row};
use crate::error::InputError;

/// Extensions accepted by the file picker and [`read_input_file`].
pub const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "tsv", "txt", "smi", "smiles"];

/// Upload size limit used when no configuration overrides it (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

// ---------------------------------------------------------------------------
// File input
// ---------------------------------------------------------------------------

/// Raw content of an uploaded file, kept verbatim so re-parses always start
/// from the original text.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub filename: String,
    pub text: String,
}

/// Read an input file fully into memory.
///
/// The extension must be one of [`ACCEPTED_EXTENSIONS`] and the size must not
/// exceed `max_bytes`; both are checked before the content is read. Invalid
/// UTF-8 is replaced rather than rejected.
pub fn read_input_file(path: &Path, max_bytes: u64) -> Result<LoadedFile, InputError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(InputError::UnsupportedExtension(ext));
    }

    let io_err = |source: std::io::Error| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > max_bytes {
        return Err(InputError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(LoadedFile {
        path: path.to_path_buf(),
        filename,
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

/// Split one line into cells.
///
/// Tab and comma split on the literal character and keep cells untouched;
/// space trims and collapses runs of whitespace.
pub fn split_line(line: &str, delimiter: Delimiter) -> Vec<&str> {
    match delimiter {
        Delimiter::Tab => line.split('\t').collect(),
        Delimiter::Comma => line.split(',').collect(),
        Delimiter::Space | Delimiter::Auto => line.split_whitespace().collect(),
    }
}

// ---------------------------------------------------------------------------
// Row extraction
// ---------------------------------------------------------------------------

/// Turn raw pasted or uploaded text into an ordered list of rows.
///
/// Never fails: blank lines and `#` comments are skipped, short lines yield
/// an empty identifier (and are dropped), out-of-range name columns leave the
/// name unset. Explicit columns in `options` win over header guesses.
///
/// The row window in `options` is not applied here; see
/// [`window_rows`](super::window::window_rows).
pub fn parse_raw_to_rows(raw: &str, filename: Option<&str>, options: &ParseOptions) -> ParsedInput {
    // Spreadsheet exports often lead with a UTF-8 byte order mark.
    let raw = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);

    let delimiter = match options.delimiter {
        Delimiter::Auto => detect_delimiter(filename, Some(raw)),
        pinned => pinned,
    };

    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();

    let Some((first, rest)) = lines.split_first() else {
        return ParsedInput::default();
    };

    let mut smiles_col = options.smiles_col;
    let mut name_col = options.name_col;

    let (header, body) = if options.has_header {
        let header: Vec<String> = split_line(first, delimiter)
            .into_iter()
            .map(str::to_string)
            .collect();
        let guess = guess_columns(header.as_slice());
        smiles_col = smiles_col.or(Some(guess.smiles_col));
        name_col = name_col.or(guess.name_col);
        (Some(header), rest)
    } else {
        (None, &lines[..])
    };

    // Unresolved name column: second cell, the "SMILES NAME" convention.
    let smiles_idx = smiles_col.unwrap_or(0);
    let name_idx = name_col.unwrap_or(1);

    let rows: Vec<Row> = body
        .iter()
        .filter_map(|line| {
            let cells = split_line(line, delimiter);
            let smiles = cells.get(smiles_idx).map(|c| c.trim()).unwrap_or("");
            if smiles.is_empty() {
                return None;
            }
            let name = cells
                .get(name_idx)
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string);
            Some(Row::new(smiles, name))
        })
        .collect();

    let dropped = body.len() - rows.len();
    if dropped > 0 {
        log::warn!("Dropped {dropped} line(s) without a SMILES value");
    }
    log::debug!(
        "Parsed {} row(s) with delimiter {delimiter} (smiles col {smiles_idx}, name col {name_idx})",
        rows.len()
    );

    ParsedInput { rows, header }
}
