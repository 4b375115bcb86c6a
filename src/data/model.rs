use std::fmt;

// ---------------------------------------------------------------------------
// Delimiter – column separator of the input text
// ---------------------------------------------------------------------------

/// Column separator used to split an input line.
///
/// `Auto` is only ever a request; the detector always resolves it to one of
/// the three concrete variants before any line is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    #[default]
    Auto,
    Comma,
    Tab,
    Space,
}

impl Delimiter {
    /// All variants, in the order shown in the options combo box.
    pub const ALL: [Delimiter; 4] = [
        Delimiter::Auto,
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Space,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Delimiter::Auto => "auto",
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Space => "space",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Row – one extracted molecule
// ---------------------------------------------------------------------------

/// A single extracted record: the SMILES token plus an optional display name.
///
/// `smiles` is never empty; rows without an identifier are dropped by the
/// extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub smiles: String,
    pub name: Option<String>,
}

impl Row {
    pub fn new(smiles: impl Into<String>, name: Option<String>) -> Self {
        Row {
            smiles: smiles.into(),
            name,
        }
    }

    /// Name or the empty string, as sent to the descriptor service.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// ParseOptions – caller-supplied configuration
// ---------------------------------------------------------------------------

/// Options steering [`parse_raw_to_rows`](super::loader::parse_raw_to_rows).
///
/// Column indices are `Option` so that an explicit choice can be told apart
/// from "use whatever the header suggests".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: Delimiter,
    pub has_header: bool,
    /// Identifier column. `None` defers to the header guess, or 0.
    pub smiles_col: Option<usize>,
    /// Display-name column. `None` defers to the header guess, or 1.
    pub name_col: Option<usize>,
    /// First row kept, 0-based, counted after header removal.
    pub start_index: usize,
    /// Window length; `None` keeps everything from `start_index` on.
    pub n_molecules: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Auto,
            has_header: false,
            smiles_col: None,
            name_col: None,
            start_index: 0,
            n_molecules: None,
        }
    }
}

impl ParseOptions {
    /// Options that read back the output of
    /// [`serialize_rows`](super::format::serialize_rows) with a tab separator.
    pub fn review() -> Self {
        Self {
            delimiter: Delimiter::Tab,
            has_header: true,
            smiles_col: Some(0),
            name_col: Some(1),
            ..Self::default()
        }
    }

    /// Drop the row window back to "everything".
    pub fn reset_window(&mut self) {
        self.start_index = 0;
        self.n_molecules = None;
    }
}

// ---------------------------------------------------------------------------
// Detection / parse results
// ---------------------------------------------------------------------------

/// Column indices suggested by a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGuess {
    pub smiles_col: usize,
    pub name_col: Option<usize>,
}

/// Output of the extractor: the rows plus the header cells, if one was read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub rows: Vec<Row>,
    pub header: Option<Vec<String>>,
}

impl ParsedInput {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
