use super::model::{ColumnGuess, Delimiter};

// ---------------------------------------------------------------------------
// Recognised header vocabulary
// ---------------------------------------------------------------------------

/// Header spellings (lower-case) that mark the SMILES column.
pub const SMILES_HEADERS: &[&str] = &[
    "smiles",
    "molsmiles",
    "kekule_smiles",
    "canonical_smiles",
    "can_smiles",
    "mol_smiles",
];

/// Header spellings (lower-case) that mark the display-name column.
pub const NAME_HEADERS: &[&str] = &[
    "name", "id", "idnumber", "compound", "title", "molecule", "mol", "cid",
];

// ---------------------------------------------------------------------------
// Delimiter detection
// ---------------------------------------------------------------------------

/// Pick a delimiter from the filename extension, then from the text itself.
///
/// Decision order (first match wins):
/// * `.tsv` → tab, `.csv` → comma, `.smi` / `.smiles` → space
/// * text contains a tab → tab
/// * text contains a comma → comma
/// * otherwise → space
///
/// Never returns [`Delimiter::Auto`].
pub fn detect_delimiter(filename: Option<&str>, sample: Option<&str>) -> Delimiter {
    let lower = filename.unwrap_or("").to_ascii_lowercase();

    let detected = if lower.ends_with(".tsv") {
        Delimiter::Tab
    } else if lower.ends_with(".csv") {
        Delimiter::Comma
    } else if lower.ends_with(".smi") || lower.ends_with(".smiles") {
        Delimiter::Space
    } else {
        match sample {
            Some(text) if text.contains('\t') => Delimiter::Tab,
            Some(text) if text.contains(',') => Delimiter::Comma,
            _ => Delimiter::Space,
        }
    };

    log::debug!("Detected delimiter {detected} (filename: {filename:?})");
    detected
}

// ---------------------------------------------------------------------------
// Column guessing
// ---------------------------------------------------------------------------

/// Locate the SMILES and name columns in a header row.
///
/// Matching is case-insensitive against [`SMILES_HEADERS`] and
/// [`NAME_HEADERS`]; the first matching cell wins. Without a SMILES match the
/// first column is assumed.
///
/// Comma and tab headers arrive untrimmed from `split_line`, so padding such
/// as `smiles, name` is stripped before matching.
pub fn guess_columns<S: AsRef<str>>(header: &[S]) -> ColumnGuess {
    let lower: Vec<String> = header
        .iter()
        .map(|h| h.as_ref().trim().to_lowercase())
        .collect();

    let find = |vocab: &[&str]| lower.iter().position(|h| vocab.contains(&h.as_str()));

    ColumnGuess {
        smiles_col: find(SMILES_HEADERS).unwrap_or(0),
        name_col: find(NAME_HEADERS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_wins_over_content() {
        assert_eq!(detect_delimiter(Some("data.tsv"), Some("a,b,c")), Delimiter::Tab);
        assert_eq!(detect_delimiter(Some("data.csv"), Some("a\tb")), Delimiter::Comma);
        assert_eq!(detect_delimiter(Some("data.smi"), Some("a\tb,c")), Delimiter::Space);
        assert_eq!(
            detect_delimiter(Some("DATA.SMILES"), Some("a,b")),
            Delimiter::Space
        );
    }

    #[test]
    fn content_decides_without_known_extension() {
        assert_eq!(detect_delimiter(None, Some("CCO\tethanol")), Delimiter::Tab);
        assert_eq!(detect_delimiter(Some("list.txt"), Some("CCO,ethanol")), Delimiter::Comma);
        assert_eq!(detect_delimiter(None, Some("a,b\tc")), Delimiter::Tab);
        assert_eq!(detect_delimiter(None, Some("CCO ethanol")), Delimiter::Space);
    }

    #[test]
    fn nothing_to_go_on_falls_back_to_space() {
        assert_eq!(detect_delimiter(None, None), Delimiter::Space);
        assert_eq!(detect_delimiter(Some("notes.txt"), None), Delimiter::Space);
    }

    #[test]
    fn guesses_known_headers_case_insensitively() {
        let guess = guess_columns(&["ID", "Canonical_SMILES", "logp"]);
        assert_eq!(guess.smiles_col, 1);
        assert_eq!(guess.name_col, Some(0));
    }

    #[test]
    fn first_match_wins() {
        let guess = guess_columns(&["cid", "smiles", "name", "mol_smiles"]);
        assert_eq!(guess.smiles_col, 1);
        assert_eq!(guess.name_col, Some(0));
    }

    #[test]
    fn unknown_headers_fall_back() {
        let guess = guess_columns(&["structure", "label"]);
        assert_eq!(guess.smiles_col, 0);
        assert_eq!(guess.name_col, None);

        let empty: [&str; 0] = [];
        assert_eq!(guess_columns(&empty).smiles_col, 0);
    }

    #[test]
    fn padded_header_cells_still_match() {
        let guess = guess_columns(&["structure", " Name ", "\tSMILES"]);
        assert_eq!(guess.smiles_col, 2);
        assert_eq!(guess.name_col, Some(1));
    }
}
