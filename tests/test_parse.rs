use rusty_ro5::data::detect::detect_delimiter;
use rusty_ro5::data::format::serialize_rows;
use rusty_ro5::data::loader::parse_raw_to_rows;
use rusty_ro5::data::model::{Delimiter, ParseOptions, Row};
use rusty_ro5::data::window::window_rows;

fn row(smiles: &str, name: Option<&str>) -> Row {
    Row::new(smiles, name.map(str::to_string))
}

#[test]
fn test_delimiter_precedence() {
    for text in ["a,b", "a\tb", "a b", ""] {
        assert_eq!(detect_delimiter(Some("x.tsv"), Some(text)), Delimiter::Tab);
        assert_eq!(detect_delimiter(Some("x.csv"), Some(text)), Delimiter::Comma);
        assert_eq!(detect_delimiter(Some("x.smi"), Some(text)), Delimiter::Space);
        assert_eq!(detect_delimiter(Some("x.smiles"), Some(text)), Delimiter::Space);
    }
    assert_eq!(detect_delimiter(None, Some("CCO\tethanol")), Delimiter::Tab);
    assert_eq!(detect_delimiter(None, Some("CCO,ethanol")), Delimiter::Comma);
    assert_eq!(detect_delimiter(None, Some("CCO ethanol")), Delimiter::Space);
}

#[test]
fn test_csv_header_round_trip() {
    let options = ParseOptions {
        delimiter: Delimiter::Auto,
        has_header: true,
        smiles_col: Some(0),
        name_col: Some(1),
        start_index: 0,
        n_molecules: None,
    };
    let parsed = parse_raw_to_rows("smiles,name\nCCO,Ethanol\nCO,Methanol\n", Some("test.csv"), &options);
    assert_eq!(
        parsed.rows,
        vec![row("CCO", Some("Ethanol")), row("CO", Some("Methanol"))]
    );
}

#[test]
fn test_no_header_space_default() {
    let options = ParseOptions {
        delimiter: Delimiter::Space,
        has_header: false,
        smiles_col: Some(0),
        ..ParseOptions::default()
    };
    let parsed = parse_raw_to_rows("CCO mol1\nCO mol2", None, &options);
    assert_eq!(parsed.rows, vec![row("CCO", Some("mol1")), row("CO", Some("mol2"))]);
}

#[test]
fn test_rows_never_outnumber_content_lines() {
    let raw = "# header comment\nsmiles\tname\nCCO\tEthanol\n\n   \nCO\n#CCC\tcommented\n";
    let options = ParseOptions {
        has_header: true,
        ..ParseOptions::default()
    };
    let parsed = parse_raw_to_rows(raw, Some("set.txt"), &options);

    assert_eq!(parsed.header, Some(vec!["smiles".to_string(), "name".to_string()]));
    assert_eq!(parsed.rows, vec![row("CCO", Some("Ethanol")), row("CO", None)]);
    assert!(parsed.rows.iter().all(|r| !r.smiles.is_empty()));
    assert!(parsed.rows.iter().all(|r| !r.smiles.starts_with('#')));
}

#[test]
fn test_explicit_name_column_ignores_header_guess() {
    let raw = "name,smiles,alias\nEthanol,CCO,EtOH\n";
    let options = ParseOptions {
        delimiter: Delimiter::Comma,
        has_header: true,
        smiles_col: None,
        name_col: Some(2),
        ..ParseOptions::default()
    };
    let parsed = parse_raw_to_rows(raw, None, &options);
    assert_eq!(parsed.rows, vec![row("CCO", Some("EtOH"))]);
}

#[test]
fn test_window_over_parsed_rows() {
    let raw: String = (0..8).map(|i| format!("C{i} m{i}\n")).collect();
    let rows = parse_raw_to_rows(&raw, Some("list.smi"), &ParseOptions::default()).rows;
    assert_eq!(rows.len(), 8);

    assert_eq!(window_rows(&rows, 6, None), rows[6..].to_vec());
    assert_eq!(window_rows(&rows, 0, Some(3)), rows[..3].to_vec());
    assert_eq!(window_rows(&rows, 2, Some(2)), rows[2..4].to_vec());
    assert!(window_rows(&rows, 8, Some(2)).is_empty());
}

#[test]
fn test_serialize_then_parse_is_identity() {
    let rows = vec![
        row("CC(=O)Oc1ccccc1C(=O)O", Some("Aspirin")),
        row("c1ccccc1", None),
        row("CN1C=NC2=C1C(=O)N(C(=O)N2C)C", Some("caffeine, anhydrous")),
        row("[Na+].[Cl-]", Some("table salt")),
    ];
    let text = serialize_rows(&rows, true, "\t");
    let parsed = parse_raw_to_rows(&text, None, &ParseOptions::review());

    assert_eq!(parsed.rows, rows);
    assert_eq!(parsed.header, Some(vec!["SMILES".to_string(), "Name".to_string()]));
}

#[test]
fn test_parse_is_repeatable() {
    let raw = "id,smiles\nA,CCO\nB,CO\n";
    let options = ParseOptions {
        has_header: true,
        ..ParseOptions::default()
    };
    let first = parse_raw_to_rows(raw, None, &options);
    let second = parse_raw_to_rows(raw, None, &options);
    assert_eq!(first, second);
    assert_eq!(first.rows, vec![row("CCO", Some("A")), row("CO", Some("B"))]);
}
