/// Data layer: input parsing, row windowing and review serialization.
///
/// Architecture:
/// ```text
///  pasted text / .csv .tsv .txt .smi .smiles
///        │
///        ▼
///   ┌──────────┐
///   │  detect   │  filename + sample → Delimiter, header → column guess
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  lines → cells → Vec<Row>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  window   │  [start, start + n) slice for partial submission
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  format   │  rows → "SMILES\tName" review text
///   └──────────┘
/// ```
///
/// Everything here is pure: no I/O apart from [`loader::read_input_file`].

pub mod detect;
pub mod format;
pub mod loader;
pub mod model;
pub mod window;
