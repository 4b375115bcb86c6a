use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Known drug-like molecules to seed the sample lists.
const SEED_MOLECULES: &[(&str, &str)] = &[
    ("CC(=O)Oc1ccccc1C(=O)O", "Aspirin"),
    ("CC(C)Cc1ccc(cc1)C(C)C(=O)O", "Ibuprofen"),
    ("CN1C=NC2=C1C(=O)N(C(=O)N2C)C", "Caffeine"),
    ("CC(=O)Nc1ccc(O)cc1", "Paracetamol"),
    ("CN1CCC[C@H]1c2cccnc2", "Nicotine"),
    ("OC[C@H]1OC(O)[C@H](O)[C@@H](O)[C@@H]1O", "Glucose"),
    ("CCO", "Ethanol"),
    ("c1ccccc1", "Benzene"),
];

/// Ring fragments used to build random molecules.
const FRAGMENTS: &[&str] = &["c1ccccc1", "C1CCNCC1", "c1ccncc1", "C(=O)O", "N", "O", "Cl", "F"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// Alkyl chain with one or two fragments attached.
fn random_molecule(rng: &mut SimpleRng) -> String {
    let mut smiles = "C".repeat(1 + rng.below(6));
    for _ in 0..1 + rng.below(2) {
        smiles.push_str(FRAGMENTS[rng.below(FRAGMENTS.len())]);
    }
    smiles
}

fn molecules(n: usize, rng: &mut SimpleRng) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = SEED_MOLECULES
        .iter()
        .map(|(smiles, name)| (smiles.to_string(), name.to_string()))
        .collect();
    while out.len() < n {
        let id = out.len();
        out.push((random_molecule(rng), format!("GEN-{id:04}")));
    }
    out.truncate(n);
    out
}

/// `smiles,name` with a header and a few rows missing their name.
fn write_csv(path: &Path, mols: &[(String, String)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record(["smiles", "name"])?;
    for (i, (smiles, name)) in mols.iter().enumerate() {
        let name = if i % 7 == 3 { "" } else { name.as_str() };
        writer.write_record([smiles.as_str(), name])?;
    }
    writer.flush()?;
    Ok(())
}

/// `id\tcanonical_smiles\tsource`, so the SMILES column has to be guessed.
fn write_tsv(path: &Path, mols: &[(String, String)]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .context("creating TSV")?;
    writer.write_record(["id", "canonical_smiles", "source"])?;
    for (smiles, name) in mols {
        writer.write_record([name.as_str(), smiles.as_str(), "generated"])?;
    }
    writer.flush()?;
    Ok(())
}

/// `SMILES NAME` lines with comments, blank lines and irregular spacing.
fn write_smi(path: &Path, mols: &[(String, String)]) -> Result<()> {
    let mut text = String::from("# sample SMILES list\n\n");
    for (i, (smiles, name)) in mols.iter().enumerate() {
        let gap = " ".repeat(1 + i % 3);
        writeln!(text, "{smiles}{gap}{name}")?;
        if i % 10 == 9 {
            text.push_str("\n# --\n");
        }
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir).context("creating output directory")?;

    let mut rng = SimpleRng::new(42);
    let mols = molecules(60, &mut rng);

    let csv_path = out_dir.join("sample_molecules.csv");
    let tsv_path = out_dir.join("sample_molecules.tsv");
    let smi_path = out_dir.join("sample_molecules.smi");
    write_csv(&csv_path, &mols)?;
    write_tsv(&tsv_path, &mols)?;
    write_smi(&smi_path, &mols)?;

    println!(
        "Wrote {} molecules to {}, {} and {}",
        mols.len(),
        csv_path.display(),
        tsv_path.display(),
        smi_path.display()
    );
    Ok(())
}
