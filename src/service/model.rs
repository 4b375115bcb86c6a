use serde::{Deserialize, Serialize};

use crate::data::model::Row;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of `POST /ro5`. `names` is parallel to `smiles`, `""` where absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ro5Request {
    pub smiles: Vec<String>,
    pub names: Vec<String>,
    pub vmax: u32,
}

impl Ro5Request {
    pub fn from_rows(rows: &[Row], vmax: u32) -> Self {
        Self {
            smiles: rows.iter().map(|r| r.smiles.clone()).collect(),
            names: rows.iter().map(|r| r.name_or_empty().to_string()).collect(),
            vmax,
        }
    }

    pub fn len(&self) -> usize {
        self.smiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.smiles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Whole service answer. Large submissions come back without `items`, with a
/// summary and a CSV payload instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ro5Response {
    #[serde(default)]
    pub items: Vec<Ro5Item>,
    #[serde(default)]
    pub summary: Option<Ro5Summary>,
    #[serde(default)]
    pub download: Option<DownloadPayload>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Descriptors and rule checks for one molecule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ro5Item {
    pub smiles: String,
    #[serde(default)]
    pub name: Option<String>,
    pub mwt: f64,
    pub logp: f64,
    pub hbd: u32,
    pub hba: u32,
    pub violations: u32,
    pub passes_ro5: bool,
    pub vmax: u32,
    pub mwt_violation: bool,
    pub hbd_violation: bool,
    pub hba_violation: bool,
    pub logp_violation: bool,
}

/// Base64-encoded file offered for download.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DownloadPayload {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub mime: String,
    pub content: String,
}

// -- Summary --

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Stat {
    pub n: usize,
    pub mean: Option<f64>,
    pub stdev: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CountPct {
    pub count: usize,
    pub pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Ro5PassFail {
    pub n: usize,
    pub pass: CountPct,
    pub fail: CountPct,
}

/// Histogram: `bins` holds the edges, one more than `counts`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hist {
    #[serde(default)]
    pub bins: Vec<f64>,
    #[serde(default)]
    pub counts: Vec<u64>,
}

/// Five-number summary; all `None` when the distribution is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct BoxSummary {
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

impl BoxSummary {
    /// `[min, q1, median, q3, max]` when every value is present.
    pub fn values(&self) -> Option<[f64; 5]> {
        Some([self.min?, self.q1?, self.median?, self.q3?, self.max?])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dist {
    #[serde(default)]
    pub hist: Hist,
    #[serde(rename = "box", default)]
    pub box_summary: BoxSummary,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Distributions {
    pub mwt: Dist,
    pub logp: Dist,
    pub hbd: Dist,
    pub hba: Dist,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ro5Summary {
    pub mwt: Stat,
    pub logp: Stat,
    pub hbd: Stat,
    pub hba: Stat,
    pub pass_fail: Ro5PassFail,
    pub distributions: Distributions,
}

impl Ro5Summary {
    pub fn stat(&self, descriptor: Descriptor) -> &Stat {
        match descriptor {
            Descriptor::Mwt => &self.mwt,
            Descriptor::Logp => &self.logp,
            Descriptor::Hbd => &self.hbd,
            Descriptor::Hba => &self.hba,
        }
    }

    pub fn distribution(&self, descriptor: Descriptor) -> &Dist {
        let d = &self.distributions;
        match descriptor {
            Descriptor::Mwt => &d.mwt,
            Descriptor::Logp => &d.logp,
            Descriptor::Hbd => &d.hbd,
            Descriptor::Hba => &d.hba,
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptor – the four Rule-of-Five quantities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Descriptor {
    Mwt,
    Logp,
    Hbd,
    Hba,
}

impl Descriptor {
    pub const ALL: [Descriptor; 4] = [
        Descriptor::Mwt,
        Descriptor::Logp,
        Descriptor::Hbd,
        Descriptor::Hba,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Descriptor::Mwt => "MWT",
            Descriptor::Logp => "LogP",
            Descriptor::Hbd => "HBD",
            Descriptor::Hba => "HBA",
        }
    }

    /// Axis unit; empty for the dimensionless LogP.
    pub fn unit(self) -> &'static str {
        match self {
            Descriptor::Mwt => "Da",
            Descriptor::Logp => "",
            Descriptor::Hbd | Descriptor::Hba => "count",
        }
    }
}
