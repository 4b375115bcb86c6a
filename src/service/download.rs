use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::model::{DownloadPayload, Ro5Item};

/// Filename offered when the payload does not carry one.
pub const DEFAULT_DOWNLOAD_NAME: &str = "ro5_results.csv";

impl DownloadPayload {
    pub fn suggested_filename(&self) -> &str {
        if self.filename.trim().is_empty() {
            DEFAULT_DOWNLOAD_NAME
        } else {
            &self.filename
        }
    }

    /// Decode the base64 `content` into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.content.trim())
            .context("decoding base64 download payload")
    }
}

/// Write a service-provided download to `path`.
pub fn save_payload(payload: &DownloadPayload, path: &Path) -> Result<()> {
    let bytes = payload.decode()?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Render per-molecule results as CSV, one header row plus one row per item.
pub fn items_to_csv(items: &[Ro5Item]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for item in items {
        writer.serialize(item).context("serializing result row")?;
    }
    writer.into_inner().context("flushing CSV writer")
}

/// Write per-molecule results to `path` as CSV.
pub fn export_items(items: &[Ro5Item], path: &Path) -> Result<()> {
    let bytes = items_to_csv(items)?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported {} result row(s) to {}", items.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(filename: &str, content: &str) -> DownloadPayload {
        DownloadPayload {
            filename: filename.into(),
            mime: "text/csv".into(),
            content: content.into(),
        }
    }

    #[test]
    fn decodes_base64_content() {
        let p = payload("out.csv", "c21pbGVzLG13dApDQ08sNDYuMDcK");
        assert_eq!(p.decode().unwrap(), b"smiles,mwt\nCCO,46.07\n");
        assert_eq!(p.suggested_filename(), "out.csv");
    }

    #[test]
    fn blank_filename_gets_default() {
        assert_eq!(payload("  ", "").suggested_filename(), DEFAULT_DOWNLOAD_NAME);
    }

    #[test]
    fn invalid_base64_is_an_error() {
        assert!(payload("x.csv", "not base64!").decode().is_err());
    }

    #[test]
    fn items_render_as_csv() {
        let item = Ro5Item {
            smiles: "CCO".into(),
            name: None,
            mwt: 46.07,
            logp: -0.5,
            hbd: 1,
            hba: 1,
            violations: 0,
            passes_ro5: true,
            vmax: 1,
            mwt_violation: false,
            hbd_violation: false,
            hba_violation: false,
            logp_violation: false,
        };
        let text = String::from_utf8(items_to_csv(&[item]).unwrap()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("smiles,name,mwt,logp,hbd,hba,violations,passes_ro5,vmax,mwt_violation,hbd_violation,hba_violation,logp_violation")
        );
        assert_eq!(lines.next(), Some("CCO,,46.07,-0.5,1,1,0,true,1,false,false,false,false"));
        assert_eq!(lines.next(), None);
    }
}
