//! Format Converter: best-effort derivation of the fixed-layout PDF.
//!
//! The DOCX → PDF engine is an external collaborator behind the
//! `DocumentConverter` trait; production shells out to LibreOffice. Every
//! failure here is caught and logged by `derive_fixed_layout`, and the
//! package succeeds without the PDF artifact.

pub mod summary;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to launch converter: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("converter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("converter produced no output for {0}")]
    MissingOutput(PathBuf),
}

/// The single abstract operation of the conversion engine: render a
/// page-exact PDF of the given document into `out_dir`, returning the
/// produced path.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    async fn convert_to_pdf(&self, input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError>;
}

/// LibreOffice-backed converter (`soffice --headless --convert-to pdf`).
pub struct SofficeConverter {
    binary: String,
}

impl SofficeConverter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl DocumentConverter for SofficeConverter {
    async fn convert_to_pdf(&self, input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
        let output = Command::new(&self.binary)
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(out_dir)
            .arg(input)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ConvertError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let produced = input
            .file_stem()
            .map(|stem| out_dir.join(stem).with_extension("pdf"))
            .ok_or_else(|| ConvertError::MissingOutput(input.to_path_buf()))?;

        if !produced.exists() {
            return Err(ConvertError::MissingOutput(produced));
        }
        debug!("converted {} -> {}", input.display(), produced.display());
        Ok(produced)
    }
}

/// Produces the fixed-layout artifact: page-exact conversion of the DOCX
/// plus one appended chart-summary page. Returns `None` (after logging)
/// on any failure; the caller reports the package without this artifact.
pub async fn derive_fixed_layout(
    converter: &dyn DocumentConverter,
    docx_path: &Path,
    chart_png: &Path,
    out_pdf: &Path,
) -> Option<PathBuf> {
    match try_derive(converter, docx_path, chart_png, out_pdf).await {
        Ok(()) => Some(out_pdf.to_path_buf()),
        Err(e) => {
            warn!("fixed-layout conversion failed, omitting PDF artifact: {e:#}");
            None
        }
    }
}

async fn try_derive(
    converter: &dyn DocumentConverter,
    docx_path: &Path,
    chart_png: &Path,
    out_pdf: &Path,
) -> Result<()> {
    let out_dir = docx_path
        .parent()
        .context("docx path has no parent directory")?;

    let converted = converter.convert_to_pdf(docx_path, out_dir).await?;

    let title_stem = docx_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dpr");
    let chart = chart_png.exists().then_some(chart_png);
    summary::compose_summary_pdf(&converted, title_stem, chart, out_pdf)?;

    if converted != out_pdf {
        let _ = std::fs::remove_file(&converted);
    }
    Ok(())
}
