//! DPR package generation: orchestrates the full pipeline.
//!
//! Flow: classify → template lookup → financial projection → section
//! authoring → chart/workbook/DOCX assembly → best-effort fixed-layout PDF.
//!
//! Each request writes into a fresh directory named by a short random
//! identifier; that namespace is the only isolation between concurrent
//! requests.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::Category;
use crate::convert::derive_fixed_layout;
use crate::document::chart::render_financial_chart;
use crate::document::docx::write_dpr_docx;
use crate::document::excel::write_financial_workbook;
use crate::finance::project_financials;
use crate::generation::classify::classify_project;
use crate::generation::sections::author_sections;
use crate::models::brief::ProjectBrief;
use crate::state::AppState;

/// The artifact set returned to the caller. All paths share the `uid`
/// filename prefix; `pdf_summary` is best-effort and may be absent.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPackage {
    pub uid: String,
    pub project_type: Category,
    pub template_name: String,
    pub docx: String,
    pub pdf_summary: Option<String>,
    pub chart_image: String,
    pub excel_financials: String,
}

/// Short random identifier used as the per-request artifact namespace.
/// Uniqueness is relied upon, not enforced.
fn short_uid() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

pub async fn generate_dpr_package(
    state: &AppState,
    brief: &ProjectBrief,
) -> Result<GeneratedPackage> {
    let uid = short_uid();
    let generator = state.llm.as_deref();

    let category = classify_project(generator, &brief.short_description).await;
    let template = state.catalog.get(category);
    info!(
        "[{uid}] classified '{}' as {} (template: {})",
        brief.title,
        category.key(),
        template.name
    );

    let projection = project_financials(brief);
    let sections = author_sections(generator, template.sections, brief).await;

    let out_dir = state.config.output_dir.join(&uid);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let docx_path = out_dir.join(format!("{uid}_dpr.docx"));
    let chart_path = out_dir.join(format!("{uid}_finance.png"));
    let pdf_path = out_dir.join(format!("{uid}_summary.pdf"));
    let excel_path = out_dir.join(format!("{uid}_financials.xlsx"));

    // The chart is best-effort: the DOCX and PDF embed it only if the file
    // actually exists on disk.
    if let Err(e) = render_financial_chart(&projection, &chart_path) {
        warn!("[{uid}] chart rendering failed, continuing without image: {e:#}");
    }
    write_financial_workbook(&projection, &excel_path)?;
    write_dpr_docx(brief, &sections, &projection, &docx_path, &chart_path)?;

    let pdf_summary = derive_fixed_layout(
        state.converter.as_ref(),
        &docx_path,
        &chart_path,
        &pdf_path,
    )
    .await;

    info!(
        "[{uid}] package complete (pdf: {})",
        pdf_summary.is_some()
    );

    Ok(GeneratedPackage {
        uid,
        project_type: category,
        template_name: template.name.to_string(),
        docx: display_path(&docx_path),
        pdf_summary: pdf_summary.as_deref().map(display_path),
        chart_image: display_path(&chart_path),
        excel_financials: display_path(&excel_path),
    })
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::config::Config;
    use crate::catalog::TemplateCatalog;
    use crate::convert::{ConvertError, DocumentConverter};
    use crate::convert::summary::build_summary_page;

    /// Converter double that emits a minimal one-page PDF, standing in for
    /// the LibreOffice engine.
    struct StubConverter;

    #[async_trait]
    impl DocumentConverter for StubConverter {
        async fn convert_to_pdf(
            &self,
            input: &Path,
            out_dir: &Path,
        ) -> Result<PathBuf, ConvertError> {
            let stem = input.file_stem().expect("stem");
            let out = out_dir.join(stem).with_extension("pdf");
            let mut doc = build_summary_page("stub", None).expect("build stub page");
            doc.save(&out).expect("save stub pdf");
            Ok(out)
        }
    }

    /// Converter double that always fails, exercising the best-effort path.
    struct BrokenConverter;

    #[async_trait]
    impl DocumentConverter for BrokenConverter {
        async fn convert_to_pdf(
            &self,
            input: &Path,
            _out_dir: &Path,
        ) -> Result<PathBuf, ConvertError> {
            Err(ConvertError::MissingOutput(input.to_path_buf()))
        }
    }

    fn test_state(output_dir: PathBuf, converter: Arc<dyn DocumentConverter>) -> AppState {
        AppState {
            llm: None,
            converter,
            catalog: Arc::new(TemplateCatalog::builtin()),
            config: Config {
                gemini_api_key: None,
                port: 0,
                output_dir,
                soffice_path: "soffice".to_string(),
                rust_log: "info".to_string(),
            },
        }
    }

    fn brief() -> ProjectBrief {
        ProjectBrief {
            title: "T".to_string(),
            short_description: "D".to_string(),
            location: None,
            capacity: Some(500),
            currency: "INR".to_string(),
            additional: None,
        }
    }

    #[tokio::test]
    async fn test_package_artifacts_share_uid_prefix() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = test_state(dir.path().to_path_buf(), Arc::new(StubConverter));

        let package = generate_dpr_package(&state, &brief())
            .await
            .expect("package");

        assert_eq!(package.uid.len(), 8);
        assert_eq!(package.project_type, Category::Default);
        assert_eq!(package.template_name, "General Project");

        let pdf = package.pdf_summary.clone().expect("stub conversion succeeds");
        for artifact in [
            &package.docx,
            &pdf,
            &package.chart_image,
            &package.excel_financials,
        ] {
            let name = Path::new(artifact)
                .file_name()
                .and_then(|n| n.to_str())
                .expect("file name");
            assert!(
                name.starts_with(&package.uid),
                "{name} lacks uid prefix {}",
                package.uid
            );
        }

        // the required artifacts must exist on disk
        assert!(Path::new(&package.docx).exists());
        assert!(Path::new(&package.excel_financials).exists());
        assert!(Path::new(&pdf).exists());
    }

    #[tokio::test]
    async fn test_conversion_failure_omits_pdf_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = test_state(dir.path().to_path_buf(), Arc::new(BrokenConverter));

        let package = generate_dpr_package(&state, &brief())
            .await
            .expect("package still succeeds");

        assert!(package.pdf_summary.is_none());
        assert!(Path::new(&package.docx).exists());
        assert!(Path::new(&package.excel_financials).exists());
    }

    #[tokio::test]
    async fn test_two_requests_get_distinct_namespaces() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = test_state(dir.path().to_path_buf(), Arc::new(BrokenConverter));

        let first = generate_dpr_package(&state, &brief()).await.expect("first");
        let second = generate_dpr_package(&state, &brief()).await.expect("second");
        assert_ne!(first.uid, second.uid);
        assert_ne!(first.docx, second.docx);
    }
}
