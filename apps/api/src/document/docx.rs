//! DOCX assembly: renders the narrative document (cover block, one
//! page-break-separated block per section, the financial summary table and
//! the embedded chart). Built entirely from in-memory inputs; no external
//! calls happen at this stage.

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Pic, Run, Style, StyleType, Table, TableCell,
    TableRow,
};

use crate::finance::{FinancialProjection, METRICS};
use crate::document::markup::{parse_paragraph, MarkupParagraph};
use crate::generation::sections::Section;
use crate::models::brief::ProjectBrief;

const CHART_WIDTH_EMU: u32 = 6 * 914_400; // fixed 6" embed width

/// Formats a numeric cell with thousands separators and two decimals,
/// e.g. `1234567.891 -> "1,234,567.89"`.
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, f),
        None => (formatted.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{int_grouped}.{frac_part}")
}

/// Builds the display rows of the financial summary table: a header row
/// (`Year` + each metric) followed by one formatted row per period. Shared
/// by the DOCX table and the round-trip tests.
pub fn financial_table_rows(projection: &FinancialProjection) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(projection.rows.len() + 1);

    let mut header = vec!["Year".to_string()];
    header.extend(METRICS.iter().map(|m| m.to_string()));
    rows.push(header);

    for period in &projection.rows {
        let mut row = vec![period.label.clone()];
        row.extend(period.values().iter().map(|v| format_amount(*v)));
        rows.push(row);
    }
    rows
}

/// Writes the full DPR document to `out_path`. The chart image is embedded
/// only when it exists on disk.
pub fn write_dpr_docx(
    brief: &ProjectBrief,
    sections: &[Section],
    projection: &FinancialProjection,
    out_path: &Path,
    chart_path: &Path,
) -> Result<()> {
    let mut docx = Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .bold()
                .size(48),
        )
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .bold()
                .size(32),
        );

    docx = add_cover_block(docx, brief, projection);

    for section in sections {
        docx = add_section_block(docx, section);
    }

    docx = add_financial_block(docx, projection, chart_path)?;

    let file = File::create(out_path)
        .with_context(|| format!("failed to create {}", out_path.display()))?;
    docx.build()
        .pack(file)
        .map_err(|e| anyhow!("failed to pack docx: {e}"))?;
    Ok(())
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new()
        .style("Heading1")
        .add_run(Run::new().add_text(text))
}

fn add_cover_block(docx: Docx, brief: &ProjectBrief, projection: &FinancialProjection) -> Docx {
    let capacity = brief
        .capacity
        .map(|c| c.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    docx.add_paragraph(
        Paragraph::new()
            .style("Title")
            .add_run(Run::new().add_text(brief.title.as_str())),
    )
    .add_paragraph(meta_line(&format!(
        "Location: {}",
        brief.location.as_deref().unwrap_or("N/A")
    )))
    .add_paragraph(meta_line(&format!("Currency: {}", projection.currency)))
    .add_paragraph(meta_line(&format!("Capacity: {capacity}")))
    .add_paragraph(meta_line(&format!(
        "Short Description: {}",
        brief.short_description
    )))
    .add_paragraph(meta_line(&format!(
        "Generated on: {}",
        chrono::Local::now().format("%d %b %Y")
    )))
    .add_paragraph(page_break())
}

fn meta_line(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

fn add_section_block(mut docx: Docx, section: &Section) -> Docx {
    docx = docx.add_paragraph(heading(&section.title));

    for line in section.body_text().lines() {
        let Some(parsed) = parse_paragraph(line) else {
            continue;
        };
        let paragraph = match parsed {
            MarkupParagraph::Heading(text) => {
                Paragraph::new().add_run(Run::new().add_text(text).bold())
            }
            MarkupParagraph::Runs(runs) => {
                let mut paragraph = Paragraph::new();
                for run in runs {
                    let mut r = Run::new().add_text(run.text);
                    if run.bold {
                        r = r.bold();
                    }
                    paragraph = paragraph.add_run(r);
                }
                paragraph
            }
        };
        docx = docx.add_paragraph(paragraph);
    }

    docx.add_paragraph(page_break())
}

fn add_financial_block(
    mut docx: Docx,
    projection: &FinancialProjection,
    chart_path: &Path,
) -> Result<Docx> {
    docx = docx.add_paragraph(heading("Financial Projections (Summary)"));

    let rows = financial_table_rows(projection);
    let table_rows: Vec<TableRow> = rows
        .iter()
        .enumerate()
        .map(|(row_idx, cells)| {
            TableRow::new(
                cells
                    .iter()
                    .map(|cell| {
                        let mut run = Run::new().add_text(cell.as_str());
                        if row_idx == 0 {
                            run = run.bold();
                        }
                        TableCell::new().add_paragraph(Paragraph::new().add_run(run))
                    })
                    .collect(),
            )
        })
        .collect();
    docx = docx.add_table(Table::new(table_rows));

    if chart_path.exists() {
        let bytes = std::fs::read(chart_path)
            .with_context(|| format!("failed to read chart {}", chart_path.display()))?;
        let (px_w, px_h) = image::image_dimensions(chart_path)
            .with_context(|| format!("failed to probe chart {}", chart_path.display()))?;
        let height_emu =
            (CHART_WIDTH_EMU as u64 * px_h as u64 / px_w.max(1) as u64) as u32;

        docx = docx
            .add_paragraph(Paragraph::new())
            .add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Center)
                    .add_run(
                        Run::new().add_image(Pic::new(&bytes).size(CHART_WIDTH_EMU, height_emu)),
                    ),
            )
            .add_paragraph(
                Paragraph::new().align(AlignmentType::Center).add_run(
                    Run::new()
                        .add_text("Revenue & EBITDA Projection Chart")
                        .italic()
                        .size(18),
                ),
            );
    }

    Ok(docx)
}
