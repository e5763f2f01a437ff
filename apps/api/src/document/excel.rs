//! XLSX export of the financial projection: raw numbers, one row per
//! period, matching the summary table's column order.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::finance::{FinancialProjection, METRICS};

pub fn write_financial_workbook(projection: &FinancialProjection, out_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Financials")
        .context("invalid worksheet name")?;

    worksheet.write_string(0, 0, "Year")?;
    for (col, metric) in METRICS.iter().enumerate() {
        worksheet.write_string(0, (col + 1) as u16, *metric)?;
    }

    for (row_idx, period) in projection.rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        worksheet.write_string(row, 0, &period.label)?;
        for (col, value) in period.values().iter().enumerate() {
            worksheet.write_number(row, (col + 1) as u16, *value)?;
        }
    }

    workbook
        .save(out_path)
        .with_context(|| format!("failed to save workbook {}", out_path.display()))?;
    Ok(())
}
