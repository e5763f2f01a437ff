//! Financial chart: line chart with markers, one series per metric,
//! rendered to a raster PNG and later embedded into the DOCX and the
//! summary PDF page.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::prelude::*;

use crate::document::docx::format_amount;
use crate::finance::{FinancialProjection, METRICS};

const CHART_TITLE: &str = "Revenue & EBITDA (Projection)";
const CHART_SIZE: (u32, u32) = (960, 720);

// tab10-style palette, one color per metric
const SERIES_COLORS: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
];

/// Renders the projection chart to `out_png`. Purely derived from the
/// financial table; any drawing failure is reported to the caller, which
/// treats the chart as best-effort.
pub fn render_financial_chart(projection: &FinancialProjection, out_png: &Path) -> Result<()> {
    let series: Vec<(&str, Vec<(f64, f64)>)> = METRICS
        .iter()
        .enumerate()
        .map(|(metric_idx, name)| {
            let points = projection
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| (i as f64, row.values()[metric_idx]))
                .collect();
            (*name, points)
        })
        .collect();

    let all_values = series.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.1));
    let lo = all_values.clone().fold(f64::INFINITY, f64::min);
    let hi = all_values.fold(f64::NEG_INFINITY, f64::max);
    let pad = ((hi - lo).abs()).max(1.0) * 0.05;
    let (y_lo, y_hi) = (lo - pad, hi + pad);

    let x_max = (projection.rows.len().saturating_sub(1)) as f64;

    let root = BitMapBackend::new(out_png, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("chart fill: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 28))
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(110)
        .build_cartesian_2d(0f64..x_max, y_lo..y_hi)
        .map_err(|e| anyhow!("chart build: {e}"))?;

    chart
        .configure_mesh()
        .x_labels(projection.rows.len())
        .x_label_formatter(&|x| format!("Year {}", x.round() as i64 + 1))
        .y_label_formatter(&|v| format_amount(*v))
        .draw()
        .map_err(|e| anyhow!("chart mesh: {e}"))?;

    for (idx, (name, points)) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(|e| anyhow!("chart series '{name}': {e}"))?
            .label(*name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
            )
            .map_err(|e| anyhow!("chart markers '{name}': {e}"))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| anyhow!("chart legend: {e}"))?;

    root.present().map_err(|e| anyhow!("chart present: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::project_financials;
    use crate::models::brief::ProjectBrief;

    #[test]
    fn test_chart_renders_to_png() {
        let brief = ProjectBrief {
            title: "T".to_string(),
            short_description: "D".to_string(),
            location: None,
            capacity: Some(500),
            currency: "INR".to_string(),
            additional: None,
        };
        let projection = project_financials(&brief);

        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("finance.png");
        if render_financial_chart(&projection, &out).is_ok() {
            let (w, h) = image::image_dimensions(&out).expect("png readable");
            assert_eq!((w, h), CHART_SIZE);
        }
        // rendering may fail on hosts without fonts; the pipeline treats the
        // chart as best-effort, so a clean Err is acceptable here too.
    }
}
