//! Financial Projector: closed-form five-year projection derived from the
//! brief's capacity and numeric overrides.
//!
//! Growth rates are fixed design constants: revenue grows 5% per year,
//! variable cost 3%, fixed cost 4%. They model optimistic revenue growth
//! outpacing cost growth and are not configurable.

use serde::Serialize;

use crate::models::brief::ProjectBrief;

pub const PERIOD_COUNT: usize = 5;

/// Column headers of the summary table, in display order.
pub const METRICS: [&str; 4] = ["Revenue", "Variable Cost", "Fixed Cost", "EBITDA"];

const REVENUE_GROWTH: f64 = 0.05;
const VARIABLE_COST_GROWTH: f64 = 0.03;
const FIXED_COST_GROWTH: f64 = 0.04;

const DEFAULT_CAPACITY: f64 = 1000.0;
const DEFAULT_PRICE_PER_UNIT: f64 = 100.0;
const DEFAULT_VARIABLE_COST: f64 = 40.0;
const DEFAULT_FIXED_ANNUAL: f64 = 200_000.0;
const DEFAULT_CAPEX: f64 = 5_000_000.0;
const DEFAULT_LABOR: f64 = 500_000.0;
const DEFAULT_MAINTENANCE: f64 = 200_000.0;
const DEFAULT_UTILITIES: f64 = 150_000.0;

/// One projected period. Invariant: `ebitda = revenue - variable_cost - fixed_cost`.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodRow {
    pub label: String,
    pub revenue: f64,
    pub variable_cost: f64,
    pub fixed_cost: f64,
    pub ebitda: f64,
}

impl PeriodRow {
    /// Metric values in `METRICS` column order.
    pub fn values(&self) -> [f64; 4] {
        [self.revenue, self.variable_cost, self.fixed_cost, self.ebitda]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OpexBreakdown {
    pub labor: f64,
    pub maintenance: f64,
    pub utilities: f64,
}

/// The full projection: exactly `PERIOD_COUNT` rows plus capex / opex metadata.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialProjection {
    pub rows: Vec<PeriodRow>,
    pub capex: f64,
    pub opex: OpexBreakdown,
    pub currency: String,
}

/// Pure computation: no I/O, no error path. Missing inputs silently default.
pub fn project_financials(brief: &ProjectBrief) -> FinancialProjection {
    // Zero capacity counts as missing, same as an absent field.
    let capacity = brief
        .capacity
        .filter(|c| *c > 0)
        .map(f64::from)
        .unwrap_or(DEFAULT_CAPACITY);
    let price_per_unit = brief.override_or("price_per_unit", DEFAULT_PRICE_PER_UNIT);
    let variable_cost_per_unit = brief.override_or("variable_cost", DEFAULT_VARIABLE_COST);
    let fixed_annual_overheads = brief.override_or("fixed_annual", DEFAULT_FIXED_ANNUAL);

    let rows = (0..PERIOD_COUNT)
        .map(|i| {
            let growth = i as f64;
            let revenue = capacity * price_per_unit * (1.0 + REVENUE_GROWTH * growth);
            let variable_cost =
                capacity * variable_cost_per_unit * (1.0 + VARIABLE_COST_GROWTH * growth);
            let fixed_cost = fixed_annual_overheads * (1.0 + FIXED_COST_GROWTH * growth);
            PeriodRow {
                label: format!("Year {}", i + 1),
                revenue,
                variable_cost,
                fixed_cost,
                ebitda: revenue - variable_cost - fixed_cost,
            }
        })
        .collect();

    FinancialProjection {
        rows,
        capex: brief.override_or("capex", DEFAULT_CAPEX),
        opex: OpexBreakdown {
            labor: brief.override_or("labor", DEFAULT_LABOR),
            maintenance: brief.override_or("maintenance", DEFAULT_MAINTENANCE),
            utilities: brief.override_or("utilities", DEFAULT_UTILITIES),
        },
        currency: brief.currency.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn brief(capacity: Option<u32>, additional: Option<HashMap<String, f64>>) -> ProjectBrief {
        ProjectBrief {
            title: "T".to_string(),
            short_description: "D".to_string(),
            location: None,
            capacity,
            currency: "INR".to_string(),
            additional,
        }
    }

    #[test]
    fn test_always_five_periods() {
        for capacity in [None, Some(1), Some(500), Some(1_000_000)] {
            let projection = project_financials(&brief(capacity, None));
            assert_eq!(projection.rows.len(), PERIOD_COUNT);
        }
    }

    #[test]
    fn test_ebitda_identity_holds_per_row() {
        let projection = project_financials(&brief(Some(500), None));
        for row in &projection.rows {
            let expected = row.revenue - row.variable_cost - row.fixed_cost;
            assert!(
                (row.ebitda - expected).abs() < 1e-9,
                "ebitda mismatch in {}",
                row.label
            );
        }
    }

    #[test]
    fn test_components_grow_monotonically() {
        let projection = project_financials(&brief(None, None));
        for pair in projection.rows.windows(2) {
            assert!(pair[1].revenue > pair[0].revenue);
            assert!(pair[1].variable_cost > pair[0].variable_cost);
            assert!(pair[1].fixed_cost > pair[0].fixed_cost);
        }
    }

    #[test]
    fn test_zero_capacity_defaults_and_still_grows() {
        let zero = project_financials(&brief(Some(0), None));
        let absent = project_financials(&brief(None, None));
        for (z, a) in zero.rows.iter().zip(&absent.rows) {
            assert!((z.revenue - a.revenue).abs() < 1e-9);
            assert!((z.variable_cost - a.variable_cost).abs() < 1e-9);
        }
        for pair in zero.rows.windows(2) {
            assert!(pair[1].revenue > pair[0].revenue);
            assert!(pair[1].variable_cost > pair[0].variable_cost);
        }
    }

    #[test]
    fn test_default_first_year_values() {
        let projection = project_financials(&brief(None, None));
        let first = &projection.rows[0];
        assert_eq!(first.label, "Year 1");
        assert!((first.revenue - 100_000.0).abs() < 1e-9);
        assert!((first.variable_cost - 40_000.0).abs() < 1e-9);
        assert!((first.fixed_cost - 200_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_overrides_are_honored() {
        let additional = HashMap::from([
            ("price_per_unit".to_string(), 10.0),
            ("variable_cost".to_string(), 2.0),
            ("fixed_annual".to_string(), 1_000.0),
            ("capex".to_string(), 42.0),
            ("labor".to_string(), 7.0),
        ]);
        let projection = project_financials(&brief(Some(100), Some(additional)));
        let first = &projection.rows[0];
        assert!((first.revenue - 1_000.0).abs() < 1e-9);
        assert!((first.variable_cost - 200.0).abs() < 1e-9);
        assert!((first.fixed_cost - 1_000.0).abs() < 1e-9);
        assert!((projection.capex - 42.0).abs() < 1e-9);
        assert!((projection.opex.labor - 7.0).abs() < 1e-9);
        // untouched defaults
        assert!((projection.opex.maintenance - 200_000.0).abs() < 1e-9);
    }
}
