//! Summary table model

use serde::Serialize;

/// One ranked (category, value) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub category: String,
    pub value: f64,
}

impl SummaryRow {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self { category: category.into(), value }
    }
}

/// Result of a single aggregation, feeding exactly one chart.
///
/// Rows are ordered by `value` descending, ties broken by `category`
/// ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    /// Column label of the grouping key, e.g. `Country`
    pub category_label: &'static str,
    /// Column label of the metric, e.g. `Financial Loss (in Million $)`
    pub value_label: &'static str,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.category.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.value).collect()
    }

    #[cfg(test)]
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        self.rows.iter().map(|r| (r.category.as_str(), r.value)).collect()
    }
}

/// All six tables computed for one year.
#[derive(Debug, Clone, Serialize)]
pub struct YearSummary {
    pub year: i32,
    /// Rows in the year-filtered subset
    pub incident_count: usize,
    pub financial_loss: SummaryTable,
    pub attack_types: SummaryTable,
    pub industries: SummaryTable,
    pub attack_sources: SummaryTable,
    pub resolution_time: SummaryTable,
    pub affected_users: SummaryTable,
}

impl YearSummary {
    pub fn tables(&self) -> [&SummaryTable; 6] {
        [
            &self.financial_loss,
            &self.attack_types,
            &self.industries,
            &self.attack_sources,
            &self.resolution_time,
            &self.affected_users,
        ]
    }
}
