//! Grouping and top-N ranking helpers

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::SummaryRow;

/// Per-category reduction applied to grouped values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Sum,
    Count,
    Mean,
}

impl Reduction {
    fn apply(self, mut values: Vec<f64>) -> f64 {
        if let Reduction::Count = self {
            return values.len() as f64;
        }
        // Fixed summation order keeps the result independent of row order.
        values.sort_by(f64::total_cmp);
        let sum: f64 = values.iter().sum();
        match self {
            Reduction::Mean if !values.is_empty() => sum / values.len() as f64,
            Reduction::Mean => 0.0,
            _ => sum,
        }
    }
}

/// Group `(category, value)` pairs and reduce each group.
pub fn group<'a, I>(items: I, reduction: Reduction) -> Vec<SummaryRow>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut groups: BTreeMap<&'a str, Vec<f64>> = BTreeMap::new();
    for (category, value) in items {
        groups.entry(category).or_default().push(value);
    }

    groups
        .into_iter()
        .map(|(category, values)| SummaryRow::new(category, reduction.apply(values)))
        .collect()
}

/// Ranking order: value descending, then category ascending.
pub fn rank_order(a: &SummaryRow, b: &SummaryRow) -> Ordering {
    b.value
        .total_cmp(&a.value)
        .then_with(|| a.category.cmp(&b.category))
}

/// Sort rows by [`rank_order`] and keep at most `limit` of them.
pub fn top_n(mut rows: Vec<SummaryRow>, limit: Option<usize>) -> Vec<SummaryRow> {
    rows.sort_by(rank_order);
    if let Some(n) = limit {
        rows.truncate(n);
    }
    rows
}
