//! Analytics - the per-year aggregation pipeline
//!
//! Six independent aggregations over a [`YearSubset`]. Each one re-scans
//! the subset; none share intermediate state.
//!
//! | Table           | Group by        | Metric          | Reduction | Rows   |
//! |-----------------|-----------------|-----------------|-----------|--------|
//! | financial_loss  | Country         | Financial Loss  | sum       | top N  |
//! | attack_types    | Attack Type     | records         | count     | top N  |
//! | industries      | Target Industry | records         | count     | all    |
//! | attack_sources  | Attack Source   | records         | count     | top N  |
//! | resolution_time | Country         | Resolution Time | mean      | top N  |
//! | affected_users  | Country         | Affected Users  | sum       | top N  |

pub mod rank;

use crate::dataset::YearSubset;
use crate::models::{columns, SummaryTable, YearSummary};

use rank::{group, top_n, Reduction};

pub const COUNT_LABEL: &str = "Count";

/// Top countries by total financial loss
pub fn financial_loss_leaders(subset: &YearSubset<'_>, limit: usize) -> SummaryTable {
    let rows = group(
        subset.iter().map(|r| (r.country.as_str(), r.financial_loss)),
        Reduction::Sum,
    );
    SummaryTable {
        category_label: columns::COUNTRY,
        value_label: columns::FINANCIAL_LOSS,
        rows: top_n(rows, Some(limit)),
    }
}

/// Most frequent attack types
pub fn attack_type_mix(subset: &YearSubset<'_>, limit: usize) -> SummaryTable {
    let rows = group(
        subset.iter().map(|r| (r.attack_type.as_str(), 1.0)),
        Reduction::Count,
    );
    SummaryTable {
        category_label: columns::ATTACK_TYPE,
        value_label: COUNT_LABEL,
        rows: top_n(rows, Some(limit)),
    }
}

/// Incident count for every targeted industry
pub fn industry_exposure(subset: &YearSubset<'_>) -> SummaryTable {
    let rows = group(
        subset.iter().map(|r| (r.target_industry.as_str(), 1.0)),
        Reduction::Count,
    );
    SummaryTable {
        category_label: columns::TARGET_INDUSTRY,
        value_label: COUNT_LABEL,
        rows: top_n(rows, None),
    }
}

/// Most frequent attack sources
pub fn attack_source_ranking(subset: &YearSubset<'_>, limit: usize) -> SummaryTable {
    let rows = group(
        subset.iter().map(|r| (r.attack_source.as_str(), 1.0)),
        Reduction::Count,
    );
    SummaryTable {
        category_label: columns::ATTACK_SOURCE,
        value_label: COUNT_LABEL,
        rows: top_n(rows, Some(limit)),
    }
}

/// Countries with the highest mean resolution time
pub fn resolution_time_leaders(subset: &YearSubset<'_>, limit: usize) -> SummaryTable {
    let rows = group(
        subset.iter().map(|r| (r.country.as_str(), r.resolution_time)),
        Reduction::Mean,
    );
    SummaryTable {
        category_label: columns::COUNTRY,
        value_label: columns::RESOLUTION_TIME,
        rows: top_n(rows, Some(limit)),
    }
}

/// Countries with the most affected users
pub fn user_impact_leaders(subset: &YearSubset<'_>, limit: usize) -> SummaryTable {
    let rows = group(
        subset.iter().map(|r| (r.country.as_str(), r.affected_users as f64)),
        Reduction::Sum,
    );
    SummaryTable {
        category_label: columns::COUNTRY,
        value_label: columns::AFFECTED_USERS,
        rows: top_n(rows, Some(limit)),
    }
}

/// Run all six aggregations for one year
pub fn summarize(subset: &YearSubset<'_>, limit: usize) -> YearSummary {
    YearSummary {
        year: subset.year,
        incident_count: subset.len(),
        financial_loss: financial_loss_leaders(subset, limit),
        attack_types: attack_type_mix(subset, limit),
        industries: industry_exposure(subset),
        attack_sources: attack_source_ranking(subset, limit),
        resolution_time: resolution_time_leaders(subset, limit),
        affected_users: user_impact_leaders(subset, limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::IncidentRecord;

    fn rec(year: i32, country: &str, loss: f64) -> IncidentRecord {
        IncidentRecord::new(year, country, loss, "Phishing", "Banking", "Hacker Group", 10.0, 100)
    }

    fn wide_year() -> Vec<IncidentRecord> {
        let countries = ["USA", "UK", "China", "India", "Brazil", "Japan", "Germany"];
        let attacks = ["Phishing", "Ransomware", "DDoS", "Malware", "SQL Injection", "Man-in-the-Middle"];
        let industries = ["Banking", "IT", "Retail", "Healthcare", "Education", "Telecommunications", "Government"];
        let sources = ["Hacker Group", "Nation-state", "Insider", "Unknown"];
        (0..42)
            .map(|i| {
                IncidentRecord::new(
                    2023,
                    countries[i % countries.len()],
                    (i * 7 % 13) as f64 + 0.5,
                    attacks[i % attacks.len()],
                    industries[(i * 3) % industries.len()],
                    sources[i % sources.len()],
                    (i % 9) as f64 * 4.0,
                    (i as u64 + 1) * 1000,
                )
            })
            .collect()
    }

    #[test]
    fn test_financial_loss_scenario() {
        let ds = Dataset::from_records(vec![rec(2020, "A", 10.0), rec(2020, "B", 5.0), rec(2021, "A", 7.0)]);

        let y2020 = financial_loss_leaders(&ds.for_year(2020), 5);
        assert_eq!(y2020.pairs(), vec![("A", 10.0), ("B", 5.0)]);

        let y2021 = financial_loss_leaders(&ds.for_year(2021), 5);
        assert_eq!(y2021.pairs(), vec![("A", 7.0)]);

        let y2022 = financial_loss_leaders(&ds.for_year(2022), 5);
        assert!(y2022.is_empty());
    }

    #[test]
    fn test_top_tables_capped_and_sorted() {
        let ds = Dataset::from_records(wide_year());
        let summary = summarize(&ds.for_year(2023), 5);

        for table in [
            &summary.financial_loss,
            &summary.attack_types,
            &summary.attack_sources,
            &summary.resolution_time,
            &summary.affected_users,
        ] {
            assert!(table.len() <= 5, "{} has {} rows", table.value_label, table.len());
            assert!(!table.is_empty());
            let values = table.values();
            assert!(values.windows(2).all(|w| w[0] >= w[1]), "{values:?}");
        }
        assert_eq!(summary.attack_types.len(), 5);
        assert_eq!(summary.attack_sources.len(), 4);
    }

    #[test]
    fn test_industry_exposure_keeps_all_categories() {
        let ds = Dataset::from_records(wide_year());
        let table = industry_exposure(&ds.for_year(2023));
        assert_eq!(table.len(), 7);
        let total: f64 = table.values().iter().sum();
        assert_eq!(total, 42.0);
    }

    #[test]
    fn test_counts_and_mean() {
        let ds = Dataset::from_records(vec![
            IncidentRecord::new(2019, "A", 1.0, "DDoS", "IT", "Insider", 10.0, 5),
            IncidentRecord::new(2019, "A", 1.0, "DDoS", "IT", "Unknown", 30.0, 7),
            IncidentRecord::new(2019, "B", 1.0, "Malware", "Retail", "Insider", 25.0, 100),
        ]);
        let subset = ds.for_year(2019);

        assert_eq!(attack_type_mix(&subset, 5).pairs(), vec![("DDoS", 2.0), ("Malware", 1.0)]);
        assert_eq!(attack_source_ranking(&subset, 5).pairs(), vec![("Insider", 2.0), ("Unknown", 1.0)]);
        assert_eq!(resolution_time_leaders(&subset, 5).pairs(), vec![("B", 25.0), ("A", 20.0)]);
        assert_eq!(user_impact_leaders(&subset, 5).pairs(), vec![("B", 100.0), ("A", 12.0)]);
    }

    #[test]
    fn test_shuffled_input_same_summary() {
        let rows = wide_year();
        let mut shuffled = rows.clone();
        shuffled.reverse();
        shuffled.rotate_left(17);

        let a = Dataset::from_records(rows);
        let b = Dataset::from_records(shuffled);
        let sa = summarize(&a.for_year(2023), 5);
        let sb = summarize(&b.for_year(2023), 5);

        for (ta, tb) in sa.tables().iter().zip(sb.tables()) {
            assert_eq!(*ta, tb);
        }
    }

    #[test]
    fn test_empty_year_yields_empty_tables() {
        let ds = Dataset::from_records(vec![rec(2020, "A", 10.0)]);
        let summary = summarize(&ds.for_year(1990), 5);
        assert_eq!(summary.incident_count, 0);
        assert!(summary.tables().iter().all(|t| t.is_empty()));
    }

    #[test]
    fn test_categories_come_from_subset() {
        let ds = Dataset::from_records(vec![rec(2020, "A", 1.0), rec(2021, "Z", 99.0)]);
        let summary = summarize(&ds.for_year(2020), 5);
        assert_eq!(summary.financial_loss.categories(), vec!["A"]);
        assert_eq!(summary.affected_users.categories(), vec!["A"]);
    }
}
