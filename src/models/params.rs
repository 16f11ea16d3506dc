//! Request parameters

use serde::Deserialize;

use crate::dataset::{parse_year, Dataset, YearParseError};

/// Raw query string, e.g. `/?year=2021`
#[derive(Debug, Deserialize, Default)]
pub struct YearQuery {
    pub year: Option<String>,
}

/// Validated dashboard options.
///
/// `year: None` means "most recent year in the dataset".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardParams {
    pub year: Option<i32>,
}

impl DashboardParams {
    pub fn from_query(query: &YearQuery) -> Result<Self, YearParseError> {
        let year = query.year.as_deref().map(parse_year).transpose()?;
        Ok(Self { year })
    }

    /// Year to display; `None` only when the dataset has no years at all.
    pub fn resolve(&self, dataset: &Dataset) -> Option<i32> {
        self.year.or_else(|| dataset.latest_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncidentRecord;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            IncidentRecord::new(2016, "A", 1.0, "DDoS", "IT", "Insider", 1.0, 1),
            IncidentRecord::new(2024, "B", 1.0, "DDoS", "IT", "Insider", 1.0, 1),
        ])
    }

    #[test]
    fn test_absent_year_defaults_to_latest() {
        let params = DashboardParams::from_query(&YearQuery::default()).unwrap();
        assert_eq!(params, DashboardParams { year: None });
        assert_eq!(params.resolve(&dataset()), Some(2024));
    }

    #[test]
    fn test_explicit_year_kept_even_if_unknown() {
        let query = YearQuery { year: Some("1999".into()) };
        let params = DashboardParams::from_query(&query).unwrap();
        assert_eq!(params.resolve(&dataset()), Some(1999));
    }

    #[test]
    fn test_unparseable_year_is_error() {
        let query = YearQuery { year: Some("latest".into()) };
        assert!(DashboardParams::from_query(&query).is_err());
    }
}
