//! Dataset module - the in-memory incident table
//!
//! Loaded once at startup and shared read-only between requests.
//!
//! ```text
//!   CSV file ──▶ loader ──▶ Dataset { records, years }
//!                               │
//!                               ▼ for_year(y)
//!                           YearSubset ──▶ analytics
//! ```

pub mod filter;
pub mod loader;

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

pub use filter::{parse_year, YearParseError, YearSubset};
pub use loader::DatasetError;

use crate::models::IncidentRecord;

#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<IncidentRecord>,
    /// Distinct years, most recent first
    years: Vec<i32>,
}

impl Dataset {
    /// Load and validate the CSV file at `path`
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let records = loader::load_file(path)?;
        Ok(Self::from_records(records))
    }

    /// Parse CSV from an in-memory reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let records = loader::read_records(reader)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<IncidentRecord>) -> Self {
        let years = records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect();
        Self { records, years }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years present, sorted descending
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Most recent year, the dashboard's default selection
    pub fn latest_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn for_year(&self, year: i32) -> YearSubset<'_> {
        YearSubset::new(year, &self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            IncidentRecord::new(2018, "A", 1.0, "Malware", "IT", "Insider", 1.0, 1),
            IncidentRecord::new(2021, "B", 2.0, "Malware", "IT", "Insider", 1.0, 1),
            IncidentRecord::new(2018, "C", 3.0, "Malware", "IT", "Insider", 1.0, 1),
            IncidentRecord::new(2015, "D", 4.0, "Malware", "IT", "Insider", 1.0, 1),
        ])
    }

    #[test]
    fn test_years_distinct_descending() {
        let ds = sample();
        assert_eq!(ds.years(), &[2021, 2018, 2015]);
        assert_eq!(ds.latest_year(), Some(2021));
    }

    #[test]
    fn test_filter_round_trips_year_set() {
        let ds = sample();
        for &year in ds.years() {
            let subset = ds.for_year(year);
            let seen: BTreeSet<i32> = subset.iter().map(|r| r.year).collect();
            assert_eq!(seen, BTreeSet::from([year]));
        }
        assert_eq!(ds.for_year(2018).len(), 2);
    }

    #[test]
    fn test_from_reader() {
        let csv = "Year,Country,Financial Loss (in Million $),Attack Type,Target Industry,Attack Source,Incident Resolution Time (in Hours),Number of Affected Users\n\
                   2020,A,10,DDoS,Banking,Nation-state,5,100\n\
                   2022,B,3,DDoS,Banking,Nation-state,5,100\n";
        let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.latest_year(), Some(2022));
    }

    #[test]
    fn test_empty_dataset_has_no_default_year() {
        let ds = Dataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.latest_year(), None);
    }
}
