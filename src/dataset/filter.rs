//! Year filter - parsing the `year` parameter and selecting matching rows

use std::num::IntErrorKind;

use thiserror::Error;

use crate::models::IncidentRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearParseError {
    #[error("year is empty")]
    Empty,

    #[error("'{0}' is not a valid year")]
    NotAnInteger(String),

    #[error("year '{0}' is out of range")]
    OutOfRange(String),
}

/// Parse a textual year. Surrounding whitespace is ignored.
pub fn parse_year(raw: &str) -> Result<i32, YearParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(YearParseError::Empty);
    }
    trimmed.parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            YearParseError::OutOfRange(trimmed.to_string())
        }
        _ => YearParseError::NotAnInteger(trimmed.to_string()),
    })
}

/// Rows of the dataset whose year equals [`YearSubset::year`].
#[derive(Debug, Clone)]
pub struct YearSubset<'a> {
    pub year: i32,
    pub records: Vec<&'a IncidentRecord>,
}

impl<'a> YearSubset<'a> {
    pub fn new(year: i32, all: &'a [IncidentRecord]) -> Self {
        let records = all.iter().filter(|r| r.year == year).collect();
        Self { year, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a IncidentRecord> + '_ {
        self.records.iter().copied()
    }
}
