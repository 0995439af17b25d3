//! Frequency records: `<latin> <cyrillic> <count>` lines

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Occurrence count of one word in the reference corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyRecord {
    pub latin: String,
    pub cyrillic: String,
    pub count: u64,
}

impl FrequencyRecord {
    pub fn new(latin: impl Into<String>, cyrillic: impl Into<String>, count: u64) -> Self {
        Self {
            latin: latin.into(),
            cyrillic: cyrillic.into(),
            count,
        }
    }

    /// Parse one persisted line; `line_no` is 1-based and only used in errors
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self, Error> {
        let malformed = || Error::MalformedRecord {
            line: line_no,
            content: line.to_string(),
        };

        let parts: Vec<&str> = line.split(' ').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(malformed());
        }
        let count = parts[2].parse::<u64>().map_err(|_| malformed())?;

        Ok(Self::new(parts[0], parts[1], count))
    }
}

impl FromStr for FrequencyRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s, 1)
    }
}

impl fmt::Display for FrequencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.latin, self.cyrillic, self.count)
    }
}
