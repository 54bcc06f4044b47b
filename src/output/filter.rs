//! Job record filtering
//!
//! Filters scraped records down to the location and experience range the
//! run is configured for. The experience match is word-boundary delimited
//! rather than a raw substring test, so a pattern of "3" matches "3 Yrs"
//! and "3-5 Yrs" but not "13-15 Yrs".

use crate::config::FilterConfig;
use crate::record::JobRecord;
use crate::Result;
use regex::Regex;

/// Compiled filter predicate over job records
#[derive(Debug, Clone)]
pub struct JobFilter {
    location: String,
    experience: Regex,
}

impl JobFilter {
    /// Builds a filter from the configured location and experience patterns
    pub fn new(config: &FilterConfig) -> Result<Self> {
        let alternatives = config
            .experience_patterns
            .iter()
            .map(|pattern| regex::escape(pattern.trim()))
            .collect::<Vec<_>>()
            .join("|");
        let experience = Regex::new(&format!(r"(?i)\b(?:{alternatives})\b"))?;

        Ok(Self {
            location: config.location.to_lowercase(),
            experience,
        })
    }

    /// Returns true if the record passes both predicates
    pub fn matches(&self, record: &JobRecord) -> bool {
        record.location.to_lowercase().contains(&self.location)
            && self.experience.is_match(&record.experience)
    }

    /// Returns the subset of `records` that pass the filter, in order
    pub fn apply(&self, records: &[JobRecord]) -> Vec<JobRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
