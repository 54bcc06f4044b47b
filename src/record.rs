//! Job record definitions
//!
//! A [`JobRecord`] is the flattened representation of one job posting, the
//! output unit of the scraper. Every field is always populated: extraction
//! fills missing text fields with the [`PLACEHOLDER`] sentinel and missing
//! skill lists with an empty vector, so no field is ever absent.

/// Sentinel used when a selector finds nothing on the detail page
pub const PLACEHOLDER: &str = "N/A";

/// One scraped job posting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    /// Job title
    pub title: String,

    /// Company name
    pub company: String,

    /// Ordered skill tags; empty when none were found
    pub skills: Vec<String>,

    /// Location text
    pub location: String,

    /// Years-of-experience text (e.g. "3-5 Yrs")
    pub experience: String,

    /// Full description text
    pub description: String,

    /// Detail page URL
    pub link: String,
}

impl JobRecord {
    /// Returns the skills joined with ", " for storage
    ///
    /// Empty string when no skills were extracted.
    pub fn skills_joined(&self) -> String {
        self.skills.join(", ")
    }
}
