//! CSV writers for the two output files
//!
//! Column names match the scraped field names: the jobs file carries
//! Title/Company/Skills/Location/Experience/Description/Link, the skills
//! file carries Skill/Count.

use crate::output::skills::SkillCount;
use crate::record::JobRecord;
use crate::Result;
use serde::Serialize;
use std::path::Path;

/// Flattened CSV row for one job record
#[derive(Debug, Serialize)]
struct JobRow<'a> {
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Company")]
    company: &'a str,
    #[serde(rename = "Skills")]
    skills: String,
    #[serde(rename = "Location")]
    location: &'a str,
    #[serde(rename = "Experience")]
    experience: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Link")]
    link: &'a str,
}

impl<'a> From<&'a JobRecord> for JobRow<'a> {
    fn from(record: &'a JobRecord) -> Self {
        Self {
            title: &record.title,
            company: &record.company,
            skills: record.skills_joined(),
            location: &record.location,
            experience: &record.experience,
            description: &record.description,
            link: &record.link,
        }
    }
}

/// Writes the filtered job records to a CSV file
pub fn write_jobs_csv<P: AsRef<Path>>(path: P, records: &[JobRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(JobRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the skill frequency table to a CSV file
pub fn write_skills_csv<P: AsRef<Path>>(path: P, table: &[SkillCount]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in table {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
