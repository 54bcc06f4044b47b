//! Post-processing of scraped records
//!
//! This module handles everything after the browser session is closed:
//! - Filtering records by location and experience
//! - Writing the filtered records CSV
//! - Computing and writing the top-skills frequency CSV
//!
//! Post-processing always runs on whatever was accumulated, so partial
//! results from an aborted run are still filtered and saved.

mod csv_output;
mod filter;
mod skills;

pub use csv_output::{write_jobs_csv, write_skills_csv};
pub use filter::JobFilter;
pub use skills::{top_skills, SkillCount};

use crate::config::Config;
use crate::record::JobRecord;
use crate::Result;

/// Filters the scraped records and writes both output files
///
/// An empty record set skips both outputs with a warning instead of
/// producing empty files.
pub fn process_results(config: &Config, records: &[JobRecord]) -> Result<()> {
    if records.is_empty() {
        tracing::warn!("No jobs scraped. Skipping filtering and saving.");
        return Ok(());
    }

    let filter = JobFilter::new(&config.filter)?;
    let filtered = filter.apply(records);
    tracing::info!(
        "Jobs after filtering ({}, experience {:?}): {}",
        config.filter.location,
        config.filter.experience_patterns,
        filtered.len()
    );

    write_jobs_csv(&config.output.jobs_path, &filtered)?;
    tracing::info!("Filtered data saved to '{}'", config.output.jobs_path);

    let table = top_skills(&filtered, config.output.top_skills);
    write_skills_csv(&config.output.skills_path, &table)?;
    tracing::info!(
        "Top {} skills saved to '{}'",
        table.len(),
        config.output.skills_path
    );
    for row in &table {
        tracing::info!("  {} ({})", row.skill, row.count);
    }

    Ok(())
}
