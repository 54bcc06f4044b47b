//! Scraper module for listing and detail page processing
//!
//! This module contains the core scraping logic, including:
//! - The page/card orchestration loop
//! - Block page detection
//! - Detail page field extraction
//! - Bounded retries for flaky navigation

mod coordinator;
mod extractor;
mod retry;

pub use coordinator::{detect_block, Coordinator, PageOutcome, JOB_CARD_SELECTOR};
pub use extractor::extract_job;
pub use retry::with_retries;

use crate::config::Config;
use crate::record::JobRecord;
use crate::Result;

/// Runs a complete scrape operation
///
/// This is the main entry point for scraping. It will:
/// 1. Launch a browser session
/// 2. Visit each configured listing page
/// 3. Open each job card's detail page and extract a record
/// 4. Close the browser session
///
/// The accumulated records are returned for post-processing even when the
/// run aborted on a block page or failed partway.
pub fn run_scrape(config: &Config) -> Result<Vec<JobRecord>> {
    let coordinator = Coordinator::new(config.clone())?;
    Ok(coordinator.run())
}
