//! Scrape coordinator - main listing/detail orchestration logic
//!
//! This module contains the main scrape loop that drives the browser over
//! the listing pages:
//! - Loading each listing page and simulating human interaction
//! - Detecting block pages (CAPTCHA / login wall)
//! - Iterating job cards and opening their detail pages
//! - Recovering listing state after per-card failures
//!
//! Card element handles are treated as invalid after any navigation: the
//! loop re-discovers cards on every iteration instead of reusing handles.

use crate::browser::{Pacing, Session};
use crate::config::Config;
use crate::record::{JobRecord, PLACEHOLDER};
use crate::scraper::extractor::extract_job;
use crate::scraper::retry::with_retries;
use crate::Result;
use std::path::Path;

/// Selector for one job card on a listing page
pub const JOB_CARD_SELECTOR: &str = "div.jobTuple";

/// Selector for the title link inside a job card
const CARD_TITLE_LINK_SELECTOR: &str = "a.title";

/// Markup substrings that indicate a CAPTCHA or login wall
const BLOCK_INDICATORS: &[&str] = &["captcha", "verify you are not a robot", "login", "sign in"];

/// Result of loading one listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Job cards are present and ready for processing
    Loaded {
        /// Number of cards discovered
        cards: usize,
    },

    /// A block page was served; the run must abort
    Blocked,

    /// The page loaded but contains no job cards; skip to the next page
    Empty,
}

/// Returns true if the raw page markup looks like a block page
pub fn detect_block(page_source: &str) -> bool {
    let lower = page_source.to_lowercase();
    BLOCK_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator))
}

/// Main scrape coordinator structure
///
/// Owns the browser session and the in-progress result sequence. The
/// session is torn down when the coordinator is consumed by [`run`],
/// before the accumulated records are handed back for post-processing.
///
/// [`run`]: Coordinator::run
pub struct Coordinator {
    config: Config,
    session: Session,
    pacing: Pacing,
    records: Vec<JobRecord>,
}

impl Coordinator {
    /// Launches a browser session and prepares a scrape run
    pub fn new(config: Config) -> Result<Self> {
        let session = Session::launch(&config.browser)?;
        let pacing = Pacing::new(config.pacing.clone());

        Ok(Self {
            config,
            session,
            pacing,
            records: Vec::new(),
        })
    }

    /// Runs the scrape and returns the accumulated records
    ///
    /// The records are returned whether the run completed normally, aborted
    /// on a block page, or failed partway: partial results always reach
    /// post-processing. The browser session is closed before returning.
    pub fn run(mut self) -> Vec<JobRecord> {
        if let Err(e) = self.scrape_pages() {
            tracing::error!("Error during scraping: {}", e);
        }

        let Coordinator { records, session, .. } = self;
        drop(session);
        tracing::info!("Browser session closed");
        tracing::info!("Total jobs scraped: {}", records.len());

        records
    }

    /// Iterates the configured listing pages
    fn scrape_pages(&mut self) -> Result<()> {
        for page in 1..=self.config.search.pages {
            let url = self
                .config
                .search
                .base_url
                .replace("{page}", &page.to_string());
            tracing::info!("Scraping page {}: {}", page, url);

            match self.load_listing_page(&url)? {
                PageOutcome::Blocked => {
                    tracing::error!("Blocked by CAPTCHA or login wall; aborting the run");
                    self.log_block_remediation();
                    break;
                }
                PageOutcome::Empty => {
                    continue;
                }
                PageOutcome::Loaded { cards } => {
                    tracing::info!("Found {} job cards on page {}", cards, page);
                    self.process_cards(cards);
                }
            }

            // Delay between pages to reduce detection risk
            if page < self.config.search.pages {
                self.pacing.page_delay();
            }
        }

        Ok(())
    }

    /// Loads one listing page and classifies what came back
    fn load_listing_page(&mut self, url: &str) -> Result<PageOutcome> {
        with_retries(
            self.pacing.retry_attempts(),
            self.pacing.retry_delay(),
            "listing page load",
            || self.session.navigate(url),
        )?;
        self.session.wait_for_body()?;

        self.simulate_human()?;

        let source = self.session.page_source()?;
        if detect_block(&source) {
            tracing::warn!(
                "CAPTCHA or login page detected. Saving page source to '{}'",
                self.config.output.block_dump_path
            );
            dump_markup(&self.config.output.block_dump_path, &source)?;
            return Ok(PageOutcome::Blocked);
        }

        let cards = if self.session.wait_for(JOB_CARD_SELECTOR).is_ok() {
            self.session.find_all(JOB_CARD_SELECTOR)?.len()
        } else {
            0
        };

        if cards == 0 {
            tracing::warn!(
                "No job cards found. Saving page source to '{}'",
                self.config.output.empty_dump_path
            );
            dump_markup(&self.config.output.empty_dump_path, &source)?;
            return Ok(PageOutcome::Empty);
        }

        Ok(PageOutcome::Loaded { cards })
    }

    /// Scripted scrolls and one pointer move to mimic human interaction timing
    fn simulate_human(&self) -> Result<()> {
        self.session.scroll_half()?;
        self.pacing.medium_pause();
        self.session.scroll_bottom()?;
        self.pacing.medium_pause();
        self.session.mouse_wiggle()?;
        self.pacing.short_pause();
        Ok(())
    }

    /// Processes every card on the current listing page
    ///
    /// A failed card is logged and recovery is attempted once (navigate
    /// back, wait for cards). If recovery itself fails the remainder of the
    /// page is abandoned; the run continues with the next page.
    fn process_cards(&mut self, total: usize) {
        for index in 0..total {
            if let Err(e) = self.process_card(index) {
                tracing::error!("Error processing job card {}: {}", index + 1, e);

                if let Err(recovery_err) = self.recover_listing() {
                    tracing::error!(
                        "Could not restore the listing page after card {}: {}; \
                         abandoning remaining cards on this page",
                        index + 1,
                        recovery_err
                    );
                    break;
                }
            }
        }
    }

    /// Opens one card's detail page, extracts a record, and navigates back
    fn process_card(&mut self, index: usize) -> Result<()> {
        // Handles from before the last navigation are stale; re-discover
        let cards = self.session.find_all(JOB_CARD_SELECTOR)?;
        let Some(card) = cards.get(index) else {
            tracing::warn!(
                "Job card {} is no longer present after reload; skipping",
                index + 1
            );
            return Ok(());
        };

        card.scroll_into_view()?;
        self.pacing.short_pause();

        let title_link = card.find_element(CARD_TITLE_LINK_SELECTOR)?;
        let link = title_link
            .get_attribute_value("href")?
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        title_link.move_mouse_over()?;
        title_link.click()?;
        tracing::info!("Clicked job card {}: {}", index + 1, link);

        self.session.wait_for_body()?;
        self.pacing.medium_pause();

        let source = self.session.page_source()?;
        let record = extract_job(&source, &link);
        tracing::info!("Scraped detail page for job: {}", record.title);
        self.records.push(record);

        self.return_to_listing()?;
        Ok(())
    }

    /// Navigates back to the listing and waits for cards to reappear
    fn return_to_listing(&self) -> Result<()> {
        self.session.history_back()?;
        self.session.wait_for(JOB_CARD_SELECTOR)?;
        self.pacing.medium_pause();
        Ok(())
    }

    /// Bounded attempt to restore the listing page after a card failure
    fn recover_listing(&self) -> Result<()> {
        with_retries(
            self.pacing.retry_attempts(),
            self.pacing.retry_delay(),
            "listing recovery",
            || self.return_to_listing(),
        )
    }

    /// Logs remediation suggestions after a block page abort
    fn log_block_remediation(&self) {
        tracing::info!("Suggestions:");
        tracing::info!(
            "- Open '{}' in a browser, solve the challenge, then rerun",
            self.config.output.block_dump_path
        );
        tracing::info!("- Wait 24 hours or switch to a different network");
        tracing::info!(
            "- If no jobs were found, check '{}' to verify the URL still returns listings",
            self.config.output.empty_dump_path
        );
    }
}

/// Persists raw page markup for offline diagnosis
fn dump_markup(path: &str, source: &str) -> Result<()> {
    std::fs::write(Path::new(path), source)?;
    Ok(())
}
