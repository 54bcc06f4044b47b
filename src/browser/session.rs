//! Browser session management
//!
//! Wraps a `headless_chrome` browser and tab behind a [`Session`] handle that
//! owns the Chrome process for its whole lifetime. Dropping the session tears
//! the browser down, so cleanup is guaranteed no matter how the scrape loop
//! exits.

use crate::config::BrowserConfig;
use crate::{HarvestError, Result};
use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Chrome flags that soften the most common automation fingerprints
const ANTI_DETECTION_ARGS: &[&str] = &[
    "--disable-blink-features=AutomationControlled",
    "--disable-gpu",
    "--no-sandbox",
    "--disable-webgl",
    "--disable-notifications",
];

/// An exclusive handle on one browser tab
///
/// The underlying Chrome process is killed when this value is dropped.
pub struct Session {
    // Held so the Chrome process outlives the tab handle
    _browser: Browser,
    tab: Arc<Tab>,
    wait_timeout: Duration,
}

impl Session {
    /// Launches Chrome and opens a fresh tab
    ///
    /// # Arguments
    ///
    /// * `config` - Browser options (binary path, headless mode, window size,
    ///   user agent, wait timeout)
    pub fn launch(config: &BrowserConfig) -> Result<Self> {
        let user_agent_arg = format!("--user-agent={}", config.user_agent);

        let mut args: Vec<&OsStr> = ANTI_DETECTION_ARGS
            .iter()
            .map(|arg| OsStr::new(arg))
            .collect();
        args.push(OsStr::new(&user_agent_arg));

        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .path(config.chrome_path.clone().map(PathBuf::from))
            .args(args)
            // Long sleeps between commands must not kill the browser
            .idle_browser_timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| HarvestError::Browser(e.to_string()))?;

        let browser = Browser::new(options)?;
        let tab = browser.new_tab()?;

        let wait_timeout = Duration::from_secs(config.page_load_timeout_secs);
        tab.set_default_timeout(wait_timeout);

        tracing::debug!("Browser session launched (headless: {})", config.headless);

        Ok(Self {
            _browser: browser,
            tab,
            wait_timeout,
        })
    }

    /// Navigates the tab to `url` and waits for the navigation to settle
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| HarvestError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Waits (bounded) for the document body to be present
    pub fn wait_for_body(&self) -> Result<()> {
        self.wait_for(BODY_SELECTOR)?;
        Ok(())
    }

    /// Waits (bounded) for the first element matching `selector`
    pub fn wait_for(&self, selector: &str) -> Result<Element<'_>> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, self.wait_timeout)
            .map_err(|_| HarvestError::WaitTimeout {
                selector: selector.to_string(),
            })
    }

    /// Returns all elements currently matching `selector`
    ///
    /// Element handles are invalidated by any navigation; callers must
    /// re-query after going back or following a link.
    pub fn find_all(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        // find_elements reports zero matches as an error; treat that as empty
        match self.tab.find_elements(selector) {
            Ok(elements) => Ok(elements),
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Returns the raw markup of the current page
    pub fn page_source(&self) -> Result<String> {
        Ok(self.tab.get_content()?)
    }

    /// Returns the current document title
    pub fn title(&self) -> Result<String> {
        Ok(self.tab.get_title()?)
    }

    /// Scrolls the window to half the document height
    pub fn scroll_half(&self) -> Result<()> {
        self.tab
            .evaluate("window.scrollTo(0, document.body.scrollHeight / 2);", false)?;
        Ok(())
    }

    /// Scrolls the window to the bottom of the document
    pub fn scroll_bottom(&self) -> Result<()> {
        self.tab
            .evaluate("window.scrollTo(0, document.body.scrollHeight);", false)?;
        Ok(())
    }

    /// Moves the synthetic pointer over the document body
    pub fn mouse_wiggle(&self) -> Result<()> {
        let body = self.wait_for(BODY_SELECTOR)?;
        body.move_mouse_over()?;
        Ok(())
    }

    /// Navigates one step back in the tab's history
    pub fn history_back(&self) -> Result<()> {
        self.tab.evaluate("window.history.back();", false)?;
        Ok(())
    }
}

/// Selector for the document body element
pub const BODY_SELECTOR: &str = "body";
