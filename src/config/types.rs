use serde::Deserialize;

/// Main configuration structure for Naukri-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    pub browser: BrowserConfig,
    pub pacing: PacingConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

/// Search target configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Listing URL template; `{page}` is replaced with the page number
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Site home page, used by the connectivity probe
    #[serde(rename = "home-url")]
    pub home_url: String,

    /// Number of listing pages to visit
    pub pages: u32,
}

/// Browser session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    /// Path to the Chrome/Chromium binary; autodetected when omitted
    #[serde(rename = "chrome-path")]
    pub chrome_path: Option<String>,

    /// Run Chrome without a visible window
    pub headless: bool,

    /// Browser window width in pixels
    #[serde(rename = "window-width")]
    pub window_width: u32,

    /// Browser window height in pixels
    #[serde(rename = "window-height")]
    pub window_height: u32,

    /// User agent string presented to the site
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Upper bound for element waits after navigation (seconds)
    #[serde(rename = "page-load-timeout-secs")]
    pub page_load_timeout_secs: u64,
}

/// Human-interaction pacing configuration
///
/// All sleeps are drawn uniformly at random from the configured bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct PacingConfig {
    /// Short pause (card scroll, mouse move) bounds in milliseconds
    #[serde(rename = "short-pause-min-ms")]
    pub short_pause_min_ms: u64,
    #[serde(rename = "short-pause-max-ms")]
    pub short_pause_max_ms: u64,

    /// Medium pause (after navigation, scroll settle) bounds in milliseconds
    #[serde(rename = "medium-pause-min-ms")]
    pub medium_pause_min_ms: u64,
    #[serde(rename = "medium-pause-max-ms")]
    pub medium_pause_max_ms: u64,

    /// Delay between listing pages in milliseconds
    #[serde(rename = "page-delay-min-ms")]
    pub page_delay_min_ms: u64,
    #[serde(rename = "page-delay-max-ms")]
    pub page_delay_max_ms: u64,

    /// Attempts for flaky navigation steps before giving up
    #[serde(rename = "retry-attempts")]
    pub retry_attempts: u32,

    /// Fixed delay between retry attempts in milliseconds
    #[serde(rename = "retry-delay-ms")]
    pub retry_delay_ms: u64,
}

/// Result filtering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Location keyword; matched case-insensitively as a substring
    pub location: String,

    /// Experience patterns (e.g. "2-4", "3-5", "3"); matched on word boundaries
    #[serde(rename = "experience-patterns")]
    pub experience_patterns: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path for the filtered job records CSV
    #[serde(rename = "jobs-path")]
    pub jobs_path: String,

    /// Path for the skill frequency CSV
    #[serde(rename = "skills-path")]
    pub skills_path: String,

    /// Where raw markup is dumped when a block page is detected
    #[serde(rename = "block-dump-path")]
    pub block_dump_path: String,

    /// Where raw markup is dumped when a listing page has no job cards
    #[serde(rename = "empty-dump-path")]
    pub empty_dump_path: String,

    /// Maximum number of rows in the skill frequency table
    #[serde(rename = "top-skills")]
    pub top_skills: usize,
}
