use crate::config::types::{
    BrowserConfig, Config, FilterConfig, OutputConfig, PacingConfig, SearchConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_browser_config(&config.browser)?;
    validate_pacing_config(&config.pacing)?;
    validate_filter_config(&config.filter)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates search configuration
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if !config.base_url.contains("{page}") {
        return Err(ConfigError::Validation(format!(
            "base-url must contain a {{page}} placeholder, got '{}'",
            config.base_url
        )));
    }

    // The template must resolve to a parseable URL
    let sample = config.base_url.replace("{page}", "1");
    Url::parse(&sample).map_err(|_| ConfigError::InvalidUrl(sample.clone()))?;

    Url::parse(&config.home_url)
        .map_err(|_| ConfigError::InvalidUrl(config.home_url.clone()))?;

    if config.pages < 1 {
        return Err(ConfigError::Validation(format!(
            "pages must be >= 1, got {}",
            config.pages
        )));
    }

    Ok(())
}

/// Validates browser configuration
fn validate_browser_config(config: &BrowserConfig) -> Result<(), ConfigError> {
    if config.window_width < 320 || config.window_height < 240 {
        return Err(ConfigError::Validation(format!(
            "window size must be at least 320x240, got {}x{}",
            config.window_width, config.window_height
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.page_load_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "page-load-timeout-secs must be >= 1, got {}",
            config.page_load_timeout_secs
        )));
    }

    Ok(())
}

/// Validates pacing configuration
fn validate_pacing_config(config: &PacingConfig) -> Result<(), ConfigError> {
    let pairs = [
        (
            "short-pause",
            config.short_pause_min_ms,
            config.short_pause_max_ms,
        ),
        (
            "medium-pause",
            config.medium_pause_min_ms,
            config.medium_pause_max_ms,
        ),
        (
            "page-delay",
            config.page_delay_min_ms,
            config.page_delay_max_ms,
        ),
    ];

    for (name, min, max) in pairs {
        if min > max {
            return Err(ConfigError::Validation(format!(
                "{name}-min-ms ({min}) must not exceed {name}-max-ms ({max})"
            )));
        }
    }

    if config.retry_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "retry-attempts must be >= 1, got {}",
            config.retry_attempts
        )));
    }

    Ok(())
}

/// Validates filter configuration
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    if config.location.trim().is_empty() {
        return Err(ConfigError::Validation(
            "filter location cannot be empty".to_string(),
        ));
    }

    if config.experience_patterns.is_empty() {
        return Err(ConfigError::Validation(
            "experience-patterns cannot be empty".to_string(),
        ));
    }

    for pattern in &config.experience_patterns {
        if pattern.trim().is_empty() {
            return Err(ConfigError::Validation(
                "experience-patterns entries cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    let paths = [
        ("jobs-path", &config.jobs_path),
        ("skills-path", &config.skills_path),
        ("block-dump-path", &config.block_dump_path),
        ("empty-dump-path", &config.empty_dump_path),
    ];

    for (name, path) in paths {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{name} cannot be empty")));
        }
    }

    if config.top_skills < 1 {
        return Err(ConfigError::Validation(format!(
            "top-skills must be >= 1, got {}",
            config.top_skills
        )));
    }

    Ok(())
}
