//! Naukri-Harvest main entry point
//!
//! This is the command-line interface for the Naukri-Harvest job scraper.

use clap::Parser;
use naukri_harvest::config::load_config_with_hash;
use naukri_harvest::output::process_results;
use naukri_harvest::scraper::run_scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Naukri-Harvest: a browser-driven job listing scraper
///
/// Naukri-Harvest drives a Chrome session over Naukri listing pages, opens
/// each job's detail page, and writes filtered results plus a skill
/// frequency summary to CSV files.
#[derive(Parser, Debug)]
#[command(name = "naukri-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A browser-driven job listing scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Open the site home page, print its title, and exit
    #[arg(long, conflicts_with = "dry_run")]
    probe: bool,

    /// Validate config and show what would be scraped without launching a browser
    #[arg(long, conflicts_with = "probe")]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.probe {
        handle_probe(&config)?;
    } else {
        handle_scrape(&config)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("naukri_harvest=info,warn"),
            1 => EnvFilter::new("naukri_harvest=debug,info"),
            2 => EnvFilter::new("naukri_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &naukri_harvest::config::Config) {
    println!("=== Naukri-Harvest Dry Run ===\n");

    println!("Search:");
    println!("  Base URL: {}", config.search.base_url);
    println!("  Home URL: {}", config.search.home_url);
    println!("  Pages: {}", config.search.pages);

    println!("\nBrowser:");
    println!(
        "  Chrome path: {}",
        config.browser.chrome_path.as_deref().unwrap_or("(auto)")
    );
    println!("  Headless: {}", config.browser.headless);
    println!(
        "  Window: {}x{}",
        config.browser.window_width, config.browser.window_height
    );
    println!(
        "  Page load timeout: {}s",
        config.browser.page_load_timeout_secs
    );

    println!("\nFilter:");
    println!("  Location: {}", config.filter.location);
    println!(
        "  Experience patterns: {}",
        config.filter.experience_patterns.join(", ")
    );

    println!("\nOutput:");
    println!("  Jobs CSV: {}", config.output.jobs_path);
    println!("  Skills CSV: {}", config.output.skills_path);
    println!("  Top skills: {}", config.output.top_skills);

    println!("\n✓ Configuration is valid");
    println!("✓ Would scrape {} listing pages", config.search.pages);
}

/// Handles the --probe mode: opens the home page and prints its title
fn handle_probe(
    config: &naukri_harvest::config::Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match naukri_harvest::browser::run_probe(config) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Connectivity probe failed: {}", e);
            Err(e.into())
        }
    }
}

/// Handles the main scrape operation
///
/// Scrape failures are logged inside the run and never discard the
/// accumulated records; post-processing always runs on whatever was
/// collected.
fn handle_scrape(
    config: &naukri_harvest::config::Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let started = chrono::Utc::now();
    tracing::info!(
        "Starting scrape: {} pages, filter location '{}'",
        config.search.pages,
        config.filter.location
    );

    let records = match run_scrape(config) {
        Ok(records) => records,
        Err(e) => {
            // Browser session could not be launched; nothing was scraped
            tracing::error!("Scrape failed to start: {}", e);
            return Err(e.into());
        }
    };

    match process_results(config, &records) {
        Ok(()) => {
            let elapsed = (chrono::Utc::now() - started).num_seconds();
            tracing::info!("Scraping process finished in {}s", elapsed);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Post-processing failed: {}", e);
            Err(e.into())
        }
    }
}
