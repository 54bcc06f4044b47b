//! Connectivity probe
//!
//! Opens a browser session against the configured home page, reports the
//! document title, then closes the session. Pure smoke test for the browser
//! setup and site reachability.

use crate::browser::Session;
use crate::config::Config;
use crate::Result;

/// Runs the connectivity probe
///
/// Launches a browser, loads the home URL, prints the page title, and tears
/// the session down. Launch or navigation errors propagate unchanged.
pub fn run_probe(config: &Config) -> Result<()> {
    let session = Session::launch(&config.browser)?;

    tracing::info!("Probing {}", config.search.home_url);
    session.navigate(&config.search.home_url)?;
    session.wait_for_body()?;

    let title = session.title()?;
    println!("Page title: {title}");
    tracing::info!("Connectivity probe succeeded");

    Ok(())
    // Session dropped here; Chrome is torn down
}
