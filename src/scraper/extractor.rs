//! Detail page field extraction
//!
//! Parses the raw markup of a job detail page and pulls out the fields of a
//! [`JobRecord`]. Every selector is applied independently and tolerates
//! absence: a missing element yields the "N/A" placeholder (or an empty list
//! for skills) rather than an error.

use crate::record::{JobRecord, PLACEHOLDER};
use scraper::{Html, Selector};

/// Selector for the job title on the detail page
const TITLE_SELECTOR: &str = "h1.title";

/// Selector for the company name link
const COMPANY_SELECTOR: &str = "a.companyName";

/// Selector for the skill tag links
const SKILLS_SELECTOR: &str = "div.key-skill a";

/// Selector for the location text
const LOCATION_SELECTOR: &str = "span.locWdth";

/// Selector for the years-of-experience text
const EXPERIENCE_SELECTOR: &str = "span.expwdth";

/// Selector for the full job description
const DESCRIPTION_SELECTOR: &str = "div.dang-inner-html";

/// Extracts a complete job record from detail page markup
///
/// `link` is the detail page URL captured from the listing card before
/// navigation; it is stored verbatim on the record.
pub fn extract_job(html: &str, link: &str) -> JobRecord {
    let document = Html::parse_document(html);

    JobRecord {
        title: select_text(&document, TITLE_SELECTOR),
        company: select_text(&document, COMPANY_SELECTOR),
        skills: select_all_text(&document, SKILLS_SELECTOR),
        location: select_text(&document, LOCATION_SELECTOR),
        experience: select_text(&document, EXPERIENCE_SELECTOR),
        description: select_text(&document, DESCRIPTION_SELECTOR),
        link: link.to_string(),
    }
}

/// Returns the trimmed text of the first element matching `selector`,
/// or the placeholder when nothing matches
fn select_text(document: &Html, selector: &str) -> String {
    try_select_text(document, selector).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn try_select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Returns the trimmed text of every element matching `selector`
fn select_all_text(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
