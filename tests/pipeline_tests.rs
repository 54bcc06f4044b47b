//! Integration tests for the extraction and post-processing pipeline
//!
//! These tests feed synthetic detail-page markup through the extractor,
//! filter, and summarization stages and check the CSV files end to end.
//! No browser is involved; everything downstream of navigation is pure.

use naukri_harvest::config::{FilterConfig, OutputConfig};
use naukri_harvest::output::{top_skills, write_jobs_csv, write_skills_csv, JobFilter};
use naukri_harvest::record::JobRecord;
use naukri_harvest::scraper::{detect_block, extract_job};

fn detail_page(title: &str, location: &str, experience: &str, skills: &[&str]) -> String {
    let skill_tags: String = skills
        .iter()
        .map(|s| format!("<a href=\"/skill\">{s}</a>"))
        .collect();
    format!(
        r#"<html><body>
            <h1 class="title">{title}</h1>
            <a class="companyName">Acme Corp</a>
            <div class="key-skill">{skill_tags}</div>
            <span class="locWdth">{location}</span>
            <span class="expwdth">{experience}</span>
            <div class="dang-inner-html">Role description.</div>
        </body></html>"#
    )
}

fn pune_filter() -> JobFilter {
    JobFilter::new(&FilterConfig {
        location: "Pune".to_string(),
        experience_patterns: vec!["2-4".to_string(), "3-5".to_string(), "3".to_string()],
    })
    .unwrap()
}

fn scrape_fixture_records() -> Vec<JobRecord> {
    let pages = [
        detail_page("Data Analyst", "Pune", "3-5 Yrs", &["SQL", "Python"]),
        detail_page("BI Developer", "Pune", "2-4 Yrs", &["SQL", "Tableau"]),
        detail_page("Senior Analyst", "Pune", "13-15 Yrs", &["SQL"]),
        detail_page("Data Engineer", "Mumbai", "3-5 Yrs", &["Python", "Spark"]),
    ];

    pages
        .iter()
        .enumerate()
        .map(|(i, html)| extract_job(html, &format!("https://example.com/job/{i}")))
        .collect()
}

#[test]
fn test_extract_filter_and_summarize() {
    let records = scrape_fixture_records();
    assert_eq!(records.len(), 4);

    // Every field is populated on every record
    for record in &records {
        assert!(!record.title.is_empty());
        assert!(!record.company.is_empty());
        assert!(!record.location.is_empty());
        assert!(!record.experience.is_empty());
        assert!(!record.description.is_empty());
        assert!(!record.link.is_empty());
    }

    let filtered = pune_filter().apply(&records);

    // The 13-15 Yrs and Mumbai records are excluded
    let titles: Vec<&str> = filtered.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Data Analyst", "BI Developer"]);

    let table = top_skills(&filtered, 20);
    assert_eq!(table[0].skill, "SQL");
    assert_eq!(table[0].count, 2);

    let total: u64 = table.iter().map(|row| row.count).sum();
    assert_eq!(total, 4); // SQL x2, Python, Tableau
}

#[test]
fn test_csv_outputs_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputConfig {
        jobs_path: dir.path().join("jobs.csv").to_str().unwrap().to_string(),
        skills_path: dir.path().join("skills.csv").to_str().unwrap().to_string(),
        block_dump_path: dir
            .path()
            .join("captcha_page.html")
            .to_str()
            .unwrap()
            .to_string(),
        empty_dump_path: dir
            .path()
            .join("page_source.html")
            .to_str()
            .unwrap()
            .to_string(),
        top_skills: 20,
    };

    let filtered = pune_filter().apply(&scrape_fixture_records());
    write_jobs_csv(&output.jobs_path, &filtered).unwrap();
    write_skills_csv(&output.skills_path, &top_skills(&filtered, output.top_skills)).unwrap();

    let jobs = std::fs::read_to_string(&output.jobs_path).unwrap();
    let mut lines = jobs.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Title,Company,Skills,Location,Experience,Description,Link"
    );
    assert_eq!(lines.clone().count(), 2);
    assert!(lines.next().unwrap().contains("\"SQL, Python\""));

    let skills = std::fs::read_to_string(&output.skills_path).unwrap();
    let lines: Vec<&str> = skills.lines().collect();
    assert_eq!(lines[0], "Skill,Count");
    assert_eq!(lines[1], "SQL,2");
}

#[test]
fn test_detail_page_with_missing_description() {
    let html = r#"<html><body>
        <h1 class="title">Data Analyst</h1>
        <span class="locWdth">Pune</span>
        <span class="expwdth">3 Yrs</span>
    </body></html>"#;

    let record = extract_job(html, "https://example.com/job/7");
    assert_eq!(record.description, "N/A");
    assert_eq!(record.company, "N/A");
    assert!(record.skills.is_empty());
    assert!(pune_filter().matches(&record));
}

#[test]
fn test_block_page_is_detected_before_extraction() {
    let block_page = "<html><body><p>Please verify you are not a robot</p></body></html>";
    assert!(detect_block(block_page));

    let listing = detail_page("Data Analyst", "Pune", "3-5 Yrs", &["SQL"]);
    assert!(!detect_block(&listing));
}
