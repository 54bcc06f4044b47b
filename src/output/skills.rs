//! Skill frequency summarization
//!
//! Builds the "top skills" table from the filtered record set: each
//! distinct skill string mapped to its occurrence count, sorted by
//! descending count (ties broken by name for determinism) and truncated.

use crate::record::JobRecord;
use serde::Serialize;
use std::collections::HashMap;

/// One row of the skill frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    /// The skill string as it appeared in the detail pages
    #[serde(rename = "Skill")]
    pub skill: String,

    /// Number of occurrences across the filtered records
    #[serde(rename = "Count")]
    pub count: u64,
}

/// Computes the top-`limit` skill frequency table over `records`
///
/// Counts every non-empty skill occurrence; the sum of the returned counts
/// equals the total number of occurrences only when no rows were truncated.
pub fn top_skills(records: &[JobRecord], limit: usize) -> Vec<SkillCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for record in records {
        for skill in &record.skills {
            if !skill.is_empty() {
                *counts.entry(skill.as_str()).or_default() += 1;
            }
        }
    }

    let mut table: Vec<SkillCount> = counts
        .into_iter()
        .map(|(skill, count)| SkillCount {
            skill: skill.to_string(),
            count,
        })
        .collect();

    table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    table.truncate(limit);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PLACEHOLDER;

    fn record_with_skills(skills: &[&str]) -> JobRecord {
        JobRecord {
            title: "Data Analyst".to_string(),
            company: "Acme Corp".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location: "Pune".to_string(),
            experience: "3-5 Yrs".to_string(),
            description: PLACEHOLDER.to_string(),
            link: "https://example.com/job/1".to_string(),
        }
    }

    #[test]
    fn test_counts_sum_to_total_occurrences() {
        let records = vec![
            record_with_skills(&["SQL", "Python"]),
            record_with_skills(&["SQL", "Excel"]),
            record_with_skills(&["SQL"]),
        ];
        let table = top_skills(&records, 20);

        let total: u64 = table.iter().map(|row| row.count).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_sorted_descending_with_name_tiebreak() {
        let records = vec![
            record_with_skills(&["SQL", "Python"]),
            record_with_skills(&["SQL", "Excel"]),
        ];
        let table = top_skills(&records, 20);

        assert_eq!(table[0].skill, "SQL");
        assert_eq!(table[0].count, 2);
        // Excel and Python tie at 1; name ascending
        assert_eq!(table[1].skill, "Excel");
        assert_eq!(table[2].skill, "Python");
    }

    #[test]
    fn test_truncated_to_limit() {
        let skills: Vec<String> = (0..30).map(|i| format!("Skill{i:02}")).collect();
        let refs: Vec<&str> = skills.iter().map(|s| s.as_str()).collect();
        let records = vec![record_with_skills(&refs)];

        let table = top_skills(&records, 20);
        assert_eq!(table.len(), 20);
    }

    #[test]
    fn test_empty_skills_ignored() {
        let mut record = record_with_skills(&["SQL"]);
        record.skills.push(String::new());
        let table = top_skills(&[record], 20);

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].skill, "SQL");
    }

    #[test]
    fn test_no_records_yields_empty_table() {
        assert!(top_skills(&[], 20).is_empty());
    }
}
