// src/listings/filter.rs
//! Filter engine over the canonical job collection.

use serde::{Deserialize, Serialize};

use super::job::Job;
use super::parse::parse_salary_bound;

/// Filter dimensions selected by the user. Every field is optional in the
/// sense that an empty value imposes no constraint, so the default criteria
/// are the identity transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub categories: Vec<String>,
    pub job_types: Vec<String>,
    /// Inclusive bounds checked against the parsed minimum salary.
    pub salary_range: Option<(i64, i64)>,
    pub location: String,
    pub search_query: String,
    pub search_location: String,
}

/// Apply every active criterion to the collection and return the matching
/// jobs in input order. Criteria combine with AND; multi-value criteria
/// match by membership. The input slice is never mutated.
pub fn apply_filters(jobs: &[Job], criteria: &FilterCriteria) -> Vec<Job> {
    jobs.iter()
        .filter(|job| matches_criteria(job, criteria))
        .cloned()
        .collect()
}

fn matches_criteria(job: &Job, criteria: &FilterCriteria) -> bool {
    if !criteria.categories.is_empty() && !criteria.categories.contains(&job.category) {
        return false;
    }

    if !criteria.job_types.is_empty() && !criteria.job_types.contains(&job.job_type) {
        return false;
    }

    if let Some((min, max)) = criteria.salary_range {
        let parsed_min = parse_salary_bound(&job.salary, 0);
        if parsed_min < min || parsed_min > max {
            return false;
        }
    }

    if !criteria.location.is_empty() && !contains_ci(&job.location, &criteria.location) {
        return false;
    }

    if !criteria.search_location.is_empty()
        && !contains_ci(&job.location, &criteria.search_location)
    {
        return false;
    }

    if !criteria.search_query.is_empty()
        && !contains_ci(&job.title, &criteria.search_query)
        && !contains_ci(&job.category, &criteria.search_query)
    {
        return false;
    }

    true
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
