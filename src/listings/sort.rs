// src/listings/sort.rs
//! Sort engine for the filtered job collection.

use serde::{Deserialize, Serialize};

use super::job::Job;
use super::parse::{parse_salary_bound, recency_rank};

/// Sort orders offered by the listings page. Wire names match the
/// frontend's select values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Recent,
    SalaryHigh,
    SalaryLow,
}

impl SortMode {
    /// Parse a query-string value; unknown values are rejected so the
    /// caller can answer with a useful error instead of a silent default.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "recent" => Some(Self::Recent),
            "salary-high" => Some(Self::SalaryHigh),
            "salary-low" => Some(Self::SalaryLow),
            _ => None,
        }
    }
}

/// Return a new vector with the jobs ordered by the requested mode.
///
/// Relies on the stability of `sort_by`: jobs with equal keys keep their
/// relative input order. The input slice is never mutated.
pub fn sort_jobs(jobs: &[Job], mode: SortMode) -> Vec<Job> {
    let mut sorted = jobs.to_vec();

    match mode {
        SortMode::Recent => {
            sorted.sort_by_key(|job| recency_rank(&job.posted_date));
        }
        SortMode::SalaryHigh => {
            sorted.sort_by(|a, b| {
                parse_salary_bound(&b.salary, 1).cmp(&parse_salary_bound(&a.salary, 1))
            });
        }
        SortMode::SalaryLow => {
            sorted.sort_by_key(|job| parse_salary_bound(&job.salary, 0));
        }
    }

    sorted
}
