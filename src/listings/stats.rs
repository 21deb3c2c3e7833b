// src/listings/stats.rs
//! Aggregate figures for the listings dashboard header.

use serde::Serialize;
use std::collections::HashMap;

use super::job::Job;
use super::parse::parse_salary_bound;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

/// Jobs bucketed by their parsed minimum monthly salary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBands {
    pub under_20k: usize,
    pub from_20k_to_30k: usize,
    pub above_30k: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingStats {
    pub total_jobs: usize,
    pub new_today: usize,
    pub urgent_jobs: usize,
    pub verified_jobs: usize,
    pub top_categories: Vec<CountEntry>,
    pub top_locations: Vec<CountEntry>,
    pub salary_bands: SalaryBands,
}

/// Compute the dashboard figures over a loaded collection.
pub fn listing_stats(jobs: &[Job]) -> ListingStats {
    let total_jobs = jobs.len();
    let new_today = jobs.iter().filter(|j| j.posted_date.contains("Today")).count();
    let urgent_jobs = jobs.iter().filter(|j| j.is_urgent).count();
    let verified_jobs = jobs.iter().filter(|j| j.is_verified).count();

    let mut category_counts: HashMap<&str, usize> = HashMap::new();
    let mut city_counts: HashMap<&str, usize> = HashMap::new();
    for job in jobs {
        *category_counts.entry(job.category.as_str()).or_default() += 1;
        *city_counts.entry(job.city()).or_default() += 1;
    }

    let mut salary_bands = SalaryBands {
        under_20k: 0,
        from_20k_to_30k: 0,
        above_30k: 0,
    };
    for job in jobs {
        let min_salary = parse_salary_bound(&job.salary, 0);
        if min_salary < 20_000 {
            salary_bands.under_20k += 1;
        } else if min_salary <= 30_000 {
            salary_bands.from_20k_to_30k += 1;
        } else {
            salary_bands.above_30k += 1;
        }
    }

    ListingStats {
        total_jobs,
        new_today,
        urgent_jobs,
        verified_jobs,
        top_categories: top_entries(category_counts),
        top_locations: top_entries(city_counts),
        salary_bands,
    }
}

fn top_entries(counts: HashMap<&str, usize>) -> Vec<CountEntry> {
    let mut entries: Vec<(&str, usize)> = counts.into_iter().collect();
    // count descending, name ascending for a deterministic order
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(3)
        .map(|(name, count)| CountEntry {
            name: name.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::sample_jobs::sample_jobs;

    fn job(category: &str, city: &str, salary: &str, posted_date: &str, urgent: bool) -> Job {
        Job {
            id: uuid::Uuid::new_v4().to_string(),
            title: format!("{} worker", category),
            company: "Acme Services".to_string(),
            location: format!("{}, Maharashtra", city),
            salary: salary.to_string(),
            posted_date: posted_date.to_string(),
            job_type: "Full-time".to_string(),
            category: category.to_string(),
            is_urgent: urgent,
            is_verified: false,
            is_highlighted: false,
            applicants_count: None,
        }
    }

    #[test]
    fn test_salary_bands_boundaries() {
        let jobs = vec![
            job("Driving", "Mumbai", "19,999 - 25,000/month", "Today", false),
            job("Driving", "Mumbai", "20,000 - 25,000/month", "Today", false),
            job("Driving", "Mumbai", "30,000 - 40,000/month", "Today", false),
            job("Driving", "Mumbai", "30,001 - 45,000/month", "Today", false),
        ];
        let stats = listing_stats(&jobs);
        assert_eq!(stats.salary_bands.under_20k, 1);
        assert_eq!(stats.salary_bands.from_20k_to_30k, 2);
        assert_eq!(stats.salary_bands.above_30k, 1);
    }

    #[test]
    fn test_counts_and_top_entries() {
        let jobs = vec![
            job("Driving", "Mumbai", "15,000 - 20,000/month", "Today", true),
            job("Driving", "Pune", "15,000 - 20,000/month", "2 days ago", false),
            job("Plumbing", "Mumbai", "18,000 - 24,000/month", "Today", false),
            job("Cooking", "Delhi", "14,000 - 18,000/month", "1 week ago", false),
        ];
        let stats = listing_stats(&jobs);
        assert_eq!(stats.total_jobs, 4);
        assert_eq!(stats.new_today, 2);
        assert_eq!(stats.urgent_jobs, 1);
        assert_eq!(stats.top_categories[0].name, "Driving");
        assert_eq!(stats.top_categories[0].count, 2);
        assert_eq!(stats.top_locations[0].name, "Mumbai");
        assert_eq!(stats.top_locations[0].count, 2);
    }

    #[test]
    fn test_stats_over_sample_dataset() {
        let stats = listing_stats(&sample_jobs());
        assert_eq!(stats.total_jobs, 12);
        assert!(stats.top_categories.len() <= 3);
        assert!(stats.new_today >= 1);
    }
}
