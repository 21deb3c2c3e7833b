// src/listings/sample_jobs.rs
//! Bundled sample listings, served whenever the live store is unreachable
//! or empty. The records are already in canonical shape so the rest of the
//! pipeline cannot tell them apart from live data.

use super::job::Job;

/// Bumped whenever the bundled records change.
pub const SAMPLE_DATASET_VERSION: &str = "2025-05";

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    posted_date: &str,
    job_type: &str,
    category: &str,
    is_urgent: bool,
    is_verified: bool,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        posted_date: posted_date.to_string(),
        job_type: job_type.to_string(),
        category: category.to_string(),
        is_urgent,
        is_verified,
        is_highlighted: false,
        applicants_count: None,
    }
}

/// The fixed fallback dataset.
pub fn sample_jobs() -> Vec<Job> {
    vec![
        sample(
            "sample1",
            "Experienced Plumber for Residential Projects",
            "HomeFixers Ltd.",
            "Mumbai, Maharashtra",
            "20,000 - 30,000/month",
            "2 days ago",
            "Full-time",
            "Plumbing",
            true,
            true,
        ),
        sample(
            "sample2",
            "Electrician for Commercial Building Maintenance",
            "PowerTech Solutions",
            "Pune, Maharashtra",
            "22,000 - 28,000/month",
            "1 day ago",
            "Full-time",
            "Electrical",
            false,
            true,
        ),
        sample(
            "sample3",
            "Skilled Carpenter for Furniture Workshop",
            "WoodArt Furnishings",
            "Thane, Maharashtra",
            "18,000 - 25,000/month",
            "3 days ago",
            "Full-time",
            "Carpentry",
            false,
            true,
        ),
        sample(
            "sample4",
            "Delivery Driver with Two-Wheeler (Night Shift)",
            "QuickServe Logistics",
            "Mumbai, Maharashtra",
            "15,000 - 22,000/month",
            "5 days ago",
            "Full-time",
            "Driving",
            true,
            false,
        ),
        sample(
            "sample5",
            "Construction Worker for Residential Project",
            "BuildRight Constructions",
            "Navi Mumbai, Maharashtra",
            "500 - 700/day",
            "4 days ago",
            "Daily Wages",
            "Construction",
            false,
            false,
        ),
        sample(
            "sample6",
            "Security Guard for Corporate Office",
            "SafeZone Security Services",
            "Bangalore, Karnataka",
            "15,000 - 18,000/month",
            "2 days ago",
            "Full-time",
            "Security",
            false,
            false,
        ),
        sample(
            "sample7",
            "Housekeeping Staff for 5-Star Hotel",
            "Grand Luxe Hotels",
            "Delhi, Delhi",
            "14,000 - 16,000/month",
            "Today",
            "Full-time",
            "Housekeeping",
            true,
            false,
        ),
        sample(
            "sample8",
            "Cook for Corporate Canteen",
            "TasteBuds Food Services",
            "Chennai, Tamil Nadu",
            "18,000 - 25,000/month",
            "3 days ago",
            "Full-time",
            "Cooking",
            false,
            true,
        ),
        sample(
            "sample9",
            "Tailor for Boutique Fashion Store",
            "TrendSetters Fashion",
            "Kolkata, West Bengal",
            "16,000 - 22,000/month",
            "6 days ago",
            "Full-time",
            "Tailoring",
            false,
            false,
        ),
        sample(
            "sample10",
            "Factory Worker for Food Processing Unit",
            "Natural Foods Industries",
            "Pune, Maharashtra",
            "14,000 - 18,000/month",
            "1 week ago",
            "Full-time",
            "Factory Work",
            false,
            false,
        ),
        sample(
            "sample11",
            "Gardener for Large Corporate Campus",
            "GreenScape Maintenance",
            "Bangalore, Karnataka",
            "15,000 - 20,000/month",
            "5 days ago",
            "Full-time",
            "Gardening",
            false,
            false,
        ),
        sample(
            "sample12",
            "Delivery Executive with Own Vehicle",
            "Zip Delivery Services",
            "Hyderabad, Telangana",
            "18,000 - 25,000/month",
            "2 days ago",
            "Full-time",
            "Delivery",
            true,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_unique() {
        let jobs = sample_jobs();
        let mut ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_samples_carry_parsable_salaries() {
        use crate::listings::parse::parse_salary_bound;
        for job in sample_jobs() {
            assert!(parse_salary_bound(&job.salary, 0) > 0, "bad salary: {}", job.salary);
            assert!(parse_salary_bound(&job.salary, 1) > 0, "bad salary: {}", job.salary);
        }
    }
}
