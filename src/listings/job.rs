// src/listings/job.rs
use serde::{Deserialize, Serialize};

/// Canonical job record, the shape every pipeline stage operates on
/// regardless of whether the record came from the live store or the
/// bundled sample set. Field names serialize in camelCase to match the
/// frontend's job card props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Free text of the form "<city>, <state>"; matched by substring, not geocoded.
    pub location: String,
    /// Free text encoding a range and a period, e.g. "20,000 - 30,000/month".
    pub salary: String,
    /// Relative-time string ("Today", "3 days ago", ...), derived at load time.
    pub posted_date: String,
    pub job_type: String,
    pub category: String,
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_highlighted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicants_count: Option<u32>,
}

impl Job {
    /// City part of the location field (text before the first comma).
    pub fn city(&self) -> &str {
        self.location.split(',').next().unwrap_or("").trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn electrician() -> Job {
        Job {
            id: "j1".to_string(),
            title: "Electrician".to_string(),
            company: "PowerTech".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            salary: "18,000 - 25,000/month".to_string(),
            posted_date: "Today".to_string(),
            job_type: "Full-time".to_string(),
            category: "Electrical".to_string(),
            is_urgent: false,
            is_verified: true,
            is_highlighted: false,
            applicants_count: None,
        }
    }

    #[test]
    fn test_city_extraction() {
        assert_eq!(electrician().city(), "Mumbai");
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let value = serde_json::to_value(electrician()).unwrap();
        assert_eq!(value["postedDate"], "Today");
        assert_eq!(value["jobType"], "Full-time");
        assert_eq!(value["isVerified"], true);
        // absent optional count is omitted entirely
        assert!(value.get("applicantsCount").is_none());
    }
}
