// src/listings/source.rs
//! Job source strategy: the live store, the bundled samples, and the
//! fallback wrapper that switches between them.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::database::{JobRepository, JobRow};
use crate::notify::{Notification, Notifier};

use super::job::Job;
use super::parse::{format_grouped, relative_posted_date};
use super::sample_jobs::sample_jobs;

/// One loaded page. `has_more` reports whether another page may exist,
/// judged by whether this one came back full.
#[derive(Debug, Clone)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub has_more: bool,
}

#[rocket::async_trait]
pub trait JobSource: Send + Sync {
    async fn load_page(&self, page_index: u32, page_size: u32) -> Result<JobPage>;
}

/// Flatten a stored row into the canonical record. All the defaults for
/// absent optional fields live here, in one place.
pub fn canonical_job_from_row(row: JobRow, now: DateTime<Utc>) -> Job {
    let city = row.location_city.unwrap_or_default();
    let state = row.location_state.unwrap_or_default();
    let period = row.salary_period.unwrap_or_else(|| "month".to_string());

    Job {
        id: row.id,
        title: row.title,
        company: row
            .employer_display_name
            .unwrap_or_else(|| "Unknown Company".to_string()),
        location: format!("{}, {}", city, state),
        salary: format!(
            "{} - {}/{}",
            format_grouped(row.salary_min),
            format_grouped(row.salary_max),
            period
        ),
        posted_date: relative_posted_date(row.created_at, now),
        job_type: row.job_type,
        category: row.category,
        is_urgent: row.is_urgent,
        is_verified: row.is_verified,
        is_highlighted: false,
        applicants_count: None,
    }
}

// ===== Remote Source =====

/// Pages over the active jobs in the store, newest first.
pub struct RemoteJobSource {
    pool: SqlitePool,
}

impl RemoteJobSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl JobSource for RemoteJobSource {
    async fn load_page(&self, page_index: u32, page_size: u32) -> Result<JobPage> {
        let rows = JobRepository::new(&self.pool)
            .fetch_active_page(page_index, page_size)
            .await?;

        let now = Utc::now();
        let jobs: Vec<Job> = rows
            .into_iter()
            .map(|row| canonical_job_from_row(row, now))
            .collect();
        let has_more = jobs.len() as u32 == page_size;

        debug!(
            "Loaded page {} from store: {} job(s), has_more={}",
            page_index,
            jobs.len(),
            has_more
        );

        Ok(JobPage { jobs, has_more })
    }
}

// ===== Static Source =====

/// Pages over a fixed in-memory list with the same slicing semantics as
/// the store-backed source.
pub struct StaticJobSource {
    jobs: Vec<Job>,
}

impl StaticJobSource {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn with_sample_jobs() -> Self {
        Self::new(sample_jobs())
    }
}

#[rocket::async_trait]
impl JobSource for StaticJobSource {
    async fn load_page(&self, page_index: u32, page_size: u32) -> Result<JobPage> {
        let start = page_index as usize * page_size as usize;
        let jobs: Vec<Job> = self
            .jobs
            .get(start..)
            .unwrap_or(&[])
            .iter()
            .take(page_size as usize)
            .cloned()
            .collect();
        let has_more = jobs.len() as u32 == page_size;

        Ok(JobPage { jobs, has_more })
    }
}

// ===== Fallback Source =====

/// Tries the live store first; on failure or an empty page serves the
/// static dataset instead. The switch is invisible to the rest of the
/// pipeline apart from a single non-fatal notification.
pub struct FallbackJobSource {
    remote: Arc<dyn JobSource>,
    fallback: StaticJobSource,
    notifier: Arc<dyn Notifier>,
    fell_back: AtomicBool,
}

impl FallbackJobSource {
    pub fn new(
        remote: Arc<dyn JobSource>,
        fallback: StaticJobSource,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            remote,
            fallback,
            notifier,
            fell_back: AtomicBool::new(false),
        }
    }

    fn notify_fallback(&self) {
        if !self.fell_back.swap(true, Ordering::Relaxed) {
            self.notifier.notify(Notification::info(
                "Showing sample jobs",
                "Live listings are unavailable right now. Displaying sample jobs instead.",
            ));
        }
    }
}

#[rocket::async_trait]
impl JobSource for FallbackJobSource {
    async fn load_page(&self, page_index: u32, page_size: u32) -> Result<JobPage> {
        match self.remote.load_page(page_index, page_size).await {
            Ok(page) if !page.jobs.is_empty() => Ok(page),
            Ok(_) => {
                warn!("Store returned no jobs for page {}, serving samples", page_index);
                self.notify_fallback();
                self.fallback.load_page(page_index, page_size).await
            }
            Err(e) => {
                warn!("Store load failed for page {}: {:#}", page_index, e);
                self.notify_fallback();
                self.fallback.load_page(page_index, page_size).await
            }
        }
    }
}
