// src/listings/state.rs
//! Listings page state and its controller. One controller owns the whole
//! collection for a viewing session; transitions are reducer-style so the
//! state stays testable without any UI attached.

use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::filter::{apply_filters, FilterCriteria};
use super::job::Job;
use super::sort::{sort_jobs, SortMode};
use super::source::JobSource;

/// Everything the listings page shows, in one serializable struct.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsState {
    /// Full canonical collection loaded so far, in arrival order.
    pub all_jobs: Vec<Job>,
    /// The filtered and sorted view derived from `all_jobs`.
    pub visible_jobs: Vec<Job>,
    pub criteria: FilterCriteria,
    pub sort: SortMode,
    pub current_page: u32,
    pub has_more: bool,
    pub loading_more: bool,
}

pub struct ListingsController {
    source: Arc<dyn JobSource>,
    page_size: u32,
    state: ListingsState,
}

impl ListingsController {
    pub fn new(source: Arc<dyn JobSource>, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            state: ListingsState::default(),
        }
    }

    pub fn state(&self) -> &ListingsState {
        &self.state
    }

    /// Load page zero, replacing whatever was shown before.
    pub async fn load_initial(&mut self) -> Result<()> {
        let page = self.source.load_page(0, self.page_size).await?;

        self.state.all_jobs = page.jobs;
        self.state.current_page = 0;
        self.state.has_more = page.has_more;
        self.recompute();
        Ok(())
    }

    /// Replace the filter criteria and rebuild the view from the full
    /// collection.
    pub fn on_filter_change(&mut self, criteria: FilterCriteria) {
        self.state.criteria = criteria;
        self.recompute();
    }

    /// Switch the sort order and rebuild the view from the full collection.
    pub fn on_sort_change(&mut self, sort: SortMode) {
        self.state.sort = sort;
        self.recompute();
    }

    /// Fetch the next page and append it.
    ///
    /// A call while a load is already in flight, or when the source is
    /// exhausted, is a no-op. On failure the collection and `has_more` are
    /// left untouched so the caller can surface the error and retry. The
    /// view is rebuilt with whatever criteria and sort are current when the
    /// load resolves, not the ones in effect when it started.
    pub async fn load_more(&mut self) -> Result<()> {
        if self.state.loading_more || !self.state.has_more {
            return Ok(());
        }

        self.state.loading_more = true;
        let next_page = self.state.current_page + 1;
        let result = self.source.load_page(next_page, self.page_size).await;
        self.state.loading_more = false;

        let page = result?;

        let mut appended = 0usize;
        for job in page.jobs.iter() {
            if !self.state.all_jobs.iter().any(|existing| existing.id == job.id) {
                self.state.all_jobs.push(job.clone());
                appended += 1;
            }
        }

        self.state.current_page = next_page;
        self.state.has_more = page.jobs.len() as u32 == self.page_size;
        self.recompute();

        debug!(
            "Appended {} job(s) from page {}, {} total, has_more={}",
            appended,
            next_page,
            self.state.all_jobs.len(),
            self.state.has_more
        );
        Ok(())
    }

    fn recompute(&mut self) {
        let filtered = apply_filters(&self.state.all_jobs, &self.state.criteria);
        self.state.visible_jobs = sort_jobs(&filtered, self.state.sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::parse::parse_salary_bound;
    use crate::listings::source::{JobPage, StaticJobSource};

    fn job(id: &str, category: &str, salary: &str, posted_date: &str) -> Job {
        Job {
            id: id.to_string(),
            title: format!("{} worker", category),
            company: "Acme Services".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            salary: salary.to_string(),
            posted_date: posted_date.to_string(),
            job_type: "Full-time".to_string(),
            category: category.to_string(),
            is_urgent: false,
            is_verified: false,
            is_highlighted: false,
            applicants_count: None,
        }
    }

    fn two_page_fixture() -> Vec<Job> {
        vec![
            // page 0 (page_size 3)
            job("1", "Driving", "15,000 - 22,000/month", "Today"),
            job("2", "Plumbing", "20,000 - 30,000/month", "Yesterday"),
            job("3", "Driving", "12,000 - 18,000/month", "2 days ago"),
            // page 1
            job("4", "Driving", "18,000 - 24,000/month", "3 days ago"),
            job("5", "Cooking", "14,000 - 19,000/month", "4 days ago"),
        ]
    }

    struct FailingSource;

    #[rocket::async_trait]
    impl JobSource for FailingSource {
        async fn load_page(&self, _page_index: u32, _page_size: u32) -> Result<JobPage> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn test_initial_load_and_paging() {
        let source = Arc::new(StaticJobSource::new(two_page_fixture()));
        let mut controller = ListingsController::new(source, 3);

        controller.load_initial().await.unwrap();
        assert_eq!(controller.state().all_jobs.len(), 3);
        assert!(controller.state().has_more);

        controller.load_more().await.unwrap();
        assert_eq!(controller.state().all_jobs.len(), 5);
        assert_eq!(controller.state().current_page, 1);
        assert!(!controller.state().has_more);
    }

    #[tokio::test]
    async fn test_no_duplicate_ids_across_pages() {
        let source = Arc::new(StaticJobSource::new(two_page_fixture()));
        let mut controller = ListingsController::new(source, 3);

        controller.load_initial().await.unwrap();
        controller.load_more().await.unwrap();

        let mut ids: Vec<&str> = controller
            .state()
            .all_jobs
            .iter()
            .map(|j| j.id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), controller.state().all_jobs.len());
    }

    #[tokio::test]
    async fn test_load_more_is_noop_when_exhausted() {
        let source = Arc::new(StaticJobSource::new(two_page_fixture()));
        let mut controller = ListingsController::new(source, 3);

        controller.load_initial().await.unwrap();
        controller.load_more().await.unwrap();
        assert!(!controller.state().has_more);

        controller.load_more().await.unwrap();
        assert_eq!(controller.state().all_jobs.len(), 5);
        assert_eq!(controller.state().current_page, 1);
    }

    #[tokio::test]
    async fn test_append_preserves_filter() {
        let source = Arc::new(StaticJobSource::new(two_page_fixture()));
        let mut controller = ListingsController::new(source, 3);

        controller.load_initial().await.unwrap();
        controller.on_filter_change(FilterCriteria {
            categories: vec!["Driving".to_string()],
            ..Default::default()
        });
        assert_eq!(controller.state().visible_jobs.len(), 2);

        // page 1 carries one more Driving job and one Cooking job
        controller.load_more().await.unwrap();
        assert_eq!(controller.state().visible_jobs.len(), 3);
        assert!(controller
            .state()
            .visible_jobs
            .iter()
            .all(|j| j.category == "Driving"));
    }

    #[tokio::test]
    async fn test_append_uses_criteria_current_at_resolution() {
        let source = Arc::new(StaticJobSource::new(two_page_fixture()));
        let mut controller = ListingsController::new(source, 3);

        controller.load_initial().await.unwrap();
        controller.on_filter_change(FilterCriteria {
            categories: vec!["Cooking".to_string()],
            ..Default::default()
        });
        controller.load_more().await.unwrap();

        // only the Cooking job from page 1 is visible under the latest filter
        let ids: Vec<&str> = controller
            .state()
            .visible_jobs
            .iter()
            .map(|j| j.id.as_str())
            .collect();
        assert_eq!(ids, vec!["5"]);
    }

    #[tokio::test]
    async fn test_sort_change_reorders_visible_jobs() {
        let source = Arc::new(StaticJobSource::new(two_page_fixture()));
        let mut controller = ListingsController::new(source, 3);

        controller.load_initial().await.unwrap();
        controller.on_sort_change(SortMode::SalaryLow);

        let mins: Vec<i64> = controller
            .state()
            .visible_jobs
            .iter()
            .map(|j| parse_salary_bound(&j.salary, 0))
            .collect();
        assert_eq!(mins, vec![12000, 15000, 20000]);
    }

    #[tokio::test]
    async fn test_failed_load_more_leaves_state_untouched() {
        let source = Arc::new(StaticJobSource::new(two_page_fixture()));
        let mut controller = ListingsController::new(source, 3);
        controller.load_initial().await.unwrap();

        // swap in a source that always fails for the next page
        controller.source = Arc::new(FailingSource);
        assert!(controller.load_more().await.is_err());

        assert_eq!(controller.state().all_jobs.len(), 3);
        assert_eq!(controller.state().current_page, 0);
        assert!(controller.state().has_more);
        assert!(!controller.state().loading_more);
    }
}
