// src/web/handlers/listing_handlers.rs
//! Listings query, job detail, and dashboard statistics handlers.

use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::core::database::{Database, JobRepository};
use crate::listings::source::canonical_job_from_row;
use crate::listings::stats::{listing_stats, ListingStats};
use crate::listings::{
    FallbackJobSource, FilterCriteria, JobSource, ListingsController, RemoteJobSource, SortMode,
    StaticJobSource,
};
use crate::notify::{BufferedNotifier, LogNotifier, Notification, Notifier};
use crate::web::types::{
    DataResponse, JobDetailData, ListingsData, ServerConfig, StandardErrorResponse,
};

/// How many of the most recent postings feed the statistics endpoint.
const STATS_WINDOW: u32 = 200;

fn split_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
pub async fn list_jobs_handler(
    search: Option<String>,
    location: Option<String>,
    categories: Option<String>,
    job_types: Option<String>,
    salary_min: Option<i64>,
    salary_max: Option<i64>,
    sort: Option<String>,
    page: Option<u32>,
    config: &State<ServerConfig>,
    db: &State<Database>,
) -> Result<Json<DataResponse<ListingsData>>, Json<StandardErrorResponse>> {
    let sort_mode = match sort.as_deref() {
        None => SortMode::default(),
        Some(value) => match SortMode::from_param(value) {
            Some(mode) => mode,
            None => {
                return Err(Json(StandardErrorResponse::new(
                    format!("Unknown sort mode: {}", value),
                    "INVALID_SORT".to_string(),
                    vec!["Use one of: recent, salary-high, salary-low".to_string()],
                )));
            }
        },
    };

    let criteria = FilterCriteria {
        categories: split_list(categories),
        job_types: split_list(job_types),
        salary_range: match (salary_min, salary_max) {
            (None, None) => None,
            (min, max) => Some((min.unwrap_or(0), max.unwrap_or(i64::MAX))),
        },
        location: String::new(),
        search_query: search.unwrap_or_default(),
        search_location: location.unwrap_or_default(),
    };

    let requested_page = page.unwrap_or(0);

    let notifier = Arc::new(BufferedNotifier::new());
    let source = FallbackJobSource::new(
        Arc::new(RemoteJobSource::new(db.pool().clone())),
        StaticJobSource::with_sample_jobs(),
        notifier.clone(),
    );

    let mut controller = ListingsController::new(Arc::new(source), config.page_size);
    controller.on_filter_change(criteria);
    controller.on_sort_change(sort_mode);

    if let Err(e) = controller.load_initial().await {
        error!("Initial listings load failed: {:#}", e);
        return Err(Json(StandardErrorResponse::new(
            "Could not load job listings".to_string(),
            "LOAD_ERROR".to_string(),
            vec!["Try again in a few moments".to_string()],
        )));
    }

    // Replay pagination up to the page the client is showing. Each append
    // re-applies the current filter and sort over the full collection.
    while controller.state().current_page < requested_page && controller.state().has_more {
        if let Err(e) = controller.load_more().await {
            warn!("Load more failed: {:#}", e);
            notifier.notify(Notification::error(
                "Could not load more jobs",
                "Please try again.",
            ));
            break;
        }
    }

    let state = controller.state();
    let data = ListingsData {
        jobs: state.visible_jobs.clone(),
        total_loaded: state.all_jobs.len(),
        current_page: state.current_page,
        has_more: state.has_more,
    };

    info!(
        "Listings query served: {} visible of {} loaded",
        data.jobs.len(),
        data.total_loaded
    );

    Ok(Json(
        DataResponse::success(format!("{} jobs found", data.jobs.len()), data)
            .with_notifications(notifier.drain()),
    ))
}

pub async fn job_detail_handler(
    id: String,
    db: &State<Database>,
) -> Result<Json<DataResponse<JobDetailData>>, Json<StandardErrorResponse>> {
    let row = match JobRepository::new(db.pool()).fetch_by_id(&id).await {
        Ok(row) => row,
        Err(e) => {
            error!("Job detail lookup failed for {}: {:#}", id, e);
            return Err(Json(StandardErrorResponse::new(
                "Could not load job details".to_string(),
                "LOAD_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )));
        }
    };

    let row = match row {
        Some(row) if row.status == "active" => row,
        _ => {
            return Err(Json(StandardErrorResponse::new(
                format!("Job '{}' not found", id),
                "JOB_NOT_FOUND".to_string(),
                vec!["The posting may have been closed by the employer".to_string()],
            )));
        }
    };

    let description = row.description.clone();
    let job = canonical_job_from_row(row, Utc::now());

    Ok(Json(DataResponse::success(
        "Job details loaded".to_string(),
        JobDetailData { job, description },
    )))
}

pub async fn listing_stats_handler(
    db: &State<Database>,
) -> Result<Json<DataResponse<ListingStats>>, Json<StandardErrorResponse>> {
    let source = FallbackJobSource::new(
        Arc::new(RemoteJobSource::new(db.pool().clone())),
        StaticJobSource::with_sample_jobs(),
        Arc::new(LogNotifier),
    );

    let page = match source.load_page(0, STATS_WINDOW).await {
        Ok(page) => page,
        Err(e) => {
            error!("Stats query failed: {:#}", e);
            return Err(Json(StandardErrorResponse::new(
                "Could not compute listing statistics".to_string(),
                "LOAD_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )));
        }
    };

    Ok(Json(DataResponse::success(
        "Listing statistics computed".to_string(),
        listing_stats(&page.jobs),
    )))
}
