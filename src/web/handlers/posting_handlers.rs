// src/web/handlers/posting_handlers.rs
//! Employer-side posting handler.

use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::core::database::{Database, JobRepository, NewJob};
use crate::web::types::{ActionResponse, StandardErrorResponse};

pub async fn post_job_handler(
    request: Json<NewJob>,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    let job = request.into_inner();

    if job.title.trim().is_empty() || job.category.trim().is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Title and category are required".to_string(),
            "INVALID_JOB".to_string(),
            vec!["Fill in the job title and pick a category".to_string()],
        )));
    }

    if job.salary_min < 0 || job.salary_min > job.salary_max {
        return Err(Json(StandardErrorResponse::new(
            "Salary range is invalid".to_string(),
            "INVALID_JOB".to_string(),
            vec!["salary_min must be non-negative and not exceed salary_max".to_string()],
        )));
    }

    let title = job.title.clone();
    match JobRepository::new(db.pool()).insert(job, Utc::now()).await {
        Ok(row) => {
            info!("Job posted: {} ({})", title, row.id);
            Ok(Json(
                ActionResponse::success(
                    format!("Your job \"{}\" has been posted and is now live", title),
                    "job_posted".to_string(),
                )
                .with_next_actions(vec![
                    format!("Share the posting id {} with your team", row.id),
                    "Applications will appear on your dashboard".to_string(),
                ]),
            ))
        }
        Err(e) => {
            error!("Job insert failed: {:#}", e);
            Err(Json(StandardErrorResponse::new(
                "Failed to post job".to_string(),
                "POST_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )))
        }
    }
}
