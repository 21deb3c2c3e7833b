// src/web/handlers/application_handlers.rs
//! Apply action: precondition checks plus the application insert.

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

use crate::core::database::{ApplicationRepository, Database, JobRepository};
use crate::web::types::{ActionResponse, ApplyRequest, StandardErrorResponse};

pub async fn apply_handler(
    job_id: String,
    request: Json<ApplyRequest>,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    let applicant_id = request.applicant_id.trim();
    if applicant_id.is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Applicant id is required".to_string(),
            "INVALID_REQUEST".to_string(),
            vec!["Provide applicantId in the request body".to_string()],
        )));
    }

    let jobs = JobRepository::new(db.pool());
    let job = match jobs.fetch_by_id(&job_id).await {
        Ok(Some(job)) if job.status == "active" => job,
        Ok(_) => {
            return Err(Json(StandardErrorResponse::new(
                format!("Job '{}' not found", job_id),
                "JOB_NOT_FOUND".to_string(),
                vec!["The posting may have been closed by the employer".to_string()],
            )));
        }
        Err(e) => {
            error!("Apply lookup failed for job {}: {:#}", job_id, e);
            return Err(Json(StandardErrorResponse::new(
                "Could not submit application".to_string(),
                "APPLY_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )));
        }
    };

    let applications = ApplicationRepository::new(db.pool());
    match applications.exists(&job_id, applicant_id).await {
        Ok(true) => {
            warn!(
                "Duplicate application rejected: job {} applicant {}",
                job_id, applicant_id
            );
            return Err(Json(StandardErrorResponse::new(
                "You have already applied to this job".to_string(),
                "ALREADY_APPLIED".to_string(),
                vec!["Check your applications on the dashboard".to_string()],
            )));
        }
        Ok(false) => {}
        Err(e) => {
            error!("Application check failed for job {}: {:#}", job_id, e);
            return Err(Json(StandardErrorResponse::new(
                "Could not submit application".to_string(),
                "APPLY_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )));
        }
    }

    if let Err(e) = applications.insert(&job_id, applicant_id).await {
        error!("Application insert failed for job {}: {:#}", job_id, e);
        return Err(Json(StandardErrorResponse::new(
            "Could not submit application".to_string(),
            "APPLY_ERROR".to_string(),
            vec!["Try again in a few moments".to_string()],
        )));
    }

    info!("Application submitted for '{}' by {}", job.title, applicant_id);

    Ok(Json(
        ActionResponse::success(
            format!("Application submitted for '{}'", job.title),
            "application_submitted".to_string(),
        )
        .with_next_actions(vec![
            "The employer will review your profile".to_string(),
            "Track the status on your dashboard".to_string(),
        ]),
    ))
}
