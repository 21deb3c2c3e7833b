// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

use crate::core::database::Database;
use crate::web::types::{StandardErrorResponse, TextResponse};

pub async fn health_handler(
    db: &State<Database>,
) -> Result<Json<TextResponse>, Json<StandardErrorResponse>> {
    if let Err(e) = db.health_check().await {
        error!("Health check failed: {:#}", e);
        return Err(Json(StandardErrorResponse::new(
            "Database is unreachable".to_string(),
            "DATABASE_ERROR".to_string(),
            vec!["Check the database file and try again".to_string()],
        )));
    }

    Ok(Json(TextResponse::success(
        "Job marketplace API is running".to_string(),
    )))
}
