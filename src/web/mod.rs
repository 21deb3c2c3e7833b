// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::core::database::{Database, NewJob};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use std::path::PathBuf;
use tracing::{error, info};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PATCH, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

// API Routes

#[get("/listings?<search>&<location>&<categories>&<job_types>&<salary_min>&<salary_max>&<sort>&<page>")]
#[allow(clippy::too_many_arguments)]
pub async fn list_jobs(
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
    handlers::list_jobs_handler(
        search, location, categories, job_types, salary_min, salary_max, sort, page, config, db,
    )
    .await
}

#[get("/jobs/<id>")]
pub async fn job_detail(
    id: String,
    db: &State<Database>,
) -> Result<Json<DataResponse<JobDetailData>>, Json<StandardErrorResponse>> {
    handlers::job_detail_handler(id, db).await
}

#[get("/stats")]
pub async fn listing_stats(
    db: &State<Database>,
) -> Result<Json<DataResponse<crate::listings::stats::ListingStats>>, Json<StandardErrorResponse>> {
    handlers::listing_stats_handler(db).await
}

#[post("/jobs", data = "<request>")]
pub async fn post_job(
    request: Json<NewJob>,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::post_job_handler(request, db).await
}

#[post("/jobs/<id>/apply", data = "<request>")]
pub async fn apply_to_job(
    id: String,
    request: Json<ApplyRequest>,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::apply_handler(id, request, db).await
}

#[get("/health")]
pub async fn health(
    db: &State<Database>,
) -> Result<Json<TextResponse>, Json<StandardErrorResponse>> {
    handlers::health_handler(db).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the request path".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

// Main server start function
pub async fn start_web_server(database_path: PathBuf, page_size: u32, port: u16) -> Result<()> {
    let db = match Database::new(&database_path).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize database: {:#}", e);
            return Err(e);
        }
    };

    let server_config = ServerConfig { page_size };

    info!("Starting rozgar job marketplace API server");
    info!("Database: {}", database_path.display());
    info!("Listings page size: {}", page_size);

    let figment = rocket::Config::figment().merge(("port", port));

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(server_config)
        .manage(db)
        .register("/api", catchers![bad_request, not_found, internal_error])
        .mount(
            "/api",
            routes![
                list_jobs,
                job_detail,
                listing_stats,
                post_job,
                apply_to_job,
                health,
                options,
            ],
        )
        .launch()
        .await?;

    Ok(())
}
