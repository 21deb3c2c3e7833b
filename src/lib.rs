pub mod admin_cli;
pub mod core;
pub mod environment;
pub mod listings;
pub mod notify;
pub mod web;

pub use environment::EnvironmentConfig;
pub use listings::{
    apply_filters, sort_jobs, FilterCriteria, Job, ListingsController, ListingsState, SortMode,
};
pub use web::start_web_server;
