// src/listings/mod.rs
//! The job-listings pipeline: canonical records, filtering, sorting,
//! paging, and the source strategy feeding them.

pub mod filter;
pub mod job;
pub mod parse;
pub mod sample_jobs;
pub mod sort;
pub mod source;
pub mod state;
pub mod stats;

pub use filter::{apply_filters, FilterCriteria};
pub use job::Job;
pub use sort::{sort_jobs, SortMode};
pub use source::{FallbackJobSource, JobPage, JobSource, RemoteJobSource, StaticJobSource};
pub use state::{ListingsController, ListingsState};
