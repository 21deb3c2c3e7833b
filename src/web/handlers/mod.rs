pub mod application_handlers;
pub mod listing_handlers;
pub mod posting_handlers;
pub mod system_handlers;

pub use application_handlers::*;
pub use listing_handlers::*;
pub use posting_handlers::*;
pub use system_handlers::*;
