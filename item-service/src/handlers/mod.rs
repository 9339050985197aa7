pub mod health;
pub mod items;
pub mod metrics;

pub use health::{health_check, readiness_check};
pub use items::{create_item, get_item, list_items};
pub use metrics::metrics_endpoint;
