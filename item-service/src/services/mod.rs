pub mod database;
pub mod metrics;

pub use database::MongoDb;
pub use metrics::{init_metrics, render_metrics};
