pub mod items;

pub use items::{ItemResponse, NewItem};
