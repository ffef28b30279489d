pub mod error;

pub use serde_json;
