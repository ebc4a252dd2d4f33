pub mod config;
pub mod error;

pub use config::{AppConfig, LlmConfig};
pub use error::{Result, RoadmapError};
