//! Text generation - API client and the commit-message helper

pub mod client;
pub mod commit;

pub use client::{ApiFormat, LlmClient, TextGenerator};
pub use commit::generate_commit_message;
