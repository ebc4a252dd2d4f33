//! Terminal UI - ratatui views over the roadmap

pub mod display;
pub mod input;
pub mod state;
pub mod terminal;

pub use input::Action;
pub use state::{App, Focus};
