//! AI Roadmap - interactive learning roadmap explorer

pub mod core;
pub mod curriculum;
pub mod llm;
pub mod resolver;
pub mod selection;
pub mod ui;
