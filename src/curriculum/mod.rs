//! Curriculum registry - the static roadmap content and read-only access to it
//!
//! The content itself lives in `data` as static tables; `registry` wraps
//! them behind the lookup operations the resolver and the UI consume.

pub mod data;
pub mod model;
pub mod registry;

pub use model::{CodeExample, ContentRecord, InteractiveTool, LearningPoint, Step, StepId};
pub use registry::CurriculumRegistry;
