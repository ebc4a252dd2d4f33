//! Built-in roadmap content - static tables all lookups reference
//!
//! Everything in this module is inert display data ported from the
//! published curriculum; no logic lives here. `STEPS` is the roadmap
//! itself, `DETAILS` the per-step skill records, and `units` the content
//! for the dedicated detail pages.

mod step1;
mod step10;
mod step2;
mod step3;
mod step4;
mod step5;
mod step6;
mod step7;
mod step8;
mod step9;
mod steps;
pub mod units;

use crate::curriculum::model::{ContentRecord, StepId};

pub use step10::{COMPUTER_USE, ROBOTIC_AGENTS};
pub use step8::AGENT_INSTRUMENTATION;
pub use step9::{GUARDRAILS, PROMPT_INJECTION_DEFENSES, SANDBOXING};
pub use steps::STEPS;

/// Per-step skill-name to content-record tables, keyed by step id.
/// Steps without authored detail content simply have no entry.
pub static DETAILS: &[(StepId, &[(&str, ContentRecord)])] = &[
    (1, step1::DETAILS),
    (2, step2::DETAILS),
    (3, step3::DETAILS),
    (4, step4::DETAILS),
    (5, step5::DETAILS),
    (6, step6::DETAILS),
    (7, step7::DETAILS),
    (8, step8::DETAILS),
    (9, step9::DETAILS),
    (10, step10::DETAILS),
];
