use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadmapError {
    #[error("Unknown step: {0}")]
    InvalidStep(u32),

    #[error("Skill '{0}' is not part of the current step")]
    InvalidSkill(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoadmapError>;
