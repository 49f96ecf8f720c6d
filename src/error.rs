use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobReclassError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid job record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Invalid category map: {0}")]
    InvalidCategoryMap(String),

    #[error("No job records found in {0}")]
    NoJobsFound(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JobReclassError>;
