use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid Swap: {0}")]
    InvalidSwap(String),

    #[error("Template Error: {0}")]
    Template(String),

    #[error("Roster Error: {0}")]
    Roster(String),
}

pub type CfResult<T> = Result<T, ScheduleError>;
