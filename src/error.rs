use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelarError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    #[error("Assessment incomplete: {answered} of {required} required questions answered")]
    IncompleteAssessment { answered: usize, required: usize },

    #[error("Assessment already completed")]
    AlreadyCompleted,

    #[error("Completion already in progress")]
    CompletionInFlight,

    #[error("Remote tier error: {0}")]
    Remote(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),
}

pub type Result<T> = std::result::Result<T, TelarError>;
