use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("malformed quiz document (json): {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed quiz document (yaml): {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("question `{question}` has no correct answers")]
    NoAnswers { question: String },
    #[error("question `{question}`: key `{key}` is both an answer and a distractor")]
    OverlappingKey { question: String, key: String },
    #[error("could not read quiz document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, QuizError>;
