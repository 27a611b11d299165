#[derive(Debug, thiserror::Error)]
pub enum GuidelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read records file: {0}")]
    RecordsRead(std::io::Error),
    #[error("failed to parse records file: {0}")]
    RecordsParse(serde_json::Error),
    #[error("failed to serialize records: {0}")]
    RecordsSerialize(serde_json::Error),
    #[error("failed to write records file: {0}")]
    RecordsWrite(std::io::Error),
    #[error("failed to read abbreviations file: {0}")]
    AbbreviationsRead(std::io::Error),
    #[error("failed to parse abbreviations file: {0}")]
    AbbreviationsParse(serde_json::Error),
    #[error("failed to serialize abbreviations: {0}")]
    AbbreviationsSerialize(serde_json::Error),
    #[error("failed to persist abbreviations file: {0}")]
    AbbreviationsPersist(std::io::Error),
}

pub type GuidelineResult<T> = std::result::Result<T, GuidelineError>;
