use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowBoardError>;

#[derive(Debug, Error)]
pub enum FlowBoardError {
    #[error("Please enter a board name")]
    EmptyBoardName,

    #[error("Please enter a column name")]
    EmptyColumnName,

    #[error("Please enter a task title")]
    EmptyCardTitle,

    #[error("No data to export. Create a board first!")]
    NothingToExport,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
