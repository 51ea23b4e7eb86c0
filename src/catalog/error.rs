use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("invalid catalog payload in {file}: {message}")]
    InvalidPayload { file: String, message: String },
}
