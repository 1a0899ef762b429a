use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Geocoding request failed: {0}")]
    Gateway(#[from] anyhow::Error),
    #[error("Invalid geocoding response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("The geocoding response has no 'results' field")]
    MissingResults,
    #[error("The input has no '{0}' column")]
    MissingColumn(String),
    #[error("Row {row} has no coordinates")]
    MissingCoordinates { row: usize },
}
