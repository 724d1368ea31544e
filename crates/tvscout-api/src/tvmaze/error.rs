use thiserror::Error;

/// Errors from the TVMaze API client.
///
/// Both variants mean the service could not be reached or refused the
/// request. Malformed bodies are not errors; they decode to empty lists.
#[derive(Debug, Error)]
pub enum TvMazeError {
    #[error("service unavailable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service unavailable (HTTP {status})")]
    Status { status: u16, message: String },
}
