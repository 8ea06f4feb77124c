use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReachError {
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("missing API credentials: {0}")]
    AuthenticationError(String),
    #[error("request to reachability API failed: {0}")]
    NetworkError(String),
    #[error("reachability API responded with status {status}: {message}")]
    ApiError { status: u16, message: String },
    #[error("failure decoding reachability response: {0}")]
    ParseError(String),
    #[error("failure rendering map: {0}")]
    RenderError(String),
    #[error("failure writing '{filepath}': {source}")]
    IoError {
        filepath: String,
        source: std::io::Error,
    },
}

impl From<tera::Error> for ReachError {
    fn from(e: tera::Error) -> Self {
        ReachError::RenderError(e.to_string())
    }
}

impl ReachError {
    /// wraps an io error with the path that was being written
    pub fn io<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> ReachError {
        ReachError::IoError {
            filepath: path.as_ref().to_string_lossy().to_string(),
            source,
        }
    }
}
