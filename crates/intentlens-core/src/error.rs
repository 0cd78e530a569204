use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntentLensError {
    /// The model answered, but not with a usable keyword payload.
    #[error("Data format error: {0}")]
    Format(String),

    /// The model call itself failed (transport, auth, quota, timeout).
    #[error("Error generating keywords: {0}")]
    Generation(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl IntentLensError {
    pub fn is_format(&self) -> bool {
        matches!(self, IntentLensError::Format(_))
    }

    pub fn is_generation(&self) -> bool {
        matches!(self, IntentLensError::Generation(_))
    }
}

pub type Result<T> = std::result::Result<T, IntentLensError>;
