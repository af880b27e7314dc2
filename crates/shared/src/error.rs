use thiserror::Error;

/// Everything a single action can fail with. Each variant's display text is
/// exactly what ends up in the rendered error block.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("Erro HTTP! Status: {status} - {reason}")]
    RequestFailed { status: u16, reason: String },

    /// The request never completed; carries the transport's own description.
    #[error("{0}")]
    Network(String),

    /// The response body was not valid JSON of the expected shape.
    #[error("{0}")]
    Parse(String),

    /// A local pre-network input check failed.
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    pub fn request_failed(status: u16, reason: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            reason: reason.into(),
        }
    }
}
