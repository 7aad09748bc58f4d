/// Dashboard fetch errors.
///
/// `Clone` so a single failed fetch can be handed to every caller that was
/// waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("dashboard request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status. `body` is the raw response body.
    #[error("dashboard request returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("dashboard payload could not be decoded: {0}")]
    Decode(String),

    #[error("dashboard state unavailable: {0}")]
    State(String),

    #[error("invalid dashboard configuration: {0}")]
    Config(String),
}

impl DashboardError {
    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
