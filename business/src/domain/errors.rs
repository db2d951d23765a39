/// Errors raised by the gateways that talk to the storefront backend.
/// Use code-style identifiers for all error variants for i18n compatibility;
/// the trailing detail is the underlying failure message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.transport: {0}")]
    Transport(String),
    #[error("gateway.status: {status} {message}")]
    Status { status: u16, message: String },
    #[error("gateway.decode: {0}")]
    Decode(String),
    #[error("gateway.empty_envelope")]
    EmptyEnvelope,
}

impl GatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        GatewayError::Transport(message.into())
    }
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Status {
            status,
            message: message.into(),
        }
    }
    pub fn decode(message: impl Into<String>) -> Self {
        GatewayError::Decode(message.into())
    }
    pub fn empty_envelope() -> Self {
        GatewayError::EmptyEnvelope
    }

    /// HTTP status reported by the backend, if the failure came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
