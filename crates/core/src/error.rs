use std::time::Duration;

/// Errors surfaced by the client runtime.
///
/// Service status codes (not-found, permission-denied, ...) pass through
/// unchanged in the `Rpc` variant.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid request argument: {0}")]
    InvalidArgument(String),
    #[error("There was an error with the transport channel.")]
    Transport(#[source] tonic::transport::Error),
    #[error("There was an error decoding the response payload.")]
    Decode(#[source] prost::DecodeError),
    #[error("The service returned an error status.")]
    Rpc(#[source] tonic::Status),
    #[error("Invalid metadata value")]
    InvalidMetadataValue(#[source] tonic::metadata::errors::InvalidMetadataValue),
    #[error("The call deadline of {0:?} was exceeded.")]
    DeadlineExceeded(Duration),
}

impl Error {
    /// Builds the `InvalidArgument` raised when a required field is absent.
    pub fn missing_field(field: &str) -> Error {
        Error::InvalidArgument(format!("missing required field `{field}`"))
    }

    /// The gRPC status code, when the service itself rejected the call.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            Error::Rpc(status) => Some(status.code()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = Error::missing_field("parent");
        assert_eq!(
            error.to_string(),
            "Invalid request argument: missing required field `parent`"
        );
    }

    #[test]
    fn test_code_passthrough() {
        let error = Error::Rpc(tonic::Status::not_found("no such resource"));
        assert_eq!(error.code(), Some(tonic::Code::NotFound));

        let error = Error::missing_field("name");
        assert!(error.code().is_none());
    }
}
