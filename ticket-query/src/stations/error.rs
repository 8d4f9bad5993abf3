//! Station directory error types.

use crate::error::ErrorKind;

/// Errors that can occur when loading or querying the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Station list endpoint returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The station list contained no recognisable entries
    #[error("station list contained no stations")]
    EmptyList,

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },

    /// No station with this exact name
    #[error("specified station {0} does not exist")]
    UnknownStation(String),
}

impl StationError {
    /// Coarse category for the top-level handler.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StationError::UnknownStation(_) => ErrorKind::UserInput,
            StationError::Http(_)
            | StationError::Api { .. }
            | StationError::EmptyList
            | StationError::Cache { .. } => ErrorKind::RemoteUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::UnknownStation("不存在的城市".into());
        assert_eq!(err.to_string(), "specified station 不存在的城市 does not exist");

        let err = StationError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");
    }

    #[test]
    fn unknown_station_is_user_error() {
        assert_eq!(
            StationError::UnknownStation("x".into()).kind(),
            ErrorKind::UserInput
        );
        assert_eq!(StationError::EmptyList.kind(), ErrorKind::RemoteUnavailable);
    }
}
