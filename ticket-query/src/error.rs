//! Error classification shared by every module.
//!
//! Each module has its own error enum; `ErrorKind` is the coarse category the
//! top-level handler uses to pick an exit status.

use std::fmt;

/// Coarse category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad date, unknown station, or an invalid flag combination.
    UserInput,
    /// Network failure, timeout, or a payload of unexpected shape.
    RemoteUnavailable,
    /// A well-formed response that yielded no usable train services.
    EmptyResult,
}

impl ErrorKind {
    /// Process exit status for this kind of failure.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::UserInput | ErrorKind::EmptyResult => 1,
            ErrorKind::RemoteUnavailable => 2,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UserInput => f.write_str("user input error"),
            ErrorKind::RemoteUnavailable => f.write_str("remote service unavailable"),
            ErrorKind::EmptyResult => f.write_str("empty result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_non_zero() {
        for kind in [
            ErrorKind::UserInput,
            ErrorKind::RemoteUnavailable,
            ErrorKind::EmptyResult,
        ] {
            assert_ne!(kind.exit_code(), 0, "{kind}");
        }
    }

    #[test]
    fn remote_failures_are_distinguished() {
        assert_eq!(ErrorKind::UserInput.exit_code(), 1);
        assert_eq!(ErrorKind::RemoteUnavailable.exit_code(), 2);
    }
}
