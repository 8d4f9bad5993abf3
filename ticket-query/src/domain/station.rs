//! Station code types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {code:?}: {reason}")]
pub struct InvalidStationCode {
    code: String,
    reason: &'static str,
}

/// A valid 3-letter telecode used by the ticketing service in place of a
/// station name.
///
/// Codes are always 3 uppercase ASCII letters. This type guarantees that any
/// `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use ticket_query::domain::StationCode;
///
/// let bjp = StationCode::parse("BJP").unwrap();
/// assert_eq!(bjp.as_str(), "BJP");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("bjp").is_err());
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("BJ").is_err());
/// assert!(StationCode::parse("BJPX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode([u8; 3]);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidStationCode {
                code: s.to_string(),
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidStationCode {
                code: s.to_string(),
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Ok(StationCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StationCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("BJP").is_ok());
        assert!(StationCode::parse("SHH").is_ok());
        assert!(StationCode::parse("IZQ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("bjp").is_err());
        assert!(StationCode::parse("Bjp").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("B").is_err());
        assert!(StationCode::parse("BJPP").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(StationCode::parse("B1P").is_err());
        assert!(StationCode::parse("B P").is_err());
        assert!(StationCode::parse("北京").is_err());
    }

    #[test]
    fn error_names_offending_code() {
        let err = StationCode::parse("bj").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station code \"bj\": must be exactly 3 characters"
        );
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("GZQ").unwrap();
        assert_eq!(format!("{}", code), "GZQ");
        assert_eq!(format!("{:?}", code), "StationCode(GZQ)");
    }

    #[test]
    fn serde_as_plain_string() {
        let code = StationCode::parse("ZHQ").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"ZHQ\"");

        let back: StationCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        assert!(serde_json::from_str::<StationCode>("\"zhq\"").is_err());
    }
}
