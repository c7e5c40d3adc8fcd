use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A thumbs-up or thumbs-down rating for a conversation.
///
/// On the wire this is the integer `1` (up) or `-1` (down); the backend
/// rejects any other value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rating {
    /// Thumbs up.
    Up,

    /// Thumbs down.
    Down,
}

impl Rating {
    /// The wire value: `1` for up, `-1` for down.
    pub fn value(self) -> i8 {
        match self {
            Rating::Up => 1,
            Rating::Down => -1,
        }
    }

    /// Parse the wire value back into a rating.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            1 => Some(Rating::Up),
            -1 => Some(Rating::Down),
            _ => None,
        }
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.value())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i8::deserialize(deserializer)?;
        Rating::from_value(value)
            .ok_or_else(|| de::Error::custom(format!("rating must be 1 or -1, got {value}")))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Up => write!(f, "up"),
            Rating::Down => write!(f, "down"),
        }
    }
}

/// Error returned when parsing an invalid rating string.
#[derive(Debug)]
pub struct RatingParseError {
    /// The invalid string value that could not be parsed.
    pub invalid_value: String,
}

impl fmt::Display for RatingParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown rating: {}", self.invalid_value)
    }
}

impl std::error::Error for RatingParseError {}

impl FromStr for Rating {
    type Err = RatingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Rating::Up),
            "down" => Ok(Rating::Down),
            _ => Err(RatingParseError {
                invalid_value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, to_value};

    #[test]
    fn serializes_to_wire_integers() {
        assert_eq!(to_value(Rating::Up).unwrap(), json!(1));
        assert_eq!(to_value(Rating::Down).unwrap(), json!(-1));
    }

    #[test]
    fn deserializes_from_wire_integers() {
        assert_eq!(from_value::<Rating>(json!(1)).unwrap(), Rating::Up);
        assert_eq!(from_value::<Rating>(json!(-1)).unwrap(), Rating::Down);
        assert!(from_value::<Rating>(json!(0)).is_err());
        assert!(from_value::<Rating>(json!(2)).is_err());
    }

    #[test]
    fn parses_command_words() {
        assert_eq!("up".parse::<Rating>().unwrap(), Rating::Up);
        assert_eq!("down".parse::<Rating>().unwrap(), Rating::Down);
        assert!("sideways".parse::<Rating>().is_err());
    }
}
