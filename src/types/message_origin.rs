use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the conversation authored a message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    /// The message was typed by the user.
    User,

    /// The message came from the support agent (or is a local
    /// agent-attributed fallback, e.g. on connection failure).
    Agent,
}

impl MessageOrigin {
    /// Returns true for agent-authored messages.
    pub fn is_agent(self) -> bool {
        matches!(self, MessageOrigin::Agent)
    }
}

impl fmt::Display for MessageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageOrigin::User => write!(f, "user"),
            MessageOrigin::Agent => write!(f, "agent"),
        }
    }
}

/// Error returned when parsing an invalid message origin string.
#[derive(Debug)]
pub struct MessageOriginParseError {
    /// The invalid string value that could not be parsed.
    pub invalid_value: String,
}

impl fmt::Display for MessageOriginParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown message origin: {}", self.invalid_value)
    }
}

impl std::error::Error for MessageOriginParseError {}

impl FromStr for MessageOrigin {
    type Err = MessageOriginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageOrigin::User),
            "agent" => Ok(MessageOrigin::Agent),
            _ => Err(MessageOriginParseError {
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
    fn serializes_snake_case() {
        assert_eq!(to_value(MessageOrigin::User).unwrap(), json!("user"));
        assert_eq!(to_value(MessageOrigin::Agent).unwrap(), json!("agent"));
    }

    #[test]
    fn deserializes_snake_case() {
        let origin: MessageOrigin = from_value(json!("agent")).unwrap();
        assert_eq!(origin, MessageOrigin::Agent);
    }

    #[test]
    fn round_trips_display_and_from_str() {
        for origin in [MessageOrigin::User, MessageOrigin::Agent] {
            assert_eq!(origin.to_string().parse::<MessageOrigin>().unwrap(), origin);
        }
        assert!("bot".parse::<MessageOrigin>().is_err());
    }
}
