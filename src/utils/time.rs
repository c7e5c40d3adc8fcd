//! RFC 3339 serde helpers for message timestamps.

use serde::{Deserialize, Deserializer, Serializer};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Deserialize an RFC 3339 formatted string into an OffsetDateTime.
pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OffsetDateTime::parse(&s, &Rfc3339).map_err(serde::de::Error::custom)
}

/// Serialize an OffsetDateTime into an RFC 3339 formatted string.
pub fn serialize<S>(datetime: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = datetime
        .format(&Rfc3339)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&s)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::{from_value, json, to_value};
    use time::OffsetDateTime;
    use time::macros::datetime;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "super")]
        at: OffsetDateTime,
    }

    #[test]
    fn round_trips_rfc3339() {
        let stamped = Stamped {
            at: datetime!(2026-08-29 14:03:11 UTC),
        };
        let json = to_value(&stamped).unwrap();
        assert_eq!(json, json!({"at": "2026-08-29T14:03:11Z"}));
        assert_eq!(from_value::<Stamped>(json).unwrap(), stamped);
    }

    #[test]
    fn rejects_non_rfc3339_strings() {
        assert!(from_value::<Stamped>(json!({"at": "2026-08-29 14:03:11"})).is_err());
    }
}
