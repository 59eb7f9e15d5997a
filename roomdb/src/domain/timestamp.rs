use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// A timestamp as the REST layer renders it. `timestamptz` columns come back
/// as RFC 3339 and are `Zoned`. Plain `timestamp` columns (the booking times)
/// hold campus wall-clock time without an offset and are kept `Local`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Zoned(OffsetDateTime),
    Local(PrimitiveDateTime),
}

impl Timestamp {
    /// The instant seen from `local`. A `Local` value is already wall-clock
    /// time there, so it keeps its date and time.
    pub fn in_offset(self, local: UtcOffset) -> OffsetDateTime {
        match self {
            Timestamp::Zoned(dt) => dt.to_offset(local),
            Timestamp::Local(dt) => dt.assume_offset(local),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = match self {
            Timestamp::Zoned(dt) => dt.format(&Rfc3339),
            Timestamp::Local(dt) => {
                dt.format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
            }
        };
        serializer.serialize_str(&formatted.map_err(serde::ser::Error::custom)?)
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(Timestamp::Zoned(dt));
    }

    PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
        .ok()
        .map(Timestamp::Local)
}

/// Unparseable values are treated like a missing one.
pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}
