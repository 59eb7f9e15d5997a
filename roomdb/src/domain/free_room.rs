use serde::{Deserialize, Deserializer, Serialize};
use super::{deserialize_optional_timestamp, Timestamp};

const ROOM_DETAILS_URL: &str = "https://learningspaces.ubc.ca/find-a-space/";

/// A room with no booking overlapping the queried window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeRoom {
    pub building: String,
    #[serde(deserialize_with = "deserialize_room_number")]
    pub room_number: String,
    pub capacity: Option<u32>,
    pub features: Option<String>,
    /// Start of the next booking in this room on the queried day. `None`
    /// means the room stays free for the rest of the day.
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub earliest_booking: Option<Timestamp>,
}

impl FreeRoom {
    /// Link to the room's page on the learning spaces site.
    pub fn details_url(&self) -> String {
        format!(
            "{}?classroom={}-{}",
            ROOM_DETAILS_URL,
            self.building.to_lowercase(),
            self.room_number
        )
    }

    pub fn is_free_all_day(&self) -> bool {
        self.earliest_booking.is_none()
    }
}

/// Room numbers are numeric for most buildings, but some carry a suffix
/// ("1001A"), so both JSON numbers and strings are accepted.
fn deserialize_room_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRoomNumber {
        Number(u64),
        Text(String),
    }

    Ok(match RawRoomNumber::deserialize(deserializer)? {
        RawRoomNumber::Number(n) => n.to_string(),
        RawRoomNumber::Text(s) => s.trim().to_string(),
    })
}
