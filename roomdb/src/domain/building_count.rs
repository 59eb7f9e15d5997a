use serde::{Deserialize, Serialize};

/// Number of free rooms in one building for the queried window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingCount {
    pub building: String,
    pub free_room_count: u32,
}
