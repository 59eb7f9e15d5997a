mod building_count;
mod filters;
mod free_room;
mod freshness;
mod search_query;
mod timestamp;

pub use building_count::*;
pub use filters::*;
pub use free_room::*;
pub use freshness::*;
pub use search_query::*;
pub use timestamp::Timestamp;
pub(crate) use timestamp::{deserialize_optional_timestamp, parse_timestamp};
