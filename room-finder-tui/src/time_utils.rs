use roomdb::domain::Timestamp;
use std::sync::OnceLock;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Determine the local UTC offset. Must run before any other thread is
/// spawned, since the offset cannot be read soundly afterwards.
pub fn init_local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

fn local_offset() -> UtcOffset {
    LOCAL_OFFSET.get().copied().unwrap_or(UtcOffset::UTC)
}

fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    dt.to_offset(local_offset())
}

pub fn local_now() -> PrimitiveDateTime {
    let now = to_local_time(OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

/// A backend timestamp in local time. Values stored without an offset are
/// already local wall-clock time.
pub fn timestamp_to_local(ts: Timestamp) -> OffsetDateTime {
    ts.in_offset(local_offset())
}

/// `HH:MM` in local time.
pub fn format_local_hm(ts: Timestamp) -> String {
    let t = timestamp_to_local(ts).time();
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// `YYYY-MM-DD HH:MM` in local time.
pub fn format_local_datetime(ts: Timestamp) -> String {
    let local = timestamp_to_local(ts);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        local.year(),
        local.month() as u8,
        local.day(),
        local.hour(),
        local.minute()
    )
}
