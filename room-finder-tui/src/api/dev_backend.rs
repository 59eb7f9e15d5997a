use roomdb::domain::{BuildingCount, DataFreshness, FreeRoom, SearchQuery, Timestamp};
use roomdb::SearchResults;
use std::collections::BTreeMap;
use std::sync::Arc;
use time::macros::time;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time, Weekday};

use crate::time_utils;

/// Days around today covered by the seeded bookings.
const SEEDED_DAYS_BEFORE: i64 = 7;
const SEEDED_DAYS_AFTER: i64 = 30;

/// In-memory rooms and a weekday timetable, answering searches the way the
/// remote procedures do.
#[derive(Debug, Clone)]
pub struct DevBackend {
    rooms: Arc<Vec<DevRoom>>,
    bookings: Arc<Vec<DevBooking>>,
}

#[derive(Debug, Clone)]
struct DevRoom {
    building: &'static str,
    room_number: &'static str,
    capacity: u32,
    features: Option<&'static str>,
}

/// A booking repeating every weekday.
#[derive(Debug, Clone)]
struct DevBooking {
    building: &'static str,
    room_number: &'static str,
    start: Time,
    end: Time,
}

impl DevBackend {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(seed_dev_rooms()),
            bookings: Arc::new(seed_dev_bookings()),
        }
    }

    pub fn search(&self, query: &SearchQuery) -> SearchResults {
        let date = query.date;
        let mut rooms = Vec::new();
        for room in self.rooms.iter() {
            let conflicting = self
                .bookings_on(date, room)
                .any(|b| b.start < query.end && b.end > query.start);
            if conflicting {
                continue;
            }

            let earliest_booking = self
                .bookings_on(date, room)
                .filter(|b| b.start >= query.end)
                .map(|b| b.start)
                .min()
                .map(|start| local_datetime(query.date, start));

            rooms.push(FreeRoom {
                building: room.building.to_string(),
                room_number: room.room_number.to_string(),
                capacity: Some(room.capacity),
                features: room.features.map(str::to_string),
                earliest_booking,
            });
        }

        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for room in &rooms {
            *counts.entry(room.building.as_str()).or_default() += 1;
        }
        let per_building = counts
            .into_iter()
            .map(|(building, free_room_count)| BuildingCount {
                building: building.to_string(),
                free_room_count,
            })
            .collect();

        SearchResults {
            per_building,
            rooms,
        }
    }

    fn bookings_on<'a>(
        &'a self,
        date: Date,
        room: &'a DevRoom,
    ) -> impl Iterator<Item = &'a DevBooking> + 'a {
        let weekend = matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday);
        self.bookings.iter().filter(move |b| {
            !weekend && b.building == room.building && b.room_number == room.room_number
        })
    }

    pub fn data_freshness(&self) -> DataFreshness {
        let now = time_utils::local_now();
        let first_start = self.bookings.iter().map(|b| b.start).min();
        let last_end = self.bookings.iter().map(|b| b.end).max();

        DataFreshness {
            last_updated: Some(Timestamp::Zoned(OffsetDateTime::now_utc() - Duration::hours(2))),
            earliest_booking_start: first_start.map(|start| {
                local_datetime(now.date() - Duration::days(SEEDED_DAYS_BEFORE), start)
            }),
            latest_booking_end: last_end
                .map(|end| local_datetime(now.date() + Duration::days(SEEDED_DAYS_AFTER), end)),
        }
    }
}

/// Bookings are stored as campus wall-clock time, without an offset.
fn local_datetime(date: Date, time: Time) -> Timestamp {
    Timestamp::Local(PrimitiveDateTime::new(date, time))
}

fn seed_dev_rooms() -> Vec<DevRoom> {
    let room = |building, room_number, capacity, features| DevRoom {
        building,
        room_number,
        capacity,
        features,
    };
    vec![
        room("BUCH", "A101", 120, Some("Projector, Lecture capture")),
        room("BUCH", "A102", 60, Some("Projector")),
        room("BUCH", "B208", 32, Some("Whiteboard")),
        room("BUCH", "D222", 40, None),
        room("DMP", "110", 160, Some("Projector, Document camera")),
        room("DMP", "201", 40, Some("Whiteboard")),
        room("DMP", "301", 80, Some("Projector")),
        room("ESB", "1012", 150, Some("Lecture capture")),
        room("ESB", "2012", 42, None),
        room("LSK", "200", 200, Some("Projector, Lecture capture")),
        room("LSK", "460", 24, Some("Seminar table")),
        room("ORCH", "3018", 48, Some("Movable seating")),
        room("ORCH", "4074", 30, Some("Whiteboard")),
        room("SWNG", "121", 47, Some("Projector")),
        room("SWNG", "222", 47, Some("Projector")),
    ]
}

fn seed_dev_bookings() -> Vec<DevBooking> {
    let booking = |building, room_number, start, end| DevBooking {
        building,
        room_number,
        start,
        end,
    };
    vec![
        booking("BUCH", "A101", time!(8:00), time!(9:30)),
        booking("BUCH", "A101", time!(11:00), time!(12:30)),
        booking("BUCH", "A102", time!(9:00), time!(10:00)),
        booking("BUCH", "D222", time!(14:00), time!(17:00)),
        booking("DMP", "110", time!(8:00), time!(10:00)),
        booking("DMP", "110", time!(13:00), time!(15:00)),
        booking("DMP", "301", time!(17:30), time!(19:00)),
        booking("ESB", "1012", time!(10:00), time!(11:00)),
        booking("LSK", "200", time!(9:30), time!(11:00)),
        booking("LSK", "200", time!(15:30), time!(17:00)),
        booking("ORCH", "3018", time!(12:00), time!(13:00)),
        booking("SWNG", "121", time!(8:00), time!(20:00)),
        booking("SWNG", "222", time!(18:00), time!(21:00)),
    ]
}
