#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use objstore::{Repository, SteppingClock};
use rstest::fixture;

/// 2022-01-01 00:00:00 UTC
pub fn epoch() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("valid offset")
        .timestamp_opt(1640995200, 0)
        .single()
        .expect("valid timestamp")
}

/// Clock whose reads are one hour apart, so every commit gets a distinct id
pub fn hourly_clock() -> SteppingClock {
    SteppingClock::new(epoch(), TimeDelta::hours(1))
}

#[fixture]
pub fn repository() -> Repository<&'static str> {
    Repository::new().with_clock(hourly_clock())
}

/// Repository with "important" committed in "test message" and "slot"
/// added on top in "another test message"
#[fixture]
pub fn repository_with_history(mut repository: Repository<&'static str>) -> Repository<&'static str> {
    repository.add("important", "stuff").expect("add never fails");
    repository.commit("test message").expect("first commit");
    repository.add("slot", "mlon").expect("add never fails");
    repository.commit("another test message").expect("second commit");

    repository
}
