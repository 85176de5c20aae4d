use spacetimedb::{ScheduleAt, TimeDuration, Timestamp};

/// Seconds elapsed from `last` to `now`, or `None` if `now` is earlier.
pub fn delta_time(now: Timestamp, last: Timestamp) -> Option<f32> {
    now.time_duration_since(last)
        .map(|dur| dur.to_micros() as f32 / 1_000_000.0)
}

pub fn interval(micros: i64) -> ScheduleAt {
    ScheduleAt::Interval(TimeDuration::from_micros(micros))
}
