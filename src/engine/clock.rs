use chrono::{DateTime, Utc};

/// Source of the reference instant for time-dependent queries.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_does_not_move() {
        let instant = Utc.with_ymd_and_hms(2024, 2, 5, 0, 0, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn clocks_work_behind_a_trait_object() {
        let instant = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let clocks: [&dyn Clock; 2] = [&SystemClock, &FixedClock(instant)];
        assert!(clocks[0].now() < clocks[1].now());
        assert_eq!(clocks[1].now(), instant);
    }
}
