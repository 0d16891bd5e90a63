use chrono::{DateTime, TimeDelta, Utc};

/// Source of timestamps for sessions and answer records.
///
/// Services take a `Clock` by value so tests can pin every recorded time.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => *at,
        }
    }

    /// Time spent since `started_at`, clamped at zero.
    #[must_use]
    pub fn since(&self, started_at: DateTime<Utc>) -> TimeDelta {
        (self.now() - started_at).max(TimeDelta::zero())
    }
}

/// Seconds since the epoch used by every fixture (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_measures_from_start() {
        let start = fixed_now() - TimeDelta::seconds(90);
        assert_eq!(fixed_clock().since(start), TimeDelta::seconds(90));
    }

    #[test]
    fn future_start_reads_as_zero() {
        let start = fixed_now() + TimeDelta::seconds(5);
        assert_eq!(fixed_clock().since(start), TimeDelta::zero());
    }
}
