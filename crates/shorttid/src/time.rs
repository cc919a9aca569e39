use std::time::{Duration, SystemTime};

/// One nanosecond per tick.
pub const NANOSECOND: Duration = Duration::from_nanos(1);

/// One microsecond per tick.
pub const MICROSECOND: Duration = Duration::from_micros(1);

/// One millisecond per tick (the default tick size).
pub const MILLISECOND: Duration = Duration::from_millis(1);

/// One centisecond (10 ms) per tick.
pub const CENTISECOND: Duration = Duration::from_millis(10);

/// One decisecond (100 ms) per tick.
pub const DECISECOND: Duration = Duration::from_millis(100);

/// One second per tick.
pub const SECOND: Duration = Duration::from_secs(1);

/// One minute per tick.
pub const MINUTE: Duration = Duration::from_secs(60);

/// One hour per tick.
pub const HOUR: Duration = Duration::from_secs(3_600);

/// One day per tick.
pub const DAY: Duration = Duration::from_secs(86_400);

/// A trait for time sources that return the current wall-clock instant.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. The returned [`SystemTime`] is an absolute instant:
/// it carries no timezone, so all downstream tick arithmetic is
/// timezone-safe by construction.
///
/// # Example
///
/// ```
/// use shorttid::TimeSource;
/// use std::time::{Duration, SystemTime, UNIX_EPOCH};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn now(&self) -> SystemTime {
///         UNIX_EPOCH + Duration::from_millis(1234)
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.now(), UNIX_EPOCH + Duration::from_millis(1234));
/// ```
pub trait TimeSource {
    /// Returns the current instant.
    fn now(&self) -> SystemTime;
}

/// A [`TimeSource`] backed by [`SystemTime::now`].
///
/// This is the default clock for generated identifiers. It is subject to
/// wall-clock adjustments (NTP, manual changes); if the clock is stepped to
/// before the configured epoch, generation reports
/// [`GenerateError::EpochNotReached`] rather than producing an unsortable
/// identifier.
///
/// [`GenerateError::EpochNotReached`]: crate::GenerateError::EpochNotReached
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_constants_are_ordered() {
        let ladder = [
            NANOSECOND,
            MICROSECOND,
            MILLISECOND,
            CENTISECOND,
            DECISECOND,
            SECOND,
            MINUTE,
            HOUR,
            DAY,
        ];
        assert!(ladder.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
