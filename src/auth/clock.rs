//! Clock abstraction for request signing.
//!
//! The GaaS-HMAC scheme signs the request date, so tests and server-side
//! verifiers need full control over it. The signer reads time from an
//! injected provider instead of the wall clock directly.

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

/// RFC 1123 date format used in the `GP-Date` header: "Mon, 30 Jun 2014 00:00:00 GMT".
const RFC1123_FORMAT: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Format a timestamp as an RFC 1123 date string in UTC.
pub fn format_rfc1123(date: OffsetDateTime) -> String {
    date.to_offset(time::UtcOffset::UTC)
        .format(&RFC1123_FORMAT)
        .expect("RFC 1123 format description is valid")
}

/// Trait for providing the timestamp signed into each request.
pub trait Clock: Send + Sync {
    /// The current moment, from this clock's point of view.
    fn now(&self) -> OffsetDateTime;
}

/// The default clock: the system's UTC wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock pinned to a fixed instant.
///
/// Useful for deterministic signatures in tests and for replaying a
/// known-good exchange against a server-side verifier.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: OffsetDateTime,
}

impl FixedClock {
    /// Create a clock that always reports the given instant.
    pub fn new(instant: OffsetDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_rfc1123_format() {
        let date = datetime!(2014-06-30 00:00:00 UTC);
        assert_eq!(format_rfc1123(date), "Mon, 30 Jun 2014 00:00:00 GMT");
    }

    #[test]
    fn test_rfc1123_pads_single_digits() {
        let date = datetime!(2018-01-02 03:04:05 UTC);
        assert_eq!(format_rfc1123(date), "Tue, 02 Jan 2018 03:04:05 GMT");
    }

    #[test]
    fn test_rfc1123_converts_to_utc() {
        let date = datetime!(2014-06-30 02:30:00 +02:30);
        assert_eq!(format_rfc1123(date), "Mon, 30 Jun 2014 00:00:00 GMT");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant = datetime!(2014-06-30 00:00:00 UTC);
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
