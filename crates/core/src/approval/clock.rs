//! Clock used to stamp approval audit columns.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Format of the legacy `CHAR(8)` time columns.
pub const AUDIT_TIME_FORMAT: &str = "%H:%M:%S";

/// Wall clock of the ERP, in its own timezone.
#[derive(Debug, Clone, Copy)]
pub struct AuditClock {
    source: Source,
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Zone(Tz),
    Fixed(NaiveDateTime),
}

impl AuditClock {
    /// A clock reading the system time converted to `tz`.
    #[must_use]
    pub const fn in_zone(tz: Tz) -> Self {
        Self {
            source: Source::Zone(tz),
        }
    }

    /// A clock frozen at `instant`.
    #[must_use]
    pub const fn fixed(instant: NaiveDateTime) -> Self {
        Self {
            source: Source::Fixed(instant),
        }
    }

    /// Current local date and time.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        match self.source {
            Source::Zone(tz) => Utc::now().with_timezone(&tz).naive_local(),
            Source::Fixed(instant) => instant,
        }
    }

    /// Current local date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
