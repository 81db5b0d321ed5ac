//! Closed date ranges used by the "approved" listings.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;

/// Inclusive range `fecha_desde..=fecha_hasta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub fecha_desde: NaiveDate,
    /// Last day included.
    pub fecha_hasta: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting an inverted one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, AppError> {
        Self {
            fecha_desde: from,
            fecha_hasta: to,
        }
        .validate()
    }

    /// The range covering exactly `day`.
    #[must_use]
    pub const fn single_day(day: NaiveDate) -> Self {
        Self {
            fecha_desde: day,
            fecha_hasta: day,
        }
    }

    /// Re-checks a deserialized range.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the bounds are inverted.
    pub fn validate(self) -> Result<Self, AppError> {
        if self.fecha_desde > self.fecha_hasta {
            return Err(AppError::Validation(format!(
                "fecha_desde ({}) es posterior a fecha_hasta ({})",
                self.fecha_desde, self.fecha_hasta
            )));
        }
        Ok(self)
    }

    /// Builds a range from optional bounds.
    ///
    /// Both bounds present gives a range, both absent gives `None`; a single
    /// bound is rejected.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for a half-open or inverted range.
    pub fn from_optional(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Option<Self>, AppError> {
        match (from, to) {
            (Some(from), Some(to)) => Self::new(from, to).map(Some),
            (None, None) => Ok(None),
            _ => Err(AppError::Validation(
                "fecha_desde y fecha_hasta deben indicarse juntas".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_constructor() {
        let range = DateRange::single_day(day(2025, 6, 30));
        assert_eq!(range, DateRange::new(day(2025, 6, 30), day(2025, 6, 30)).unwrap());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = DateRange::new(day(2025, 12, 2), day(2025, 12, 1)).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_optional_bounds() {
        assert_eq!(DateRange::from_optional(None, None).unwrap(), None);
        assert!(DateRange::from_optional(Some(day(2025, 1, 1)), None).is_err());
        assert!(
            DateRange::from_optional(Some(day(2025, 1, 1)), Some(day(2025, 1, 31)))
                .unwrap()
                .is_some()
        );
    }
}
