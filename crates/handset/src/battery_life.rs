use std::fmt::{Display, Formatter};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// An estimated runtime, decomposed into whole days, hours, minutes and seconds.
///
/// Displayed as a tuple, e.g. `(1, 0, 41, 29)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatteryLife {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl BatteryLife {
    pub fn from_seconds(total_seconds: u64) -> Self {
        let days = total_seconds / SECONDS_PER_DAY;
        let remainder = total_seconds % SECONDS_PER_DAY;
        let hours = remainder / SECONDS_PER_HOUR;
        let remainder = remainder % SECONDS_PER_HOUR;

        Self {
            days,
            hours,
            minutes: remainder / SECONDS_PER_MINUTE,
            seconds: remainder % SECONDS_PER_MINUTE,
        }
    }

    /// Like [`BatteryLife::from_seconds`] but accepts a decimal, which must be a non-negative whole number.
    pub fn try_from_seconds(total_seconds: Decimal) -> Result<Self, DurationError> {
        if total_seconds.is_sign_negative() && !total_seconds.is_zero() {
            return Err(DurationError::Negative(total_seconds));
        }
        if !total_seconds.fract().is_zero() {
            return Err(DurationError::NotWholeSeconds(total_seconds));
        }

        let total_seconds = total_seconds
            .to_u64()
            .ok_or(DurationError::OutOfRange(total_seconds))?;

        Ok(Self::from_seconds(total_seconds))
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY + self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }

    pub fn as_tuple(&self) -> (u64, u64, u64, u64) {
        (self.days, self.hours, self.minutes, self.seconds)
    }
}

impl Display for BatteryLife {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.days, self.hours, self.minutes, self.seconds)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("Duration cannot be negative. seconds: {0}")]
    Negative(Decimal),
    #[error("Duration must be a whole number of seconds. seconds: {0}")]
    NotWholeSeconds(Decimal),
    #[error("Duration out of range. seconds: {0}")]
    OutOfRange(Decimal),
}

/// Converts a charge in mAh to mAs, `None` on overflow.
pub fn milliamp_hours_to_milliamp_seconds(milliamp_hours: Decimal) -> Option<Decimal> {
    milliamp_hours.checked_mul(dec!(3600))
}
