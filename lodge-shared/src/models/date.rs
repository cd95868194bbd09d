use serde::{Deserialize, Serialize};
use std::fmt;

/// A day/month/year triple used as a reservation key.
///
/// No calendar validation is applied: `Date::new(40, 13, 2025)` is a valid
/// value and compares unequal to every other triple. Two dates are the same
/// reservation only when all three fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Date {
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}
