//! Unitless values constrained to a configurable inclusive range.

use std::fmt;

use super::{Measurement, parse_decimal, parse_integer};

/// An integer within `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedInteger {
    lower: i64,
    upper: i64,
    value: i64,
}

impl BoundedInteger {
    /// Create a value starting at `lower`, or `None` if `lower > upper`.
    #[must_use]
    pub fn new(lower: i64, upper: i64) -> Option<Self> {
        (lower <= upper).then_some(Self {
            lower,
            upper,
            value: lower,
        })
    }

    #[must_use]
    pub fn lower(&self) -> i64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> i64 {
        self.upper
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Measurement for BoundedInteger {
    fn unit(&self) -> &'static str {
        ""
    }

    fn set_value(&mut self, raw: &str) -> bool {
        match parse_integer(raw) {
            Some(value) if (self.lower..=self.upper).contains(&value) => {
                self.value = value;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for BoundedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A decimal within `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedDecimal {
    lower: f64,
    upper: f64,
    value: f64,
}

impl BoundedDecimal {
    /// Create a value starting at `lower`.
    ///
    /// Returns `None` if either bound is not finite or `lower > upper`.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Option<Self> {
        (lower.is_finite() && upper.is_finite() && lower <= upper).then_some(Self {
            lower,
            upper,
            value: lower,
        })
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Measurement for BoundedDecimal {
    fn unit(&self) -> &'static str {
        ""
    }

    fn set_value(&mut self, raw: &str) -> bool {
        match parse_decimal(raw) {
            Some(value) if (self.lower..=self.upper).contains(&value) => {
                self.value = value;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for BoundedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
