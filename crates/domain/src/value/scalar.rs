//! Single-number measurements with a fixed unit and an inclusive range.

use std::fmt;

use super::{Measurement, parse_decimal};

macro_rules! define_scalar {
    ($(#[doc = $doc:expr])* $name:ident, unit = $unit:expr, min = $min:expr, max = $max:expr) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            value: f64,
        }

        impl $name {
            /// Unit appended to the display form.
            pub const UNIT: &'static str = $unit;
            /// Smallest accepted value.
            pub const MIN: f64 = $min;
            /// Largest accepted value.
            pub const MAX: f64 = $max;

            /// Current numeric value.
            #[must_use]
            pub fn value(&self) -> f64 {
                self.value
            }
        }

        impl Measurement for $name {
            fn unit(&self) -> &'static str {
                Self::UNIT
            }

            fn set_value(&mut self, raw: &str) -> bool {
                match parse_decimal(raw) {
                    Some(value) if (Self::MIN..=Self::MAX).contains(&value) => {
                        self.value = value;
                        true
                    }
                    _ => false,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.value, Self::UNIT)
            }
        }
    };
}

define_scalar!(
    /// Temperature in degrees Celsius, bounded below by absolute zero.
    Celsius,
    unit = "\u{b0}C",
    min = -273.15,
    max = f64::MAX
);

define_scalar!(
    /// A ratio between 0 and 100.
    Percentage,
    unit = "%",
    min = 0.0,
    max = 100.0
);

define_scalar!(
    /// Instantaneous power draw.
    Watt,
    unit = "W",
    min = 0.0,
    max = f64::MAX
);

define_scalar!(
    /// Accumulated energy.
    WattHour,
    unit = "Wh",
    min = 0.0,
    max = f64::MAX
);

define_scalar!(
    /// Solar irradiance.
    Irradiance,
    unit = "W/m\u{b2}",
    min = 0.0,
    max = f64::MAX
);
