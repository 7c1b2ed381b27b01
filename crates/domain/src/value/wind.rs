//! Wind reading: speed and compass direction.

use std::fmt;

use super::{Measurement, parse_decimal};

/// Wind speed in km/h and direction in degrees (`[0, 360)`).
///
/// Textual input is `"<speed> <direction>"`, e.g. `"12.5 270"`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Wind {
    speed: f64,
    direction: f64,
}

impl Wind {
    pub const UNIT: &'static str = "km/h";

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn direction(&self) -> f64 {
        self.direction
    }
}

impl Measurement for Wind {
    fn unit(&self) -> &'static str {
        Self::UNIT
    }

    fn set_value(&mut self, raw: &str) -> bool {
        let mut parts = raw.split_whitespace();
        let (Some(speed), Some(direction), None) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        let (Some(speed), Some(direction)) = (parse_decimal(speed), parse_decimal(direction))
        else {
            return false;
        };
        if !speed.is_finite() || speed < 0.0 || !(0.0..360.0).contains(&direction) {
            return false;
        }
        self.speed = speed;
        self.direction = direction;
        true
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}\u{b0}", self.speed, Self::UNIT, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_set_speed_and_direction() {
        let mut w = Wind::default();
        assert!(w.set_value("12.5 270"));
        assert_eq!(w.to_string(), "12.5 km/h 270\u{b0}");
    }

    #[test]
    fn should_reject_direction_of_full_circle() {
        let mut w = Wind::default();
        assert!(!w.set_value("3 360"));
    }

    #[test]
    fn should_reject_missing_or_extra_parts() {
        let mut w = Wind::default();
        assert!(!w.set_value("12"));
        assert!(!w.set_value("12 90 4"));
        assert_eq!(w.to_string(), "0 km/h 0\u{b0}");
    }

    #[test]
    fn should_keep_previous_reading_when_speed_is_negative() {
        let mut w = Wind::default();
        assert!(w.set_value("5 45"));
        assert!(!w.set_value("-1 45"));
        assert!((w.speed() - 5.0).abs() < f64::EPSILON);
        assert!((w.direction() - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_reject_speed_too_large_to_be_finite() {
        let mut w = Wind::default();
        assert!(w.set_value("5 45"));
        assert!(!w.set_value(&format!("{} 90", "9".repeat(400))));
        assert_eq!(w.to_string(), "5 km/h 45\u{b0}");
    }
}
