//! Actuator implementations: switch, blinds, thermostat and range setters.

mod level;
mod setter;
mod switch;

pub use level::{LevelActuator, blinds, thermostat};
pub use setter::{DEFAULT_LIMITS, DecimalSetter, IntegerSetter, decimal_setter, integer_setter};
pub use switch::{Switch, switch};
