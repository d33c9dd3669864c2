//! Core types for the train yard simulation

use ordered_float::OrderedFloat;
use std::fmt;

/// Distance of the home station from itself
pub const HOME_DISTANCE: f64 = 0.0;

/// Hours spent separating cars at every station after home
pub const COUPLING_SEPARATION_HOURS: f64 = 0.5;

/// A stop on the route, positioned by its distance from home
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub distance: OrderedFloat<f64>,
}

impl Station {
    pub fn new(name: impl Into<String>, distance: f64) -> Self {
        Self {
            name: name.into(),
            distance: OrderedFloat(distance),
        }
    }

    pub fn is_home(&self) -> bool {
        self.distance == OrderedFloat(HOME_DISTANCE)
    }
}

/// A train car and the station it has to be dropped at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub content: String,
    pub destination: String,
}

impl Car {
    pub fn new(content: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contents: {} , Destination: {}",
            self.content, self.destination
        )
    }
}

/// Format a distance or speed the way the yard displays it:
/// whole numbers keep a single decimal place (`10.0`), others print as-is.
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
