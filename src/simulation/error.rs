//! Domain errors for the train yard
//!
//! The `Display` text of every variant is the message shown to the user.
//! All of these are recoverable: the operation that raised them has not
//! touched the train.

use thiserror::Error;

/// Rejections from [`RouteTrack::add_station`](super::RouteTrack::add_station)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StationError {
    #[error("Distance is not a number")]
    NotFinite { distance: f64 },

    #[error("Distance cannot be negative")]
    NegativeDistance { distance: f64 },

    #[error("First station must be home with distance of 0.")]
    HomeMustBeZero { distance: f64 },

    #[error("Two stations cannot have same distance.")]
    DuplicateDistance { distance: f64, existing: String },

    #[error("Station {name} is already in the route.")]
    DuplicateName { name: String },

    #[error("Stations must be added in order of distance ({distance} is before {tail}).")]
    OutOfOrder { distance: f64, tail: String },
}

/// Rejections from the car manifest
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarError {
    #[error("No stations in route.")]
    NoRoute,

    #[error("Cannot have cars destined for home station")]
    DestinationIsHome { home: String },

    #[error("Station is not in route.")]
    UnknownStation { name: String },

    #[error("No cars left on the train.")]
    EmptyManifest,
}

/// Reasons a trip cannot be simulated
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("Train speed not set.")]
    SpeedUnset,

    #[error("Home station not set.")]
    NoRoute,

    #[error(transparent)]
    Manifest(#[from] CarError),
}

/// Any domain failure raised while operating a [`Train`](super::Train)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrainError {
    /// Negative or non-finite speed
    #[error("Argument is not a number")]
    InvalidSpeed { speed: f64 },

    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    Car(#[from] CarError),

    #[error(transparent)]
    Simulation(#[from] SimError),
}
