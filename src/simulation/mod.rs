//! Standalone train yard simulation
//!
//! This module contains the route, the car manifest and the trip simulator.
//! None of it does any I/O, so it can be driven directly from tests or from
//! the command session.

mod chain;
mod error;
mod manifest;
mod route;
mod train;
mod trip;
mod types;

pub use chain::{Iter, LinkedChain};
pub use error::{CarError, SimError, StationError, TrainError};
pub use manifest::CarManifest;
pub use route::{RouteSegment, RouteTrack};
pub use train::Train;
pub use trip::{SimulationReport, TripEvent, TripSimulator};
pub use types::{format_quantity, Car, Station, COUPLING_SEPARATION_HOURS, HOME_DISTANCE};
