//! Running the train down its route
//!
//! The simulator walks the route once from home. At every later station it
//! pays the coupling-separation cost, adds the travel time for the segment
//! and drops every car at the front of the manifest bound for that station.

use log::{info, warn};
use std::fmt;

use super::error::SimError;
use super::train::Train;
use super::types::{Car, COUPLING_SEPARATION_HOURS};

/// Something that happened during a trip, in the order it happened
#[derive(Debug, Clone, PartialEq)]
pub enum TripEvent {
    /// The train moves on toward this station
    Arriving { station: String },
    /// Time spent separating cars at the station
    CarsSeparated { hours: f64 },
    /// Travel time of the segment ending at the station
    SegmentTraveled { hours: f64 },
    /// A car was dropped at the station
    Unloaded { content: String, station: String },
}

impl fmt::Display for TripEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripEvent::Arriving { station } => write!(f, "Moving on to {}", station),
            TripEvent::CarsSeparated { hours } => {
                write!(f, "{:.2} hours taken to separate cars.", hours)
            }
            TripEvent::SegmentTraveled { hours } => {
                write!(f, "This segment took {:.2} hours to travel.", hours)
            }
            TripEvent::Unloaded { content, station } => {
                write!(f, "Unloading {} in {}", content, station)
            }
        }
    }
}

/// Outcome of a completed trip
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub events: Vec<TripEvent>,
    pub total_hours: f64,
}

impl SimulationReport {
    /// Cars dropped off during the trip, in unload order
    pub fn unloaded(&self) -> Vec<Car> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TripEvent::Unloaded { content, station } => {
                    Some(Car::new(content.clone(), station.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Stations reached after leaving home
    pub fn stations_visited(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TripEvent::Arriving { .. }))
            .count()
    }

    /// Closing line of the trip log
    pub fn summary(&self) -> String {
        format!("Total time for trip was {:.2} hours.", self.total_hours)
    }
}

/// Drives a [`Train`] along its route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSimulator {
    /// Hours spent at each station after home separating cars
    pub separation_hours: f64,
}

impl Default for TripSimulator {
    fn default() -> Self {
        Self::new(COUPLING_SEPARATION_HOURS)
    }
}

impl TripSimulator {
    pub fn new(separation_hours: f64) -> Self {
        Self { separation_hours }
    }

    /// Run the whole route, unloading cars as their stations come up
    ///
    /// Checks happen before the train moves: on error nothing has changed.
    /// The route is never modified; unloaded cars leave the manifest.
    pub fn run(&self, train: &mut Train) -> Result<SimulationReport, SimError> {
        if train.speed() == 0.0 {
            return Err(SimError::SpeedUnset);
        }
        let speed = train.speed();

        // Snapshot the route so cars can be popped while walking it
        let stations: Vec<(String, f64)> = train
            .route()
            .stations()
            .map(|station| (station.name.clone(), station.distance.into_inner()))
            .collect();
        let Some(((_, home_distance), rest)) = stations.split_first() else {
            return Err(SimError::NoRoute);
        };

        info!(
            "Starting trip over {} stations with {} cars at speed {}",
            stations.len(),
            train.manifest().len(),
            speed
        );

        let mut events = Vec::new();
        let mut previous = *home_distance;
        let mut elapsed = 0.0;

        for (name, distance) in rest {
            events.push(TripEvent::Arriving {
                station: name.clone(),
            });

            elapsed += self.separation_hours;
            events.push(TripEvent::CarsSeparated {
                hours: self.separation_hours,
            });

            let travel = (distance - previous) / speed;
            elapsed += travel;
            events.push(TripEvent::SegmentTraveled { hours: travel });

            while train
                .manifest()
                .front()
                .is_some_and(|car| car.destination == *name)
            {
                let car = train.manifest_mut().pop_front()?;
                events.push(TripEvent::Unloaded {
                    content: car.content,
                    station: name.clone(),
                });
            }

            previous = *distance;
        }

        if !train.manifest().is_empty() {
            warn!(
                "Trip finished with {} cars still coupled",
                train.manifest().len()
            );
        }
        info!("Trip finished in {:.2} hours", elapsed);

        Ok(SimulationReport {
            events,
            total_hours: elapsed,
        })
    }
}
