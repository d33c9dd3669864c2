//! The route the train follows, from home outward
//!
//! Stations are kept in a [`LinkedChain`] in strictly increasing distance
//! order. The home station sits at the head with distance 0 and is the only
//! station allowed that distance. Stations are only ever appended at the
//! tail, so inputs that would break the ordering are rejected.

use log::debug;
use ordered_float::OrderedFloat;
use std::fmt;

use super::chain::{Iter, LinkedChain};
use super::error::StationError;
use super::types::{format_quantity, Station, HOME_DISTANCE};

/// Ordered chain of stations
#[derive(Debug, Default)]
pub struct RouteTrack {
    stations: LinkedChain<Station>,
}

/// One station of a rendered route with the distance to the next station
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub station: String,
    /// `None` for the last station
    pub to_next: Option<f64>,
}

impl fmt::Display for RouteSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_next {
            Some(delta) => write!(f, "{} --- {} --> ", self.station, format_quantity(delta)),
            None => write!(f, "{}", self.station),
        }
    }
}

impl RouteTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// The first station of the route
    pub fn home(&self) -> Option<&Station> {
        self.stations.front()
    }

    pub fn stations(&self) -> Iter<'_, Station> {
        self.stations.iter()
    }

    pub fn find(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|station| station.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Distance from home to the last station
    pub fn total_distance(&self) -> f64 {
        self.stations
            .iter()
            .last()
            .map_or(HOME_DISTANCE, |station| station.distance.into_inner())
    }

    /// Append a station at the end of the route
    ///
    /// The route is left unchanged when the station is rejected.
    pub fn add_station(
        &mut self,
        name: impl Into<String>,
        distance: f64,
    ) -> Result<(), StationError> {
        let name = name.into();

        if !distance.is_finite() {
            return Err(StationError::NotFinite { distance });
        }
        if distance < 0.0 {
            return Err(StationError::NegativeDistance { distance });
        }
        if self.is_empty() && distance != HOME_DISTANCE {
            return Err(StationError::HomeMustBeZero { distance });
        }

        let mut tail = None;
        for station in self.stations.iter() {
            if station.distance == OrderedFloat(distance) {
                return Err(StationError::DuplicateDistance {
                    distance,
                    existing: station.name.clone(),
                });
            }
            if station.name == name {
                return Err(StationError::DuplicateName { name });
            }
            tail = Some(station);
        }

        if let Some(tail) = tail {
            if OrderedFloat(distance) < tail.distance {
                return Err(StationError::OutOfOrder {
                    distance,
                    tail: tail.name.clone(),
                });
            }
        }

        debug!("Adding station {} at distance {}", name, distance);
        self.stations.push_back(Station::new(name, distance));
        Ok(())
    }

    /// Each station paired with the distance to the one after it
    pub fn render(&self) -> Vec<RouteSegment> {
        let mut segments = Vec::with_capacity(self.len());
        let mut stations = self.stations.iter().peekable();
        while let Some(station) = stations.next() {
            let to_next = stations
                .peek()
                .map(|next| (next.distance - station.distance).into_inner());
            segments.push(RouteSegment {
                station: station.name.clone(),
                to_next,
            });
        }
        segments
    }
}

impl fmt::Display for RouteTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.render() {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
