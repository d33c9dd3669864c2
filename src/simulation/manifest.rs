//! Car manifest kept in unload order
//!
//! Cars are ordered by where their destination sits on the route: cars for
//! nearer stations come before cars for farther ones. Walking the manifest
//! and the route together, every car for the current station is at the
//! front of what remains, so the train unloads in a single forward pass.

use log::debug;

use super::chain::{Iter, LinkedChain};
use super::error::CarError;
use super::route::RouteTrack;
use super::types::Car;

/// Ordered chain of the train's cars
#[derive(Debug, Default)]
pub struct CarManifest {
    cars: LinkedChain<Car>,
}

impl CarManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn iter(&self) -> Iter<'_, Car> {
        self.cars.iter()
    }

    /// Cars in the order they will be unloaded
    pub fn render(&self) -> Vec<&Car> {
        self.cars.iter().collect()
    }

    /// The next car to be unloaded
    pub fn front(&self) -> Option<&Car> {
        self.cars.front()
    }

    /// Remove the next car to be unloaded
    pub fn pop_front(&mut self) -> Result<Car, CarError> {
        self.cars.pop_front().ok_or(CarError::EmptyManifest)
    }

    /// Couple a new car to the train at the position its destination demands
    pub fn add_car(
        &mut self,
        route: &RouteTrack,
        content: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<(), CarError> {
        let destination = destination.into();

        let home = route.home().ok_or(CarError::NoRoute)?;
        if home.name == destination {
            return Err(CarError::DestinationIsHome {
                home: home.name.clone(),
            });
        }
        if !route.contains(&destination) {
            return Err(CarError::UnknownStation { name: destination });
        }

        let index = self.placement_index(route, &destination);
        debug!(
            "Placing car for {} at position {} of {}",
            destination,
            index,
            self.len()
        );
        self.cars.insert_at(index, Car::new(content, destination));
        Ok(())
    }

    /// Walk the route and the manifest in lockstep to find where a car for
    /// `destination` belongs: right before the first car whose destination
    /// is at or beyond it.
    fn placement_index(&self, route: &RouteTrack, destination: &str) -> usize {
        let mut cars = self.cars.iter().peekable();
        let mut index = 0;
        for station in route.stations() {
            if station.name == destination {
                break;
            }
            while cars
                .next_if(|car| car.destination == station.name)
                .is_some()
            {
                index += 1;
            }
        }
        index
    }
}
