//! The train: its route, its cars and its speed

use log::debug;

use super::error::TrainError;
use super::manifest::CarManifest;
use super::route::RouteTrack;

/// A train with exactly one route and one manifest
///
/// A speed of 0 means the speed has not been set yet.
#[derive(Debug, Default)]
pub struct Train {
    route: RouteTrack,
    manifest: CarManifest,
    speed: f64,
}

impl Train {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> &RouteTrack {
        &self.route
    }

    pub fn manifest(&self) -> &CarManifest {
        &self.manifest
    }

    pub(crate) fn manifest_mut(&mut self) -> &mut CarManifest {
        &mut self.manifest
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<(), TrainError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(TrainError::InvalidSpeed { speed });
        }
        debug!("Train speed set to {}", speed);
        self.speed = speed;
        Ok(())
    }

    pub fn add_station(
        &mut self,
        name: impl Into<String>,
        distance: f64,
    ) -> Result<(), TrainError> {
        Ok(self.route.add_station(name, distance)?)
    }

    pub fn add_car(
        &mut self,
        content: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<(), TrainError> {
        Ok(self.manifest.add_car(&self.route, content, destination)?)
    }
}
