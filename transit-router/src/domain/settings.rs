//! Routing settings.

use super::DomainError;

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Parameters that turn road distances into travel times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Time spent waiting at a stop before boarding (minutes).
    pub bus_wait_time: f64,

    /// Bus speed (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create validated settings.
    ///
    /// The wait time must be finite and non-negative, the velocity finite
    /// and strictly positive.
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Result<Self, DomainError> {
        if !bus_wait_time.is_finite() || bus_wait_time < 0.0 {
            return Err(DomainError::InvalidSettings(
                "bus wait time must be a non-negative number of minutes",
            ));
        }
        if !bus_velocity.is_finite() || bus_velocity <= 0.0 {
            return Err(DomainError::InvalidSettings("bus velocity must be positive"));
        }

        Ok(Self {
            bus_wait_time,
            bus_velocity,
        })
    }

    /// Returns the bus velocity in meters per minute.
    pub fn velocity_m_per_min(&self) -> f64 {
        self.bus_velocity * METERS_PER_KM / MINUTES_PER_HOUR
    }

    /// Minutes needed to ride `meters` at the configured velocity.
    pub fn travel_time(&self, meters: f64) -> f64 {
        meters / self.velocity_m_per_min()
    }
}
