//! Build configuration for the network model.

use chrono::Duration;

use crate::domain::TravelTime;

/// Parameters applied uniformly while building the network graph.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Time to ride between two adjacent stations on a line, including
    /// the dwell at the station being left.
    pub ride_hop: Duration,
}

impl NetworkConfig {
    /// Create a new configuration with the given ride time per hop.
    pub fn new(ride_hop: Duration) -> Self {
        Self { ride_hop }
    }

    /// Returns the ride time per hop as an edge weight.
    pub fn ride_hop_weight(&self) -> TravelTime {
        TravelTime::from(self.ride_hop)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ride_hop: Duration::seconds(150), // 2.5 minutes
        }
    }
}
