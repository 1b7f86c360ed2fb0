//! Declarations the network model is built from.
//!
//! A [`NetworkDefinition`] is plain data: line corridors in order, and the
//! interchanges between them. Nothing here is validated; validation happens
//! when the definition is turned into a
//! [`NetworkModel`](super::NetworkModel).

use chrono::Duration;

use crate::domain::{Coordinates, NodeKey};

/// A station as declared on a corridor, before ids are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct StopSpec {
    pub name: String,
    pub coordinates: Option<Coordinates>,
}

/// One metro line: its name, display colour, and stations in running order.
///
/// Consecutive stops are the only source of ride adjacency.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCorridor {
    pub name: String,
    pub color: String,
    pub stops: Vec<StopSpec>,
}

impl LineCorridor {
    /// Create an empty corridor.
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            stops: Vec::new(),
        }
    }

    /// Append a station with known coordinates.
    pub fn stop(mut self, name: &str, latitude: f64, longitude: f64) -> Self {
        self.stops.push(StopSpec {
            name: name.to_string(),
            coordinates: Some(Coordinates::new(latitude, longitude)),
        });
        self
    }

    /// Append a station whose position is not known.
    pub fn unlocated_stop(mut self, name: &str) -> Self {
        self.stops.push(StopSpec {
            name: name.to_string(),
            coordinates: None,
        });
        self
    }
}

/// A declared walking connection between platforms of two lines.
///
/// Interchanges are never inferred from shared names; each one must be
/// declared. They apply in both directions with the same penalty.
#[derive(Debug, Clone, PartialEq)]
pub struct Interchange {
    pub from: NodeKey,
    pub to: NodeKey,
    pub penalty: Duration,
}

/// Ordered corridors plus interchanges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkDefinition {
    pub corridors: Vec<LineCorridor>,
    pub interchanges: Vec<Interchange>,
}

impl NetworkDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line corridor. Declaration order fixes station ids.
    pub fn line(mut self, corridor: LineCorridor) -> Self {
        self.corridors.push(corridor);
        self
    }

    /// Declare an interchange between `station_a` on `line_a` and
    /// `station_b` on `line_b`.
    pub fn interchange(
        mut self,
        (station_a, line_a): (&str, &str),
        (station_b, line_b): (&str, &str),
        penalty: Duration,
    ) -> Self {
        self.interchanges.push(Interchange {
            from: NodeKey::new(station_a, line_a),
            to: NodeKey::new(station_b, line_b),
            penalty,
        });
        self
    }
}
