//! The static metro network.
//!
//! Line corridors and interchanges are declared as plain data
//! ([`NetworkDefinition`]) and built once into an immutable, line-aware
//! graph ([`NetworkModel`]) with one node per (station, line) pair.

mod config;
mod corridor;
mod hyderabad;
mod model;

pub use config::NetworkConfig;
pub use corridor::{Interchange, LineCorridor, NetworkDefinition, StopSpec};
pub use hyderabad::{BLUE_LINE, GREEN_LINE, RED_LINE, hyderabad_metro};
pub use model::{Edge, EdgeKind, NameMatch, NetworkModel, NodeId};
