//! Domain types for the metro journey planner.
//!
//! Stations, graph keys and travel times. The network model is built from
//! these and never mutated afterwards, so anything holding one of these
//! types can rely on it staying valid for the life of the process.

mod error;
mod station;
mod time;

pub use error::NetworkError;
pub use station::{Coordinates, NodeKey, Station, StationId, normalize_name};
pub use time::TravelTime;
