//! Journey planner over the metro network.
//!
//! This module answers: "what is the fastest way from this station to that
//! one, and what should the rider be told about it?"
//!
//! The search is Dijkstra over (station, line) nodes. The resulting path is
//! then compressed into ride and change instructions, measured for rail
//! distance, and priced by stop count.

mod distance;
mod fare;
mod itinerary;
mod plan;
mod search;

pub use distance::{EARTH_RADIUS_KM, haversine_km, ride_distance_km, round_to_tenth};
pub use fare::{Fare, FareTable, UnorderedSlabs};
pub use itinerary::{Instruction, build_instructions};
pub use plan::{JourneyPlanner, PlanError, RoutePlan, RouteRequest};
pub use search::{NotFoundReason, Path, PathFinder, SearchError, SearchOutcome, Transition};
