//! Route planning: validate a request, search, and assemble the result.

use tracing::debug;

use crate::domain::normalize_name;
use crate::network::NetworkModel;

use super::distance::{ride_distance_km, round_to_tenth};
use super::fare::{Fare, FareTable};
use super::itinerary::{Instruction, build_instructions};
use super::search::{NotFoundReason, Path, PathFinder, SearchError, SearchOutcome};

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Missing, blank or identical origin and destination
    #[error("invalid route request: {0}")]
    InvalidRequest(String),

    /// No path between the named stations, whatever the cause
    #[error("no metro route found between these stations")]
    NoRoute(NotFoundReason),

    /// The network model is inconsistent
    #[error("route computation failed: {0}")]
    Internal(#[from] SearchError),
}

/// A request to plan a route between two named stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(origin: &str, destination: &str) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    /// Validate the route request.
    pub fn validate(&self) -> Result<(), PlanError> {
        let origin = normalize_name(&self.origin);
        let destination = normalize_name(&self.destination);

        if origin.is_empty() {
            return Err(PlanError::InvalidRequest("origin is required".to_string()));
        }
        if destination.is_empty() {
            return Err(PlanError::InvalidRequest(
                "destination is required".to_string(),
            ));
        }
        if origin == destination {
            return Err(PlanError::InvalidRequest(
                "origin and destination must differ".to_string(),
            ));
        }

        Ok(())
    }
}

/// A planned route with everything a rider is told about it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Every platform visited, in order.
    pub path: Path,

    /// Distinct stations visited, origin included.
    pub total_stations: usize,

    /// Travel time rounded to the nearest minute.
    pub estimated_minutes: i64,

    pub fare: Fare,

    /// Rail distance rounded to one decimal place.
    pub distance_km: f64,

    pub instructions: Vec<Instruction>,
}

/// Plans routes over a shared network.
///
/// Borrowing only, so it is cheap to create per request.
#[derive(Debug, Clone, Copy)]
pub struct JourneyPlanner<'a> {
    network: &'a NetworkModel,
    fares: &'a FareTable,
}

impl<'a> JourneyPlanner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a NetworkModel, fares: &'a FareTable) -> Self {
        Self { network, fares }
    }

    /// Plan the fastest route for a request.
    ///
    /// Invalid requests are rejected before any search runs. Unknown names
    /// and unreachable destinations both yield [`PlanError::NoRoute`].
    pub fn plan(&self, request: &RouteRequest) -> Result<RoutePlan, PlanError> {
        request.validate()?;

        let outcome =
            PathFinder::new(self.network).find_path(&request.origin, &request.destination)?;

        let path = match outcome {
            SearchOutcome::Found(path) => path,
            SearchOutcome::NotFound(reason) => {
                debug!(
                    origin = %request.origin,
                    destination = %request.destination,
                    ?reason,
                    "No route"
                );
                return Err(PlanError::NoRoute(reason));
            }
        };

        let hops = path.hop_count();
        let plan = RoutePlan {
            total_stations: hops + 1,
            estimated_minutes: path.total_time().rounded_minutes(),
            fare: self.fares.fare(hops),
            distance_km: round_to_tenth(ride_distance_km(&path)),
            instructions: build_instructions(&path),
            path,
        };

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            minutes = plan.estimated_minutes,
            stations = plan.total_stations,
            fare = plan.fare,
            "Planned route"
        );

        Ok(plan)
    }
}
