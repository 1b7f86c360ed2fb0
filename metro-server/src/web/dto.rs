//! Data transfer objects for web requests and responses.
//!
//! Field names follow what the map UI already consumes: station records in
//! snake_case, the route summary in camelCase.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::network::NameMatch;
use crate::planner::{Instruction, RoutePlan};

/// A station record in the catalog listing and in route paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationResult {
    pub id: u32,

    pub name: String,

    /// Null when the station has no published position
    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    pub line_name: String,

    /// Display colour of the line, e.g. "#E41E26"
    pub line_color: String,
}

/// Request to search station names.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (matches anywhere in the name)
    #[serde(default)]
    pub q: String,

    /// Max results to return (default 10)
    pub limit: Option<usize>,
}

/// A station name in search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResult {
    pub name: String,

    /// Lines serving this station
    pub lines: Vec<String>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationSearchResult>,
}

/// Request to plan a route.
///
/// Both fields are optional on the wire so that a missing one is reported
/// as an invalid request rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin station name
    #[serde(default)]
    pub origin: Option<String>,

    /// Destination station name
    #[serde(default)]
    pub destination: Option<String>,
}

/// A planned route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRouteResponse {
    /// Every platform visited, in order
    pub path: Vec<StationResult>,

    /// Distinct stations visited, origin included
    pub total_stations: usize,

    /// Minutes, rounded
    pub estimated_time: i64,

    /// Rupees
    pub fare: u32,

    /// Kilometres of rail, one decimal place
    pub distance: f64,

    pub instructions: Vec<InstructionResult>,
}

/// An itinerary step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InstructionResult {
    Ride {
        from: String,
        to: String,
        line: String,
        /// Number of stops ridden
        stations: usize,
    },
    Change {
        station: String,
        to_line: String,
    },
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.clone(),
            latitude: station.latitude(),
            longitude: station.longitude(),
            line_name: station.line_name.clone(),
            line_color: station.line_color.clone(),
        }
    }
}

impl StationSearchResult {
    /// Create from a network name match.
    pub fn from_match(m: NameMatch) -> Self {
        Self {
            name: m.name,
            lines: m.lines,
        }
    }
}

impl InstructionResult {
    /// Create from a planner Instruction.
    pub fn from_instruction(instruction: &Instruction) -> Self {
        match instruction {
            Instruction::Ride {
                from,
                to,
                line,
                stops,
            } => InstructionResult::Ride {
                from: from.clone(),
                to: to.clone(),
                line: line.clone(),
                stations: *stops,
            },
            Instruction::Change { station, to_line } => InstructionResult::Change {
                station: station.clone(),
                to_line: to_line.clone(),
            },
        }
    }
}

impl PlanRouteResponse {
    /// Create from a planned route.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self {
            path: plan
                .path
                .stations()
                .iter()
                .map(StationResult::from_station)
                .collect(),
            total_stations: plan.total_stations,
            estimated_time: plan.estimated_minutes,
            fare: plan.fare,
            distance: plan.distance_km,
            instructions: plan
                .instructions
                .iter()
                .map(InstructionResult::from_instruction)
                .collect(),
        }
    }
}
