//! Network build errors.
//!
//! These are configuration failures detected while building the network
//! model from corridor and interchange declarations. They are fatal at
//! startup: a model that fails to build is never served.

use super::NodeKey;

/// Errors raised while building a [`NetworkModel`](crate::network::NetworkModel).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// A corridor was declared with a blank line name
    #[error("line name must not be empty")]
    EmptyLineName,

    /// A corridor was declared with no stations
    #[error("line {0} has no stations")]
    EmptyCorridor(String),

    /// A station was declared with a blank name
    #[error("line {0} has a station with an empty name")]
    EmptyStationName(String),

    /// The same station appears twice on one line
    #[error("station {0} is declared more than once")]
    DuplicateStation(NodeKey),

    /// The per-hop ride time is zero or negative
    #[error("ride time per hop must be positive")]
    NonPositiveRideTime,

    /// An interchange penalty is zero or negative
    #[error("interchange {from} <-> {to} must have a positive penalty")]
    NonPositivePenalty { from: NodeKey, to: NodeKey },

    /// An interchange refers to a station that is not on the given line
    #[error("interchange endpoint {0} does not exist")]
    UnknownInterchangeEndpoint(NodeKey),

    /// An interchange connects a line to itself
    #[error("interchange {from} <-> {to} must connect two different lines")]
    SameLineInterchange { from: NodeKey, to: NodeKey },
}
