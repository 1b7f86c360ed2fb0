//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkModel;
use crate::planner::FareTable;

/// Shared application state.
///
/// Built once at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    /// The metro network, immutable after build
    pub network: Arc<NetworkModel>,

    /// Fare slabs
    pub fares: Arc<FareTable>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: NetworkModel, fares: FareTable) -> Self {
        Self {
            network: Arc::new(network),
            fares: Arc::new(fares),
        }
    }
}
