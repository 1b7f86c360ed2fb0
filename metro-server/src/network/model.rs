//! The line-aware network graph.

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::domain::{NetworkError, NodeKey, Station, StationId, TravelTime, normalize_name};

use super::config::NetworkConfig;
use super::corridor::NetworkDefinition;

/// Index of a node (one station on one line) in the network.
///
/// Node indices are positions in the station catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// How two nodes are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Travel between adjacent stations on the same line
    Ride,
    /// Walking between platforms of two lines at an interchange
    Transfer,
}

/// A directed edge. Every edge has a reverse twin of equal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: TravelTime,
    pub kind: EdgeKind,
}

/// A distinct station name and the lines that serve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub name: String,
    pub lines: Vec<String>,
}

/// Immutable metro network: the station catalog and its graph.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct NetworkModel {
    /// Catalog in declaration order. `NodeId(i)` is `stations[i]`.
    stations: Vec<Station>,

    /// Exact (name, line) lookup.
    index: HashMap<NodeKey, NodeId>,

    /// Normalized name to every node carrying that name, in catalog order.
    by_name: HashMap<String, Vec<NodeId>>,

    /// Outgoing edges per node, in insertion order.
    adjacency: Vec<Vec<Edge>>,
}

impl NetworkModel {
    /// Build the model from corridor and interchange declarations.
    ///
    /// Ids are assigned from 1 in declaration order. Consecutive stations on
    /// each corridor get a pair of ride edges weighted by
    /// `config.ride_hop`; each interchange gets a pair of transfer edges
    /// weighted by its penalty. An interchange naming a station that is not
    /// on the named line fails the build.
    pub fn build(
        definition: &NetworkDefinition,
        config: &NetworkConfig,
    ) -> Result<Self, NetworkError> {
        let ride_weight = config.ride_hop_weight();
        if !ride_weight.is_positive() {
            return Err(NetworkError::NonPositiveRideTime);
        }

        let mut stations = Vec::new();
        let mut index = HashMap::new();
        let mut by_name: HashMap<String, Vec<NodeId>> = HashMap::new();
        let mut runs: Vec<Vec<NodeId>> = Vec::with_capacity(definition.corridors.len());

        for corridor in &definition.corridors {
            if corridor.name.trim().is_empty() {
                return Err(NetworkError::EmptyLineName);
            }
            if corridor.stops.is_empty() {
                return Err(NetworkError::EmptyCorridor(corridor.name.clone()));
            }

            let mut run = Vec::with_capacity(corridor.stops.len());
            for stop in &corridor.stops {
                if stop.name.trim().is_empty() {
                    return Err(NetworkError::EmptyStationName(corridor.name.clone()));
                }

                let node = NodeId(stations.len());
                let station = Station {
                    id: StationId(node.0 as u32 + 1),
                    name: stop.name.clone(),
                    coordinates: stop.coordinates,
                    line_name: corridor.name.clone(),
                    line_color: corridor.color.clone(),
                };
                let key = station.key();
                if index.contains_key(&key) {
                    return Err(NetworkError::DuplicateStation(key));
                }

                stations.push(station);
                index.insert(key, node);
                by_name
                    .entry(normalize_name(&stop.name))
                    .or_default()
                    .push(node);
                run.push(node);
            }
            runs.push(run);
        }

        let mut adjacency = vec![Vec::new(); stations.len()];

        for run in &runs {
            for pair in run.windows(2) {
                if let [from, to] = pair {
                    connect(&mut adjacency, *from, *to, ride_weight, EdgeKind::Ride);
                }
            }
        }

        for interchange in &definition.interchanges {
            let from = interchange_endpoint(&index, &interchange.from)?;
            let to = interchange_endpoint(&index, &interchange.to)?;
            if interchange.from.line == interchange.to.line {
                return Err(NetworkError::SameLineInterchange {
                    from: interchange.from.clone(),
                    to: interchange.to.clone(),
                });
            }
            let penalty = TravelTime::from(interchange.penalty);
            if !penalty.is_positive() {
                return Err(NetworkError::NonPositivePenalty {
                    from: interchange.from.clone(),
                    to: interchange.to.clone(),
                });
            }
            connect(&mut adjacency, from, to, penalty, EdgeKind::Transfer);
        }

        let model = Self {
            stations,
            index,
            by_name,
            adjacency,
        };

        info!(
            lines = definition.corridors.len(),
            nodes = model.node_count(),
            edges = model.edge_count(),
            interchanges = definition.interchanges.len(),
            "Built metro network"
        );

        Ok(model)
    }

    /// The full station catalog, one record per (station, line).
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a node's station record.
    pub fn station(&self, node: NodeId) -> Option<&Station> {
        self.stations.get(node.0)
    }

    /// Look up the node for an exact (name, line) key.
    pub fn node(&self, key: &NodeKey) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// All nodes whose station name matches `name`, ignoring case and
    /// surrounding whitespace. Empty if the name is unknown.
    pub fn nodes_named(&self, name: &str) -> &[NodeId] {
        self.by_name
            .get(&normalize_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Outgoing edges of a node. Empty for an unknown node.
    pub fn edges(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Distinct station names containing `query` (case-insensitive), with the
    /// lines serving each. Names starting with the query come first; ties
    /// keep catalog order. A blank query matches nothing.
    pub fn search_names(&self, query: &str, limit: usize) -> Vec<NameMatch> {
        let needle = normalize_name(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut prefix = Vec::new();
        let mut infix = Vec::new();

        for station in &self.stations {
            let normalized = normalize_name(&station.name);
            if !normalized.contains(&needle) || !seen.insert(normalized.clone()) {
                continue;
            }
            let lines = self
                .nodes_named(&station.name)
                .iter()
                .filter_map(|n| self.station(*n))
                .map(|s| s.line_name.clone())
                .collect();
            let found = NameMatch {
                name: station.name.clone(),
                lines,
            };
            if normalized.starts_with(&needle) {
                prefix.push(found);
            } else {
                infix.push(found);
            }
        }

        prefix.into_iter().chain(infix).take(limit).collect()
    }
}

fn interchange_endpoint(
    index: &HashMap<NodeKey, NodeId>,
    key: &NodeKey,
) -> Result<NodeId, NetworkError> {
    index
        .get(key)
        .copied()
        .ok_or_else(|| NetworkError::UnknownInterchangeEndpoint(key.clone()))
}

/// Add an edge in both directions.
fn connect(adjacency: &mut [Vec<Edge>], a: NodeId, b: NodeId, weight: TravelTime, kind: EdgeKind) {
    if let Some(edges) = adjacency.get_mut(a.0) {
        edges.push(Edge {
            to: b,
            weight,
            kind,
        });
    }
    if let Some(edges) = adjacency.get_mut(b.0) {
        edges.push(Edge {
            to: a,
            weight,
            kind,
        });
    }
}
