//! Shortest-time path search.
//!
//! Dijkstra over the line-aware network graph, seeded from every node that
//! carries the origin name and stopping at the first settled node that
//! carries the destination name.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{Station, TravelTime};
use crate::network::{EdgeKind, NetworkModel, NodeId};

/// Error from path search.
///
/// Only raised when the network model is internally inconsistent; a
/// well-built model never produces one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// An edge or predecessor link names a node outside the catalog
    #[error("node {0:?} is not in the network")]
    MissingNode(NodeId),

    /// Following predecessor links never reached an origin node
    #[error("predecessor chain from {0:?} does not reach an origin")]
    BrokenPredecessorChain(NodeId),
}

/// Why a search found no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The origin name matches no station
    UnknownOrigin,
    /// The destination name matches no station
    UnknownDestination,
    /// Both names resolve but no path connects them
    Unreachable,
}

/// Result of a path search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Path),
    NotFound(NotFoundReason),
}

impl SearchOutcome {
    /// Returns the path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// One step between consecutive stations on a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<'a> {
    pub from: &'a Station,
    pub to: &'a Station,
    pub kind: EdgeKind,
}

/// A minimum-time path: stations in travel order and the edge used to
/// reach each one after the first.
///
/// Invariant: `links.len() + 1 == stations.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    stations: Vec<Station>,
    links: Vec<EdgeKind>,
    total_time: TravelTime,
}

impl Path {
    /// Create a path from its stations and the links between them.
    ///
    /// Returns `None` unless there is exactly one link fewer than stations.
    pub fn new(
        stations: Vec<Station>,
        links: Vec<EdgeKind>,
        total_time: TravelTime,
    ) -> Option<Self> {
        if stations.is_empty() || links.len() + 1 != stations.len() {
            return None;
        }
        Some(Self {
            stations,
            links,
            total_time,
        })
    }

    /// Stations in travel order, including both interchange platforms.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Cumulative edge weight from origin to destination.
    pub fn total_time(&self) -> TravelTime {
        self.total_time
    }

    /// Number of station records on the path.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false: a path holds at least its origin.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn origin(&self) -> Option<&Station> {
        self.stations.first()
    }

    pub fn destination(&self) -> Option<&Station> {
        self.stations.last()
    }

    /// Consecutive station pairs with the kind of edge joining them.
    pub fn transitions(&self) -> impl Iterator<Item = Transition<'_>> {
        self.stations
            .windows(2)
            .zip(&self.links)
            .filter_map(|(pair, kind)| match pair {
                [from, to] => Some(Transition {
                    from,
                    to,
                    kind: *kind,
                }),
                _ => None,
            })
    }

    /// Distinct stations travelled between, for fare purposes.
    ///
    /// Counts consecutive entries whose names differ, so a change at a
    /// shared platform is free but a walkway between two named stations
    /// counts as a hop.
    pub fn hop_count(&self) -> usize {
        self.transitions()
            .filter(|t| t.from.name != t.to.name)
            .count()
    }

    /// Number of ride links on the path.
    pub fn ride_count(&self) -> usize {
        self.links.iter().filter(|k| **k == EdgeKind::Ride).count()
    }

    /// Number of interchanges on the path.
    pub fn transfer_count(&self) -> usize {
        self.links
            .iter()
            .filter(|k| **k == EdgeKind::Transfer)
            .count()
    }
}

/// Search priority: time first, then fewer transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Label {
    time: TravelTime,
    transfers: usize,
}

impl Label {
    const ORIGIN: Label = Label {
        time: TravelTime::ZERO,
        transfers: 0,
    };

    fn extend(self, weight: TravelTime, kind: EdgeKind) -> Label {
        Label {
            time: self.time + weight,
            transfers: self.transfers + usize::from(kind == EdgeKind::Transfer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    label: Label,
    /// Push order; earlier discoveries win remaining ties.
    seq: u64,
    node: NodeId,
}

// BinaryHeap is a max-heap, so the comparison is reversed.
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .label
            .cmp(&self.label)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-search bookkeeping, allocated fresh for every call.
struct SearchSpace {
    best: Vec<Option<Label>>,
    prev: Vec<Option<(NodeId, EdgeKind)>>,
    settled: Vec<bool>,
    heap: BinaryHeap<QueueEntry>,
    next_seq: u64,
}

impl SearchSpace {
    fn new(node_count: usize) -> Self {
        Self {
            best: vec![None; node_count],
            prev: vec![None; node_count],
            settled: vec![false; node_count],
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Record `label` for `node` if it improves on the best known.
    fn relax(&mut self, node: NodeId, label: Label, via: Option<(NodeId, EdgeKind)>) -> bool {
        let Some(best) = self.best.get_mut(node.0) else {
            return false;
        };
        if best.is_some_and(|b| b <= label) {
            return false;
        }
        *best = Some(label);
        if let Some(prev) = self.prev.get_mut(node.0) {
            *prev = via;
        }
        self.heap.push(QueueEntry {
            label,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
        true
    }
}

/// Finds minimum-time paths between named stations.
///
/// Holds only a shared reference to the network; every search allocates its
/// own queue and maps, so one finder (or many) can serve concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    network: &'a NetworkModel,
}

impl<'a> PathFinder<'a> {
    pub fn new(network: &'a NetworkModel) -> Self {
        Self { network }
    }

    /// Find the fastest path from any station named `origin` to any station
    /// named `destination`.
    ///
    /// Names match case-insensitively after trimming. Every line serving the
    /// origin is a start node and every line serving the destination a goal.
    /// Among equal-time paths the one with fewer interchanges wins, then the
    /// one discovered first.
    pub fn find_path(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<SearchOutcome, SearchError> {
        let starts = self.network.nodes_named(origin);
        let goals = self.network.nodes_named(destination);

        if starts.is_empty() {
            debug!(origin, "Origin matches no station");
            return Ok(SearchOutcome::NotFound(NotFoundReason::UnknownOrigin));
        }
        if goals.is_empty() {
            debug!(destination, "Destination matches no station");
            return Ok(SearchOutcome::NotFound(NotFoundReason::UnknownDestination));
        }

        let mut is_goal = vec![false; self.network.node_count()];
        for goal in goals {
            if let Some(flag) = is_goal.get_mut(goal.0) {
                *flag = true;
            }
        }

        let mut space = SearchSpace::new(self.network.node_count());
        for start in starts {
            space.relax(*start, Label::ORIGIN, None);
        }

        let mut settled_count = 0usize;

        while let Some(QueueEntry { label, node, .. }) = space.heap.pop() {
            let Some(settled) = space.settled.get_mut(node.0) else {
                return Err(SearchError::MissingNode(node));
            };
            if *settled {
                continue;
            }
            *settled = true;
            settled_count += 1;

            if is_goal.get(node.0).copied().unwrap_or(false) {
                trace!(settled = settled_count, "Reached destination");
                let path = self.reconstruct(&space, node, label.time)?;
                debug!(
                    origin,
                    destination,
                    stations = path.len(),
                    hops = path.hop_count(),
                    transfers = path.transfer_count(),
                    time = %path.total_time(),
                    "Path found"
                );
                return Ok(SearchOutcome::Found(path));
            }

            for edge in self.network.edges(node) {
                if space.settled.get(edge.to.0).copied().unwrap_or(true) {
                    continue;
                }
                let candidate = label.extend(edge.weight, edge.kind);
                space.relax(edge.to, candidate, Some((node, edge.kind)));
            }
        }

        debug!(
            origin,
            destination,
            settled = settled_count,
            "Destination unreachable"
        );
        Ok(SearchOutcome::NotFound(NotFoundReason::Unreachable))
    }

    /// Walk predecessor links back from `goal` to a start node.
    fn reconstruct(
        &self,
        space: &SearchSpace,
        goal: NodeId,
        total_time: TravelTime,
    ) -> Result<Path, SearchError> {
        let mut nodes = vec![goal];
        let mut links = Vec::new();
        let mut current = goal;

        while let Some((prev, kind)) = space
            .prev
            .get(current.0)
            .copied()
            .ok_or(SearchError::MissingNode(current))?
        {
            if nodes.len() > self.network.node_count() {
                return Err(SearchError::BrokenPredecessorChain(goal));
            }
            nodes.push(prev);
            links.push(kind);
            current = prev;
        }

        nodes.reverse();
        links.reverse();

        let stations = nodes
            .iter()
            .map(|n| {
                self.network
                    .station(*n)
                    .cloned()
                    .ok_or(SearchError::MissingNode(*n))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Path::new(stations, links, total_time).ok_or(SearchError::BrokenPredecessorChain(goal))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
