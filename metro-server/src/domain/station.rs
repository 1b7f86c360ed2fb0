//! Station types.

use std::fmt;

/// Unique identifier of a (station, line) record in the catalog.
///
/// Ids are assigned from 1 in corridor declaration order and are stable for
/// a given network definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub u32);

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A station as it appears on one line.
///
/// A physical interchange served by two lines appears twice in the catalog,
/// once per line, with the same name. Each record is a separate graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Missing for stations whose position was never published.
    pub coordinates: Option<Coordinates>,
    pub line_name: String,
    /// Display colour of the owning line, passed through untouched.
    pub line_color: String,
}

impl Station {
    /// Returns the graph key for this station record.
    pub fn key(&self) -> NodeKey {
        NodeKey::new(&self.name, &self.line_name)
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.longitude)
    }

    /// Returns true if `query` names this station, ignoring case and
    /// surrounding whitespace.
    pub fn matches_name(&self, query: &str) -> bool {
        normalize_name(&self.name) == normalize_name(query)
    }
}

/// Composite graph key: a station name on a particular line.
///
/// Names are stored exactly as declared; matching user input against them
/// goes through [`normalize_name`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey {
    pub station: String,
    pub line: String,
}

impl NodeKey {
    pub fn new(station: &str, line: &str) -> Self {
        Self {
            station: station.to_string(),
            line: line.to_string(),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.station, self.line)
    }
}

/// Canonical form of a station name for lookups: trimmed and lowercased.
///
/// # Examples
///
/// ```
/// use metro_server::domain::normalize_name;
///
/// assert_eq!(normalize_name("  Ameerpet "), "ameerpet");
/// assert_eq!(normalize_name("MG Bus Station"), "mg bus station");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
