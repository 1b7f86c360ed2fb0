//! Travel time along the network.
//!
//! Edge weights and path totals are kept as exact durations (whole seconds)
//! so that summing fractional-minute hops never drifts, and only rounded to
//! minutes when reported to a rider.

use chrono::Duration;
use std::fmt;
use std::ops::Add;

/// Cumulative travel time.
///
/// A thin wrapper around [`chrono::Duration`] that orders totally, so it can
/// key a priority queue directly.
///
/// # Examples
///
/// ```
/// use metro_server::domain::TravelTime;
///
/// let hop = TravelTime::from_secs(150);
/// let total = hop + hop + TravelTime::from_minutes(2);
/// assert_eq!(total.as_secs(), 420);
/// assert_eq!(total.rounded_minutes(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelTime(Duration);

impl TravelTime {
    pub const ZERO: TravelTime = TravelTime(Duration::zero());

    pub fn from_secs(secs: i64) -> Self {
        Self(Duration::seconds(secs))
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self(Duration::minutes(minutes))
    }

    pub fn as_secs(&self) -> i64 {
        self.0.num_seconds()
    }

    /// Returns true if this is a usable edge weight.
    pub fn is_positive(&self) -> bool {
        self.0 > Duration::zero()
    }

    /// Minutes rounded to the nearest whole minute, halves rounding up.
    pub fn rounded_minutes(&self) -> i64 {
        (self.as_secs() + 30).div_euclid(60)
    }
}

impl Default for TravelTime {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Duration> for TravelTime {
    fn from(d: Duration) -> Self {
        Self(d)
    }
}

impl Add for TravelTime {
    type Output = TravelTime;

    fn add(self, rhs: TravelTime) -> TravelTime {
        TravelTime(self.0 + rhs.0)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.as_secs();
        write!(f, "{}m{:02}s", secs.div_euclid(60), secs.rem_euclid(60))
    }
}
