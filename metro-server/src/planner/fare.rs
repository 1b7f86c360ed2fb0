//! Station-count fares.

/// A fare in whole rupees.
pub type Fare = u32;

/// Error returned when fare slabs are not strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fare slab bounds must be strictly ascending")]
pub struct UnorderedSlabs;

/// Step table from hop count to fare.
///
/// Each slab is an inclusive upper bound on hops and the fare charged up to
/// it. Journeys longer than the last bound pay `beyond`.
///
/// # Examples
///
/// ```
/// use metro_server::planner::FareTable;
///
/// let fares = FareTable::default();
/// assert_eq!(fares.fare(0), 10);
/// assert_eq!(fares.fare(3), 15);
/// assert_eq!(fares.fare(31), 65);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareTable {
    slabs: Vec<(usize, Fare)>,
    beyond: Fare,
}

impl FareTable {
    /// Create a table from `(max_hops, fare)` slabs in ascending order.
    pub fn new(slabs: Vec<(usize, Fare)>, beyond: Fare) -> Result<Self, UnorderedSlabs> {
        if slabs.windows(2).any(|w| matches!(w, [a, b] if a.0 >= b.0)) {
            return Err(UnorderedSlabs);
        }
        Ok(Self { slabs, beyond })
    }

    /// Fare for a journey of `hops` distinct station transitions.
    pub fn fare(&self, hops: usize) -> Fare {
        self.slabs
            .iter()
            .find(|(max_hops, _)| hops <= *max_hops)
            .map(|(_, fare)| *fare)
            .unwrap_or(self.beyond)
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self {
            slabs: vec![
                (2, 10),
                (4, 15),
                (6, 25),
                (8, 30),
                (10, 35),
                (14, 40),
                (18, 45),
                (22, 50),
                (26, 55),
                (30, 60),
            ],
            beyond: 65,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn slab_boundaries() {
        let fares = FareTable::default();
        let cases = [
            (0, 10),
            (1, 10),
            (2, 10),
            (3, 15),
            (4, 15),
            (5, 25),
            (6, 25),
            (7, 30),
            (8, 30),
            (9, 35),
            (10, 35),
            (11, 40),
            (14, 40),
            (15, 45),
            (18, 45),
            (19, 50),
            (22, 50),
            (23, 55),
            (26, 55),
            (27, 60),
            (30, 60),
            (31, 65),
            (1000, 65),
        ];
        for (hops, expected) in cases {
            assert_eq!(fares.fare(hops), expected, "hops = {hops}");
        }
    }

    #[test]
    fn custom_table() {
        let fares = FareTable::new(vec![(1, 5), (3, 8)], 12).unwrap();
        assert_eq!(fares.fare(0), 5);
        assert_eq!(fares.fare(2), 8);
        assert_eq!(fares.fare(4), 12);

        let flat = FareTable::new(vec![], 20).unwrap();
        assert_eq!(flat.fare(0), 20);
    }

    #[test]
    fn unordered_slabs_rejected() {
        assert_eq!(
            FareTable::new(vec![(4, 15), (2, 10)], 65),
            Err(UnorderedSlabs)
        );
        assert_eq!(
            FareTable::new(vec![(2, 10), (2, 15)], 65),
            Err(UnorderedSlabs)
        );
    }

    proptest! {
        /// More hops never cost less.
        #[test]
        fn fare_is_monotonic(a in 0usize..100, b in 0usize..100) {
            let fares = FareTable::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(fares.fare(lo) <= fares.fare(hi));
        }

        /// Every hop count has a fare within the table's range.
        #[test]
        fn fare_is_total(hops in any::<usize>()) {
            let fare = FareTable::default().fare(hops);
            prop_assert!((10..=65).contains(&fare));
        }
    }
}
