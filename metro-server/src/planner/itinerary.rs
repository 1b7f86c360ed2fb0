//! Rider-facing instructions for a path.
//!
//! A raw path lists every platform visited. Riders want it compressed: ride
//! this line for N stops, change here, ride that line.

use crate::network::EdgeKind;

use super::search::Path;

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Stay on `line` from `from` to `to`, passing `stops` stations.
    Ride {
        from: String,
        to: String,
        line: String,
        stops: usize,
    },
    /// Walk to the `to_line` platform at `station`.
    Change { station: String, to_line: String },
}

/// Compress a path into ride and change instructions.
///
/// Each run of ride edges becomes one `Ride`; each transfer edge becomes one
/// `Change` naming the platform being walked to. A path of fewer than two
/// stations has no instructions.
pub fn build_instructions(path: &Path) -> Vec<Instruction> {
    let mut out = Vec::new();
    let Some(first) = path.origin() else {
        return out;
    };

    let mut entry = first;
    let mut stops = 0usize;

    for step in path.transitions() {
        match step.kind {
            EdgeKind::Ride => stops += 1,
            EdgeKind::Transfer => {
                if stops > 0 {
                    out.push(Instruction::Ride {
                        from: entry.name.clone(),
                        to: step.from.name.clone(),
                        line: entry.line_name.clone(),
                        stops,
                    });
                }
                out.push(Instruction::Change {
                    station: step.to.name.clone(),
                    to_line: step.to.line_name.clone(),
                });
                entry = step.to;
                stops = 0;
            }
        }
    }

    if stops > 0 {
        if let Some(last) = path.destination() {
            out.push(Instruction::Ride {
                from: entry.name.clone(),
                to: last.name.clone(),
                line: entry.line_name.clone(),
                stops,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Station, StationId, TravelTime};
    use crate::network::{NetworkConfig, NetworkModel, hyderabad_metro};
    use crate::planner::PathFinder;

    fn station(id: u32, name: &str, line: &str) -> Station {
        Station {
            id: StationId(id),
            name: name.to_string(),
            coordinates: None,
            line_name: line.to_string(),
            line_color: String::new(),
        }
    }

    fn plan(origin: &str, destination: &str) -> Vec<Instruction> {
        let network = NetworkModel::build(&hyderabad_metro(), &NetworkConfig::default()).unwrap();
        let outcome = PathFinder::new(&network)
            .find_path(origin, destination)
            .unwrap();
        build_instructions(outcome.path().unwrap())
    }

    fn ride(from: &str, to: &str, line: &str, stops: usize) -> Instruction {
        Instruction::Ride {
            from: from.into(),
            to: to.into(),
            line: line.into(),
            stops,
        }
    }

    fn change(station: &str, to_line: &str) -> Instruction {
        Instruction::Change {
            station: station.into(),
            to_line: to_line.into(),
        }
    }

    #[test]
    fn single_line_is_one_ride() {
        assert_eq!(
            plan("Miyapur", "Ameerpet"),
            [ride("Miyapur", "Ameerpet", "Red Line", 10)]
        );
    }

    #[test]
    fn interchange_splits_rides() {
        assert_eq!(
            plan("Bharat Nagar", "Raidurg"),
            [
                ride("Bharat Nagar", "Ameerpet", "Red Line", 4),
                change("Ameerpet", "Blue Line"),
                ride("Ameerpet", "Raidurg", "Blue Line", 8),
            ]
        );
    }

    #[test]
    fn two_interchanges() {
        // Green to western Blue via Red: MG Bus Station, then Ameerpet
        assert_eq!(
            plan("Sultan Bazar", "Raidurg"),
            [
                ride("Sultan Bazar", "MG Bus Station", "Green Line", 1),
                change("MG Bus Station", "Red Line"),
                ride("MG Bus Station", "Ameerpet", "Red Line", 9),
                change("Ameerpet", "Blue Line"),
                ride("Ameerpet", "Raidurg", "Blue Line", 8),
            ]
        );
    }

    #[test]
    fn walkway_change_names_the_new_platform() {
        assert_eq!(
            plan("Secunderabad East", "Secunderabad West"),
            [
                ride("Secunderabad East", "Parade Ground", "Blue Line", 1),
                change("JBS Parade Ground", "Green Line"),
                ride("JBS Parade Ground", "Secunderabad West", "Green Line", 1),
            ]
        );
    }

    #[test]
    fn degenerate_paths_have_no_instructions() {
        let single = Path::new(vec![station(1, "A", "Red")], vec![], TravelTime::ZERO).unwrap();
        assert!(build_instructions(&single).is_empty());
    }

    #[test]
    fn transfer_only_path_is_a_single_change() {
        let path = Path::new(
            vec![station(1, "X", "Red"), station(2, "X", "Blue")],
            vec![EdgeKind::Transfer],
            TravelTime::from_minutes(2),
        )
        .unwrap();
        assert_eq!(build_instructions(&path), [change("X", "Blue")]);
    }

    #[test]
    fn ride_stops_sum_to_ride_count() {
        let network = NetworkModel::build(&hyderabad_metro(), &NetworkConfig::default()).unwrap();
        let finder = PathFinder::new(&network);
        for (from, to) in [
            ("Miyapur", "Raidurg"),
            ("LB Nagar", "Nagole"),
            ("Hitec City", "Gandhi Hospital"),
        ] {
            let outcome = finder.find_path(from, to).unwrap();
            let path = outcome.path().unwrap();
            let instructions = build_instructions(path);

            let stops: usize = instructions
                .iter()
                .map(|i| match i {
                    Instruction::Ride { stops, .. } => *stops,
                    Instruction::Change { .. } => 0,
                })
                .sum();
            let changes = instructions
                .iter()
                .filter(|i| matches!(i, Instruction::Change { .. }))
                .count();

            assert_eq!(stops, path.ride_count(), "{from} -> {to}");
            assert_eq!(changes, path.transfer_count(), "{from} -> {to}");
        }
    }
}
