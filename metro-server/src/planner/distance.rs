//! Rail distance along a path.

use crate::domain::Coordinates;
use crate::network::EdgeKind;

use super::search::Path;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Sum of great-circle distances over the ride edges of a path.
///
/// Interchange walks add nothing. A ride segment with a station lacking
/// coordinates also adds nothing rather than failing the whole sum.
pub fn ride_distance_km(path: &Path) -> f64 {
    path.transitions()
        .filter(|t| t.kind == EdgeKind::Ride)
        .filter_map(|t| Some(haversine_km(t.from.coordinates?, t.to.coordinates?)))
        .sum()
}

/// Round to one decimal place for display.
pub fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Station, StationId, TravelTime};

    fn located(name: &str, line: &str, lat: f64, lon: f64) -> Station {
        Station {
            id: StationId(0),
            name: name.to_string(),
            coordinates: Some(Coordinates::new(lat, lon)),
            line_name: line.to_string(),
            line_color: String::new(),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn haversine_known_values() {
        let origin = Coordinates::new(0.0, 0.0);
        assert!(close(haversine_km(origin, origin), 0.0));

        // One degree of longitude on the equator
        let east = Coordinates::new(0.0, 1.0);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!(close(haversine_km(origin, east), expected));

        // Symmetric
        let a = Coordinates::new(17.4948, 78.3973);
        let b = Coordinates::new(17.43782, 78.446865);
        assert!(close(haversine_km(a, b), haversine_km(b, a)));
        assert!((haversine_km(a, b) - 8.22).abs() < 0.05);
    }

    #[test]
    fn transfers_add_no_distance() {
        // The two X platforms are 1km apart, but the walk is not rail distance
        let path = Path::new(
            vec![
                located("A", "Red", 0.0, 0.0),
                located("X", "Red", 0.0, 0.01),
                located("X", "Blue", 0.0, 0.02),
                located("B", "Blue", 0.0, 0.03),
            ],
            vec![EdgeKind::Ride, EdgeKind::Transfer, EdgeKind::Ride],
            TravelTime::ZERO,
        )
        .unwrap();

        let hop = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 0.01));
        assert!(close(ride_distance_km(&path), 2.0 * hop));
    }

    #[test]
    fn transfer_only_path_has_zero_distance() {
        let path = Path::new(
            vec![
                located("X", "Red", 17.0, 78.0),
                located("X", "Blue", 17.1, 78.1),
            ],
            vec![EdgeKind::Transfer],
            TravelTime::ZERO,
        )
        .unwrap();
        assert!(close(ride_distance_km(&path), 0.0));
    }

    #[test]
    fn missing_coordinates_skip_only_that_segment() {
        let mut unlocated = located("M", "Red", 0.0, 0.0);
        unlocated.coordinates = None;

        let path = Path::new(
            vec![
                located("A", "Red", 0.0, 0.0),
                located("B", "Red", 0.0, 0.01),
                unlocated,
                located("C", "Red", 0.0, 0.03),
            ],
            vec![EdgeKind::Ride; 3],
            TravelTime::ZERO,
        )
        .unwrap();

        let hop = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 0.01));
        assert!(close(ride_distance_km(&path), hop));
    }

    #[test]
    fn single_station_has_zero_distance() {
        let path =
            Path::new(vec![located("A", "Red", 0.0, 0.0)], vec![], TravelTime::ZERO).unwrap();
        assert!(close(ride_distance_km(&path), 0.0));
    }

    #[test]
    fn rounding() {
        assert!(close(round_to_tenth(12.345), 12.3));
        assert!(close(round_to_tenth(12.35), 12.4));
        assert!(close(round_to_tenth(0.04), 0.0));
    }
}
