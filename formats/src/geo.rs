//! Geospatial helpers: great-circle distance, bearing and compass bucketing.
//!
//! All functions here are pure and deterministic.  Sector boundaries are inclusive on
//! the lower bound and exclusive on the upper one; the north sector is the wrap-around
//! one spanning the 0°/360° seam.
//!

use crate::Position;

/// Radius of the Earth in statute miles
pub const EARTH_RADIUS_MI: f64 = 3958.8;

/// Great-circle distance between two points in statute miles, using the haversine
/// formula.  Symmetric in its arguments, zero for identical points.
///
pub fn distance_miles(a: Position, b: Position) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.).sin().powi(2);
    let c = 2. * h.sqrt().atan2((1. - h).sqrt());

    EARTH_RADIUS_MI * c
}

/// Initial bearing (forward azimuth) from `a` to `b`, normalized into [0, 360).
///
pub fn initial_bearing(a: Position, b: Position) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    (y.atan2(x).to_degrees() + 360.) % 360.
}

/// Abbreviated cardinal/ordinal direction for a bearing, `""` when there is none.
///
pub fn cardinal_from_bearing(bearing: Option<f64>) -> &'static str {
    let b = match bearing {
        Some(b) => b.rem_euclid(360.),
        None => return "",
    };

    match b {
        b if (22.5..67.5).contains(&b) => "NE",
        b if (67.5..112.5).contains(&b) => "E",
        b if (112.5..157.5).contains(&b) => "SE",
        b if (157.5..202.5).contains(&b) => "S",
        b if (202.5..247.5).contains(&b) => "SW",
        b if (247.5..292.5).contains(&b) => "W",
        b if (292.5..337.5).contains(&b) => "NW",
        // both ends of the seam
        _ => "N",
    }
}

/// Long-form compass name for a reported ground track, or `"N/A"` when the value is
/// missing or not a number.  The angle is truncated and normalized before bucketing.
///
pub fn classify_track(track: Option<f64>) -> String {
    let t = match track {
        Some(t) => (t as i64).rem_euclid(360),
        None => return "N/A".to_string(),
    };

    let name = match t {
        0..=22 | 338..=359 => "North",
        23..=67 => "Northeast",
        68..=112 => "East",
        113..=157 => "Southeast",
        158..=202 => "South",
        203..=247 => "Southwest",
        248..=292 => "West",
        293..=337 => "Northwest",
        _ => return t.to_string(),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[inline]
    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_distance_identical() {
        let p = Position::new(33.9, -84.3);
        assert_eq!(0., distance_miles(p, p));
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Position::new(33.9, -84.3);
        let b = Position::new(41.9, -87.9);
        assert!(close(distance_miles(a, b), distance_miles(b, a)));
    }

    #[test]
    fn test_distance_one_degree_equator() {
        let a = Position::new(0., 0.);
        let b = Position::new(0., 1.);

        // one degree of longitude on the equator
        assert!(close(69.093, distance_miles(a, b)));
    }

    #[rstest]
    #[case(0., 0., 0., 1., 90.)]
    #[case(0., 0., 1., 0., 0.)]
    #[case(0., 0., 0., - 1., 270.)]
    #[case(0., 0., - 1., 0., 180.)]
    fn test_initial_bearing(
        #[case] lat1: f64,
        #[case] lon1: f64,
        #[case] lat2: f64,
        #[case] lon2: f64,
        #[case] expected: f64,
    ) {
        let b = initial_bearing(Position::new(lat1, lon1), Position::new(lat2, lon2));
        assert!(close(expected, b), "got {b}");
    }

    #[test]
    fn test_initial_bearing_range() {
        let home = Position::new(33.9, -84.4);
        for i in 0..36 {
            let p = Position::new(33.9 + ((i * 10) as f64).sin(), -84.4 + ((i * 10) as f64).cos());
            let b = initial_bearing(home, p);
            assert!((0. ..360.).contains(&b), "bearing {b} out of range");
        }
    }

    #[rstest]
    #[case(0., "N")]
    #[case(22.4, "N")]
    #[case(22.5, "NE")]
    #[case(45., "NE")]
    #[case(67.5, "E")]
    #[case(90., "E")]
    #[case(112.5, "SE")]
    #[case(157.5, "S")]
    #[case(202.5, "SW")]
    #[case(247.5, "W")]
    #[case(292.5, "NW")]
    #[case(337.5, "N")]
    #[case(359.9, "N")]
    fn test_cardinal_from_bearing(#[case] bearing: f64, #[case] expected: &str) {
        assert_eq!(expected, cardinal_from_bearing(Some(bearing)));
    }

    #[test]
    fn test_cardinal_from_bearing_none() {
        assert_eq!("", cardinal_from_bearing(None));
    }

    #[test]
    fn test_cardinal_covers_all_sectors() {
        let all = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        for i in 0..360 {
            let c = cardinal_from_bearing(Some(i as f64));
            assert!(all.contains(&c), "bearing {i} gave {c}");
        }
    }

    #[rstest]
    #[case(Some(0.), "North")]
    #[case(Some(22.), "North")]
    #[case(Some(23.), "Northeast")]
    #[case(Some(45.), "Northeast")]
    #[case(Some(90.), "East")]
    #[case(Some(135.), "Southeast")]
    #[case(Some(180.), "South")]
    #[case(Some(225.), "Southwest")]
    #[case(Some(270.), "West")]
    #[case(Some(315.), "Northwest")]
    #[case(Some(338.), "North")]
    #[case(Some(350.), "North")]
    #[case(Some(720.), "North")]
    #[case(Some(- 90.), "West")]
    #[case(None, "N/A")]
    fn test_classify_track(#[case] track: Option<f64>, #[case] expected: &str) {
        assert_eq!(expected, classify_track(track));
    }
}
