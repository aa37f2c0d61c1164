//! Waypoint type and `label,x,y` parsing.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A stop on a route.
///
/// The label is opaque to the solvers: they only ever see the waypoint's
/// position in the matrix. Coordinates are optional and only needed when
/// the matrix is derived from geometry.
///
/// # Examples
///
/// ```
/// use u_tour::models::Waypoint;
///
/// let a = Waypoint::new("Depot");
/// assert!(a.location().is_none());
///
/// let b = Waypoint::with_location("Store", 3.0, 4.0);
/// assert_eq!(b.label(), "Store");
/// assert!((Waypoint::with_location("O", 0.0, 0.0).distance_to(&b).unwrap() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    label: String,
    location: Option<(f64, f64)>,
}

impl Waypoint {
    /// Creates a waypoint without coordinates.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            location: None,
        }
    }

    /// Creates a waypoint at the given coordinates.
    pub fn with_location(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            location: Some((x, y)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    /// Euclidean distance to another waypoint, if both have coordinates.
    pub fn distance_to(&self, other: &Waypoint) -> Option<f64> {
        let (x1, y1) = self.location?;
        let (x2, y2) = other.location?;
        let dx = x1 - x2;
        let dy = y1 - y2;
        Some((dx * dx + dy * dy).sqrt())
    }
}

/// Parses waypoints from `label,x,y` lines.
///
/// Blank lines are skipped. Surrounding whitespace on each field is ignored.
/// Coordinates must be finite numbers.
///
/// # Examples
///
/// ```
/// use u_tour::models::parse_waypoints;
///
/// let wps = parse_waypoints("A,0,0\nB,1.5,2\n").unwrap();
/// assert_eq!(wps.len(), 2);
/// assert_eq!(wps[1].location(), Some((1.5, 2.0)));
/// ```
pub fn parse_waypoints(text: &str) -> Result<Vec<Waypoint>, InputError> {
    let mut waypoints = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = || InputError::MalformedLine {
            line: i + 1,
            content: line.to_string(),
        };
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [label, x, y] = fields.as_slice() else {
            return Err(malformed());
        };
        let x: f64 = x.parse().map_err(|_| malformed())?;
        let y: f64 = y.parse().map_err(|_| malformed())?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(malformed());
        }
        waypoints.push(Waypoint::with_location(*label, x, y));
    }
    Ok(waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_new() {
        let w = Waypoint::new("1600 Amphitheatre Pkwy");
        assert_eq!(w.label(), "1600 Amphitheatre Pkwy");
        assert!(w.location().is_none());
    }

    #[test]
    fn test_distance_requires_locations() {
        let a = Waypoint::new("A");
        let b = Waypoint::with_location("B", 1.0, 1.0);
        assert!(a.distance_to(&b).is_none());
        assert!(b.distance_to(&a).is_none());
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Waypoint::with_location("A", 1.0, 2.0);
        let b = Waypoint::with_location("B", 4.0, 6.0);
        let ab = a.distance_to(&b).expect("both located");
        let ba = b.distance_to(&a).expect("both located");
        assert!((ab - 5.0).abs() < 1e-10);
        assert!((ab - ba).abs() < 1e-10);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let wps = parse_waypoints("\nA, 1, 2\n\n B ,3,4 \n").expect("valid");
        assert_eq!(wps.len(), 2);
        assert_eq!(wps[0].label(), "A");
        assert_eq!(wps[1].label(), "B");
        assert_eq!(wps[1].location(), Some((3.0, 4.0)));
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let err = parse_waypoints("A,1,2\nB,3\n").expect_err("two fields");
        assert_eq!(
            err,
            InputError::MalformedLine {
                line: 2,
                content: "B,3".into(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        assert!(matches!(
            parse_waypoints("A,x,2"),
            Err(InputError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite_coordinates() {
        for text in ["A,NaN,0", "A,0,nan", "A,inf,1", "A,1,-infinity"] {
            assert_eq!(
                parse_waypoints(text),
                Err(InputError::MalformedLine {
                    line: 1,
                    content: text.into(),
                }),
                "{text}"
            );
        }
    }
}
