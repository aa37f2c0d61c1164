//! Dense distance matrix.

use crate::error::InputError;
use crate::models::Waypoint;

/// A dense n×n cost matrix stored in row-major order.
///
/// Entries are non-negative and the diagonal is zero. `f64::INFINITY`
/// marks a missing edge. The matrix need not be symmetric, but the
/// spanning-tree builders read only `get(i, j)` for `i < j` or along the
/// tree frontier and so assume it is.
///
/// # Examples
///
/// ```
/// use u_tour::models::Waypoint;
/// use u_tour::distance::DistanceMatrix;
///
/// let waypoints = vec![
///     Waypoint::with_location("A", 0.0, 0.0),
///     Waypoint::with_location("B", 3.0, 4.0),
///     Waypoint::with_location("C", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_waypoints(&waypoints).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from waypoint coordinates.
    ///
    /// Fails with [`InputError::MissingLocation`] if any waypoint has none
    /// and [`InputError::InvalidLocation`] if a coordinate is not finite.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Result<Self, InputError> {
        for (index, waypoint) in waypoints.iter().enumerate() {
            match waypoint.location() {
                None => return Err(InputError::MissingLocation { index }),
                Some((x, y)) if !(x.is_finite() && y.is_finite()) => {
                    return Err(InputError::InvalidLocation { index })
                }
                Some(_) => {}
            }
        }
        let n = waypoints.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = waypoints[i]
                    .distance_to(&waypoints[j])
                    .ok_or(InputError::MissingLocation { index: i })?;
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm.validate()?;
        Ok(dm)
    }

    /// Creates a validated matrix from nested rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::distance::DistanceMatrix;
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 10.0],
    ///     vec![12.0, 0.0],
    /// ]).unwrap();
    /// assert!(!dm.is_symmetric(1e-10));
    /// assert!(DistanceMatrix::from_rows(vec![vec![0.0, 1.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let size = rows.len();
        if size == 0 {
            return Err(InputError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(InputError::NotSquare {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }
        Self::from_data(size, data)
    }

    /// Creates a validated matrix from an explicit row-major n×n grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, InputError> {
        if size == 0 {
            return Err(InputError::EmptyMatrix);
        }
        if data.len() != size * size {
            return Err(InputError::DimensionMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    fn validate(&self) -> Result<(), InputError> {
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.get(row, col);
                if value.is_nan() || value < 0.0 {
                    return Err(InputError::InvalidEntry { row, col, value });
                }
                if row == col && value != 0.0 {
                    return Err(InputError::NonZeroDiagonal { index: row, value });
                }
            }
        }
        Ok(())
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two infinite entries compare equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a != b && (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the closest unvisited location to `from`.
    ///
    /// Candidates are scanned in index order and only a strictly smaller
    /// cost replaces the current best, so ties go to the lowest index. An
    /// infinite edge is still returned when nothing finite remains.
    /// Returns `None` once every location is visited.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = self.get(from, i);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best
    }

    /// Sum of `get(path[k], path[k + 1])` over consecutive pairs.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::with_location("A", 0.0, 0.0),
            Waypoint::with_location("B", 3.0, 4.0),
            Waypoint::with_location("C", 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_waypoints() {
        let dm = DistanceMatrix::from_waypoints(&sample_waypoints()).expect("located");
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_waypoints_missing_location() {
        let mut wps = sample_waypoints();
        wps.push(Waypoint::new("nowhere"));
        assert_eq!(
            DistanceMatrix::from_waypoints(&wps),
            Err(InputError::MissingLocation { index: 3 })
        );
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(f64::NEG_INFINITY, 1.0)]
    fn test_from_waypoints_rejects_non_finite_location(#[case] x: f64, #[case] y: f64) {
        let mut wps = sample_waypoints();
        wps.insert(1, Waypoint::with_location("bad", x, y));
        assert_eq!(
            DistanceMatrix::from_waypoints(&wps),
            Err(InputError::InvalidLocation { index: 1 })
        );
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert_eq!(
            DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]),
            Err(InputError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[rstest]
    #[case(vec![], InputError::EmptyMatrix)]
    #[case(
        vec![vec![0.0, 1.0], vec![1.0]],
        InputError::NotSquare { row: 1, expected: 2, actual: 1 }
    )]
    #[case(
        vec![vec![0.0, -1.0], vec![1.0, 0.0]],
        InputError::InvalidEntry { row: 0, col: 1, value: -1.0 }
    )]
    #[case(
        vec![vec![0.0, 1.0], vec![1.0, 2.0]],
        InputError::NonZeroDiagonal { index: 1, value: 2.0 }
    )]
    fn test_from_rows_rejects(#[case] rows: Vec<Vec<f64>>, #[case] expected: InputError) {
        assert_eq!(DistanceMatrix::from_rows(rows), Err(expected));
    }

    #[test]
    fn test_from_rows_rejects_nan() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]])
            .expect_err("NaN entry");
        assert!(matches!(err, InputError::InvalidEntry { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_from_rows_accepts_infinity() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, f64::INFINITY],
            vec![f64::INFINITY, 0.0],
        ])
        .expect("infinite edges are missing edges, not invalid");
        assert!(dm.get(0, 1).is_infinite());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_nearest_unvisited() {
        let dm = DistanceMatrix::from_waypoints(&sample_waypoints()).expect("located");
        assert_eq!(dm.nearest_unvisited(0, &[true, false, false]), Some((1, 5.0)));
        assert_eq!(dm.nearest_unvisited(0, &[true, true, false]), Some((2, 8.0)));
        assert_eq!(dm.nearest_unvisited(0, &[true, true, true]), None);
    }

    #[test]
    fn test_nearest_unvisited_tie_goes_to_lowest_index() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 7.0, 3.0, 3.0],
            vec![7.0, 0.0, 1.0, 1.0],
            vec![3.0, 1.0, 0.0, 1.0],
            vec![3.0, 1.0, 1.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(dm.nearest_unvisited(0, &[true, false, false, false]), Some((2, 3.0)));
    }

    #[test]
    fn test_nearest_unvisited_falls_back_to_infinite() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, f64::INFINITY],
            vec![f64::INFINITY, 0.0],
        ])
        .expect("valid");
        let (next, d) = dm.nearest_unvisited(0, &[true, false]).expect("one left");
        assert_eq!(next, 1);
        assert!(d.is_infinite());
    }

    #[test]
    fn test_path_cost() {
        let dm = DistanceMatrix::from_waypoints(&sample_waypoints()).expect("located");
        assert!((dm.path_cost(&[0, 1, 2, 0]) - 18.0).abs() < 1e-10);
        assert_eq!(dm.path_cost(&[0]), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}
