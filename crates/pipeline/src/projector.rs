//! Isometric projection of an altitude grid
//!
//! Converts a `HeightGrid` into a mesh of 3D points via three composed
//! transforms: a lift into isometric axes (which flips the row axis and
//! rescales altitude into the depth channel), a fixed 45°-family shear, and
//! a vertical re-application of the raw depth.

use ndarray::Array2;
use wiremap_core::grid::HeightGrid;
use wiremap_core::point::Point3;
use wiremap_core::{Error, Result, Stage};

/// A grid-shaped array of projected points, same dimensions as the source
/// `HeightGrid`.
pub type Mesh = Array2<Point3>;

/// Parameters for projection
#[derive(Debug, Clone)]
pub struct ProjectParams {
    /// Divisor rescaling altitude into the depth channel. Must be > 0.
    pub smoothness: i32,
}

impl Default for ProjectParams {
    fn default() -> Self {
        Self { smoothness: 1 }
    }
}

/// Projection stage
#[derive(Debug, Clone, Default)]
pub struct Projector;

impl Stage for Projector {
    type Input = HeightGrid;
    type Output = Mesh;
    type Params = ProjectParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Projector"
    }

    fn description(&self) -> &'static str {
        "Project an altitude grid into skewed isometric mesh space"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        project(&input, params)
    }
}

/// Project a grid into isometric mesh space.
///
/// For the cell at row `y`, column `x`, altitude `a`:
///
/// 1. lift: `(x, (rows-1) - y, a / smoothness)` — row 0 becomes the
///    visually topmost row, altitude becomes depth
/// 2. shear: `x' = x - y`, `y' = 0.5x + 0.5y`, z untouched
/// 3. re-apply altitude: `y'' = y' + z`, with the original depth
///
/// `smoothness <= 0` fails with [`Error::InvalidParameter`].
pub fn project(grid: &HeightGrid, params: ProjectParams) -> Result<Mesh> {
    if params.smoothness <= 0 {
        return Err(Error::InvalidParameter {
            name: "smoothness",
            value: params.smoothness.to_string(),
            reason: "must be > 0".to_string(),
        });
    }

    let (rows, cols) = grid.shape();
    let smoothness = f64::from(params.smoothness);
    let max_row = (rows - 1) as f64;

    let mesh = Array2::from_shape_fn((rows, cols), |(row, col)| {
        let altitude = grid.data()[(row, col)];
        let lifted = Point3::new(
            col as f64,
            max_row - row as f64,
            f64::from(altitude) / smoothness,
        );
        reapply_altitude(shear(lifted))
    });

    Ok(mesh)
}

/// Fixed isometric skew: basis vectors (1, 0.5) and (-1, 0.5). This is the
/// only supported view angle.
fn shear(p: Point3) -> Point3 {
    Point3::new(p.x - p.y, 0.5 * p.x + 0.5 * p.y, p.z)
}

/// Lift the sheared point vertically by its depth.
fn reapply_altitude(p: Point3) -> Point3 {
    Point3::new(p.x, p.y + p.z, p.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_point(p: Point3, x: f64, y: f64, z: f64) {
        assert_relative_eq!(p.x, x);
        assert_relative_eq!(p.y, y);
        assert_relative_eq!(p.z, z);
    }

    #[test]
    fn project_two_by_two() {
        let grid = HeightGrid::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();
        let mesh = project(&grid, ProjectParams { smoothness: 1 }).unwrap();

        assert_eq!(mesh.dim(), (2, 2));
        assert_point(mesh[(0, 0)], -1.0, 0.5, 0.0);
        assert_point(mesh[(0, 1)], 0.0, 2.0, 1.0);
        assert_point(mesh[(1, 0)], 0.0, 2.0, 2.0);
        assert_point(mesh[(1, 1)], 1.0, 3.5, 3.0);
    }

    #[test]
    fn smoothness_divides_depth() {
        let grid = HeightGrid::from_rows(vec![vec![10]]).unwrap();
        let mesh = project(&grid, ProjectParams { smoothness: 4 }).unwrap();
        assert_relative_eq!(mesh[(0, 0)].z, 2.5);
    }

    #[test]
    fn negative_altitude_lowers_point() {
        let grid = HeightGrid::from_rows(vec![vec![-4]]).unwrap();
        let mesh = project(&grid, ProjectParams { smoothness: 1 }).unwrap();
        // single cell lifts to (0, 0, -4), shear keeps (0, 0), re-apply sinks y
        assert_point(mesh[(0, 0)], 0.0, -4.0, -4.0);
    }

    #[test]
    fn zero_smoothness_fails_fast() {
        let grid = HeightGrid::from_rows(vec![vec![1]]).unwrap();
        assert!(matches!(
            project(&grid, ProjectParams { smoothness: 0 }),
            Err(Error::InvalidParameter {
                name: "smoothness",
                ..
            })
        ));
    }

    #[test]
    fn mesh_shape_matches_grid() {
        let grid = HeightGrid::from_rows(vec![vec![0; 7]; 3]).unwrap();
        let mesh = project(&grid, ProjectParams::default()).unwrap();
        assert_eq!(mesh.dim(), (3, 7));
    }

    #[test]
    fn stage_trait_executes() {
        let grid = HeightGrid::from_rows(vec![vec![0, 1]]).unwrap();
        let mesh = Projector.execute_default(grid).unwrap();
        assert_eq!(mesh.dim(), (1, 2));
    }
}
