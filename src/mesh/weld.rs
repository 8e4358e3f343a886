//! Merging of near-coincident vertices.
//!
//! Faces reconstructed from a brush each carry their own copy of every corner, so
//! a cube arrives as 24 vertices; welding brings it back to 8.

use crate::float_types::Real;
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};

/// A group of input vertices that collapsed into one output vertex.
#[derive(Debug, Clone)]
pub struct WeldCluster {
    /// First vertex seen; membership is tested against it so clusters do not drift.
    pub seed: Point3<Real>,
    sum: Vector3<Real>,
    /// Number of vertices merged into this cluster
    pub count: usize,
}

impl WeldCluster {
    fn new(seed: Point3<Real>) -> Self {
        WeldCluster {
            seed,
            sum: seed.coords,
            count: 1,
        }
    }

    fn absorb(&mut self, point: Point3<Real>) {
        self.sum += point.coords;
        self.count += 1;
    }

    /// Representative position: the centroid of all merged vertices.
    pub fn position(&self) -> Point3<Real> {
        Point3::from(self.sum / self.count as Real)
    }
}

type CellKey = (i64, i64, i64);

fn cell_of(point: &Point3<Real>, cell_size: Real) -> CellKey {
    (
        (point.x / cell_size).floor() as i64,
        (point.y / cell_size).floor() as i64,
        (point.z / cell_size).floor() as i64,
    )
}

/// Cluster `points` so that every point lies within `tolerance` of its cluster's seed.
///
/// Returns the welded positions and, for each input point, the index of the welded
/// position it maps to. Input order decides which point seeds a cluster, so the result
/// is deterministic.
pub fn weld_points(points: &[Point3<Real>], tolerance: Real) -> (Vec<Point3<Real>>, Vec<usize>) {
    let tolerance = tolerance.max(Real::EPSILON);
    let tolerance_sq = tolerance * tolerance;

    let mut clusters: Vec<WeldCluster> = Vec::new();
    let mut grid: HashMap<CellKey, Vec<usize>> = HashMap::new();
    let mut remap = Vec::with_capacity(points.len());

    for point in points {
        let (cx, cy, cz) = cell_of(point, tolerance);

        // a seed within `tolerance` is at most one cell away on each axis
        let mut found = None;
        'search: for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(candidates) = grid.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &candidate in candidates {
                        if (clusters[candidate].seed - *point).norm_squared() <= tolerance_sq {
                            found = Some(candidate);
                            break 'search;
                        }
                    }
                }
            }
        }

        let index = match found {
            Some(index) => {
                clusters[index].absorb(*point);
                index
            },
            None => {
                clusters.push(WeldCluster::new(*point));
                let index = clusters.len() - 1;
                grid.entry((cx, cy, cz)).or_default().push(index);
                index
            },
        };
        remap.push(index);
    }

    (clusters.iter().map(WeldCluster::position).collect(), remap)
}

/// Rewrite a face through `remap`, dropping repeated corners.
/// Returns `None` when fewer than three distinct corners remain.
pub fn remap_face(face: &[usize], remap: &[usize]) -> Option<Vec<usize>> {
    let mut welded: Vec<usize> = Vec::with_capacity(face.len());
    for &index in face {
        let mapped = remap[index];
        if welded.last() != Some(&mapped) {
            welded.push(mapped);
        }
    }
    while welded.len() > 1 && welded.first() == welded.last() {
        welded.pop();
    }

    if welded.len() < 3 {
        return None;
    }
    Some(welded)
}
