//! Convex brushes and the reconstruction of their faces from bounding planes.
//!
//! A brush is only stored as the planes of its sides. Each face is recovered by
//! starting from a huge quad lying in the face's plane and clipping it by every
//! other plane of the brush; what survives is the face.

use crate::errors::PlaneError;
use crate::float_types::{Real, SEED_EXTENT};
use crate::vmf::Block;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod plane;
pub mod polygon;

pub use plane::Plane;
pub use polygon::Polygon;

/// A convex volume: the intersection of the half-spaces behind each of its planes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Brush {
    /// One plane per side, in declaration order.
    pub planes: Vec<Plane>,
}

impl Brush {
    pub const fn from_planes(planes: Vec<Plane>) -> Self {
        Brush { planes }
    }

    /// Extract the planes of a `solid` block's `side` children.
    ///
    /// Children that are not sides (`editor`, …) are skipped.
    pub fn from_solid(solid: &Block) -> Result<Self, PlaneError> {
        let planes = solid
            .children_named("side")
            .map(|side| side.property("plane").ok_or(PlaneError::Missing).and_then(Plane::parse))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Brush { planes })
    }

    /// The face lying in `planes[index]`, or an empty polygon when that plane does
    /// not bound the brush (redundant plane, empty or unbounded brush).
    pub fn face(&self, index: usize) -> Polygon {
        let plane = &self.planes[index];
        let mut polygon = Polygon::seed(plane, SEED_EXTENT);

        for (other_index, other) in self.planes.iter().enumerate() {
            if other_index == index || other == plane {
                continue;
            }
            polygon = polygon.clip(other);
            if polygon.is_degenerate() {
                log::trace!("plane {index} of brush clipped away");
                return Polygon::empty();
            }
        }

        if touches_seed_boundary(&polygon, plane) {
            log::trace!("plane {index} of brush is not bounded by its neighbours");
            return Polygon::empty();
        }
        polygon
    }

    /// One polygon per plane, in plane order. Planes that yield no face map to an
    /// empty polygon so indices stay aligned with [`Brush::planes`].
    pub fn polygons(&self) -> Vec<Polygon> {
        (0..self.planes.len()).map(|index| self.face(index)).collect()
    }

    /// Only the faces that survived clipping, in plane order.
    pub fn faces(&self) -> Vec<Polygon> {
        self.polygons()
            .into_iter()
            .filter(|polygon| !polygon.is_degenerate())
            .collect()
    }
}

/// Points left over from the seed quad sit at least `SEED_EXTENT` from the anchor;
/// real geometry never gets near half of that.
fn touches_seed_boundary(polygon: &Polygon, plane: &Plane) -> bool {
    let anchor = plane.anchor();
    let limit: Real = SEED_EXTENT * 0.5;
    polygon.vertices.iter().any(|v| (*v - anchor).norm() >= limit)
}

/// Reconstruct the faces of every brush, keeping the input order.
#[cfg(not(feature = "parallel"))]
pub fn reconstruct_all(brushes: &[Brush]) -> Vec<Vec<Polygon>> {
    brushes.iter().map(Brush::faces).collect()
}

/// Reconstruct the faces of every brush in parallel, keeping the input order.
#[cfg(feature = "parallel")]
pub fn reconstruct_all(brushes: &[Brush]) -> Vec<Vec<Polygon>> {
    brushes.par_iter().map(Brush::faces).collect()
}
