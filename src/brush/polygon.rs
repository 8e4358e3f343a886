//! Convex face polygons and half-space clipping.

use crate::brush::plane::Plane;
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// An ordered, closed loop of coplanar points.
///
/// The winding is significant: it encodes which side of the face is the front.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<Point3<Real>>,
}

impl Polygon {
    pub const fn new(vertices: Vec<Point3<Real>>) -> Self {
        Polygon { vertices }
    }

    /// A polygon with no vertices, used for faces that did not survive clipping.
    pub const fn empty() -> Self {
        Polygon {
            vertices: Vec::new(),
        }
    }

    /// An oversized quad lying in `plane`, centered on its anchor, standing in for the
    /// unbounded plane.
    ///
    /// The corners run clockwise when seen from the side `plane.normal` points to.
    pub fn seed(plane: &Plane, extent: Real) -> Self {
        let (right, forward) = plane.basis();
        let center = plane.anchor();
        let right = right * extent;
        let forward = forward * extent;

        Polygon::new(vec![
            center + right + forward,
            center + right - forward,
            center - right - forward,
            center - right + forward,
        ])
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fewer than three vertices cannot bound an area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Keep the part of the polygon strictly behind `plane` (`signed_distance < 0`).
    ///
    /// Points exactly on the plane count as outside. Every face of a brush is cut with
    /// the same rule, so adjacent faces agree on shared edges. A result with fewer
    /// than three vertices is returned as [`Polygon::empty`].
    pub fn clip(&self, plane: &Plane) -> Polygon {
        if self.is_degenerate() {
            return Polygon::empty();
        }

        let n = self.vertices.len();
        let mut clipped = Vec::with_capacity(n + 1);

        for i in 0..n {
            let v0 = self.vertices[i];
            let v1 = self.vertices[(i + 1) % n];
            let d0 = plane.signed_distance(&v0);
            let d1 = plane.signed_distance(&v1);

            if d0 < 0.0 && d1 < 0.0 {
                clipped.push(v0);
            } else if d0 >= 0.0 && d1 >= 0.0 {
                continue;
            } else {
                let ratio = d0 / (d0 - d1);
                let intersection = v0 + (v1 - v0) * ratio;
                if d0 < 0.0 {
                    clipped.push(v0);
                }
                clipped.push(intersection);
            }
        }

        if clipped.len() < 3 {
            return Polygon::empty();
        }
        Polygon::new(clipped)
    }

    /// Reverse the winding in place.
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// Area-weighted normal by Newell's method; points to the side from which the
    /// vertices appear counter-clockwise. Zero for degenerate polygons.
    pub fn normal(&self) -> Vector3<Real> {
        let newell = self
            .vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .fold(Vector3::zeros(), |acc, (curr, next)| {
                acc + curr.coords.cross(&next.coords)
            });
        newell.try_normalize(Real::EPSILON).unwrap_or_else(Vector3::zeros)
    }

    /// Average of the vertices.
    pub fn centroid(&self) -> Option<Point3<Real>> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.coords);
        Some(Point3::from(sum / self.vertices.len() as Real))
    }

    /// Copy with every coordinate divided by `scale`.
    pub fn scaled(&self, scale: Real) -> Polygon {
        Polygon::new(self.vertices.iter().map(|v| *v / scale).collect())
    }
}
