//! Brush face planes in normal/distance form.

use crate::errors::PlaneError;
use crate::float_types::{HELPER_AXIS_THRESHOLD, Real};
use nalgebra::{Point3, Vector3};

/// An infinite plane: every point `p` on it satisfies `normal · p = distance`.
///
/// Inside a brush the solid lies on the side where `normal · p <= distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal, pointing out of the brush.
    pub normal: Vector3<Real>,
    /// Offset from the origin along `normal`.
    pub distance: Real,
}

impl Plane {
    /// Create a plane from a (not necessarily unit) normal and a distance.
    pub fn from_normal(normal: Vector3<Real>, distance: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            distance,
        }
    }

    /// Create a plane from the three points of a VMF `side`.
    ///
    /// The editor lists the points clockwise as seen from outside the brush, so the
    /// outward normal is `(p2 - p0) × (p1 - p0)`.
    pub fn from_points(
        p0: Point3<Real>,
        p1: Point3<Real>,
        p2: Point3<Real>,
    ) -> Result<Self, PlaneError> {
        let normal = (p2 - p0)
            .cross(&(p1 - p0))
            .try_normalize(Real::EPSILON)
            .ok_or(PlaneError::Degenerate)?;
        if !normal.iter().all(|c| c.is_finite()) {
            return Err(PlaneError::Degenerate);
        }

        let distance = p0.coords.dot(&normal);
        Ok(Plane { normal, distance })
    }

    /// Parse a `plane` property such as `"(0 0 64) (64 0 64) (64 -64 64)"`.
    pub fn parse(text: &str) -> Result<Self, PlaneError> {
        let [p0, p1, p2] = parse_points(text)?;
        Self::from_points(p0, p1, p2)
    }

    /// Signed distance of `point` from the plane, positive on the outside.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.distance
    }

    /// The point of the plane closest to the origin.
    pub fn anchor(&self) -> Point3<Real> {
        Point3::from(self.normal * self.distance)
    }

    /// Two unit vectors spanning the plane, `(right, forward)`.
    ///
    /// World Z is the helper axis unless the normal is within ~25° of it, in which
    /// case world X is used so the cross products stay well conditioned.
    pub fn basis(&self) -> (Vector3<Real>, Vector3<Real>) {
        let up = if self.normal.dot(&Vector3::z()).abs() > HELPER_AXIS_THRESHOLD {
            Vector3::x()
        } else {
            Vector3::z()
        };

        let right = self.normal.cross(&up).normalize();
        let forward = self.normal.cross(&right).normalize();
        (right, forward)
    }
}

/// Split `"(a b c) (d e f) (g h i)"` into three points.
fn parse_points(text: &str) -> Result<[Point3<Real>; 3], PlaneError> {
    let malformed = || PlaneError::Malformed(text.to_string());

    let mut points = Vec::with_capacity(3);
    let mut rest = text.trim();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('(').ok_or_else(malformed)?;
        let (group, tail) = inner.split_once(')').ok_or_else(malformed)?;

        let coords = group
            .split_whitespace()
            .map(|c| {
                c.parse::<Real>()
                    .map_err(|_| PlaneError::InvalidNumber(c.to_string()))
            })
            .collect::<Result<Vec<Real>, _>>()?;
        let &[x, y, z] = coords.as_slice() else {
            return Err(malformed());
        };
        points.push(Point3::new(x, y, z));

        rest = tail.trim_start();
    }

    <[Point3<Real>; 3]>::try_from(points).map_err(|_| malformed())
}
