//! A trait for any shape which can be represented by triangles

use crate::float_types::Real;
use crate::import::Level;
use crate::mesh::{PolyMesh, WorldMesh};
use nalgebra::{Point3, Vector3};

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle with the unit normal of the face it came from.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut(Vector3<Real>, [Point3<Real>; 3]);
}

impl Triangulated3D for PolyMesh {
    /// Faces are convex, so each one is fanned from its first corner.
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut(Vector3<Real>, [Point3<Real>; 3]),
    {
        for polygon in self.polygons() {
            let normal = polygon.normal();
            let Some((&first, rest)) = polygon.vertices.split_first() else {
                continue;
            };
            for pair in rest.windows(2) {
                f(normal, [first, pair[0], pair[1]]);
            }
        }
    }
}

impl Triangulated3D for WorldMesh {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut(Vector3<Real>, [Point3<Real>; 3]),
    {
        for brush in &self.brushes {
            brush.visit_triangles(&mut f);
        }
    }
}

impl Triangulated3D for Level {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut(Vector3<Real>, [Point3<Real>; 3]),
    {
        for world in &self.worlds {
            world.visit_triangles(&mut f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::Polygon;

    #[test]
    fn quad_fans_into_two_triangles() {
        let mut mesh = PolyMesh::new();
        mesh.push_polygon(&Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]));

        let mut triangles = Vec::new();
        mesh.visit_triangles(|normal, tri| triangles.push((normal, tri)));
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].0, Vector3::z());
        assert_eq!(triangles[1].1[0], Point3::origin());
        assert_eq!(triangles[1].1[2], Point3::new(0.0, 1.0, 0.0));
    }
}
