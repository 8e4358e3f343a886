use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use vmf_mesh::{Brush, MeshBuilder, Plane, Polygon, float_types::Real};

mod support;

use crate::support::{approx_eq, box_planes};

#[test]
fn plane_from_triangle() {
    let plane = Plane::from_points(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    )
    .unwrap();
    // points listed counter-clockwise from +Z are clockwise from -Z, which is outside
    assert_relative_eq!(plane.normal, -Vector3::z());
    assert_relative_eq!(plane.distance, 0.0);
}

#[test]
fn cube_reconstruction() {
    let brush = Brush::from_planes(box_planes(1.0));
    let faces = brush.faces();

    assert_eq!(faces.len(), 6);
    assert!(faces.iter().all(|f| f.len() == 4));
    assert_eq!(faces.iter().map(Polygon::len).sum::<usize>(), 24);

    for (face, plane) in faces.iter().zip(&brush.planes) {
        for v in &face.vertices {
            assert!(approx_eq(plane.signed_distance(v), 0.0, 1e-6));
            for c in v.iter() {
                assert!(approx_eq(c.abs(), 1.0, 1e-6), "{v} is not a cube corner");
            }
        }
    }

    let mut builder = MeshBuilder::new(1.0);
    builder.add_brush(&faces);
    let mut world = builder.finish();
    assert_eq!(world.vertex_count(), 24);

    world.weld(1e-4);
    assert_eq!(world.vertex_count(), 8);
    assert_eq!(world.face_count(), 6);
    for corner in &world.brushes[0].vertices {
        for c in corner.iter() {
            assert_relative_eq!(c.abs(), 1.0, epsilon = 1e-6);
        }
    }
}

#[test]
fn reconstructed_faces_wind_clockwise_from_outside() {
    let brush = Brush::from_planes(box_planes(2.0));
    for (face, plane) in brush.faces().iter().zip(&brush.planes) {
        assert_relative_eq!(face.normal(), -plane.normal, epsilon = 1e-6);
    }
}

#[test]
fn plane_order_does_not_change_the_faces() {
    let mut planes = box_planes(1.0);
    let forward = Brush::from_planes(planes.clone()).faces();
    planes.reverse();
    let backward = Brush::from_planes(planes).faces();

    for (a, b) in forward.iter().zip(backward.iter().rev()) {
        let ca = a.centroid().unwrap();
        let cb = b.centroid().unwrap();
        assert_relative_eq!(ca, cb, epsilon = 1e-6);
        assert_eq!(a.len(), b.len());
    }
}

#[test]
fn wedge_has_two_triangles_and_three_quads() {
    // a right-angled ramp: the box [0,1]^3 cut by the plane x + z = 1
    let brush = Brush::from_planes(vec![
        Plane::from_normal(-Vector3::x(), 0.0),
        Plane::from_normal(Vector3::y(), 1.0),
        Plane::from_normal(-Vector3::y(), 0.0),
        Plane::from_normal(-Vector3::z(), 0.0),
        Plane::from_normal(Vector3::new(1.0, 0.0, 1.0), (0.5 as Real).sqrt()),
    ]);
    let faces = brush.faces();
    assert_eq!(faces.len(), 5);

    let mut sizes: Vec<usize> = faces.iter().map(Polygon::len).collect();
    sizes.sort();
    assert_eq!(sizes, vec![3, 3, 4, 4, 4]);

    let mut builder = MeshBuilder::new(1.0);
    builder.add_brush(&faces);
    let mut world = builder.finish();
    world.weld(1e-4);
    assert_eq!(world.vertex_count(), 6);
}

#[test]
fn two_parallel_planes_give_no_faces() {
    let brush = Brush::from_planes(vec![
        Plane::from_normal(Vector3::z(), 1.0),
        Plane::from_normal(-Vector3::z(), 1.0),
    ]);
    let polygons = brush.polygons();
    assert_eq!(polygons.len(), 2);
    assert!(polygons.iter().all(Polygon::is_empty));
    assert!(brush.faces().is_empty());

    let mut builder = MeshBuilder::new(1.0);
    builder.add_brush(&brush.faces());
    assert!(builder.finish().is_empty());
}

#[test]
fn empty_intersection_gives_no_faces() {
    // x <= -1 and x >= 1 cannot both hold
    let mut planes = box_planes(1.0);
    planes[0] = Plane::from_normal(Vector3::x(), -1.0);
    planes[1] = Plane::from_normal(-Vector3::x(), -1.0);
    let brush = Brush::from_planes(planes);
    assert!(brush.faces().is_empty());
}

#[test]
fn single_plane_and_no_planes() {
    assert!(Brush::from_planes(vec![Plane::from_normal(Vector3::x(), 3.0)]).faces().is_empty());
    assert!(Brush::default().polygons().is_empty());
}

#[test]
fn clip_by_plane_through_own_edge() {
    let triangle = Polygon::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    ]);
    // the plane y = 0 contains the first edge; the triangle lies on its inside
    let clipped = triangle.clip(&Plane::from_normal(-Vector3::y(), 0.0));
    assert_eq!(clipped.len(), 3);
    // same corners in the same cyclic order, possibly starting elsewhere
    let doubled = [clipped.vertices.clone(), clipped.vertices.clone()].concat();
    assert!(doubled.windows(3).any(|w| w == triangle.vertices.as_slice()));
}

#[test]
fn large_coordinates_stay_precise() {
    let brush = Brush::from_planes(vec![
        Plane::from_normal(Vector3::x(), 16384.0),
        Plane::from_normal(-Vector3::x(), -16000.0),
        Plane::from_normal(Vector3::y(), -15000.0),
        Plane::from_normal(-Vector3::y(), 15500.0),
        Plane::from_normal(Vector3::z(), 64.0),
        Plane::from_normal(-Vector3::z(), 0.0),
    ]);
    let faces = brush.faces();
    assert_eq!(faces.len(), 6);
    for v in faces.iter().flat_map(|f| &f.vertices) {
        assert!(approx_eq(v.x, 16384.0, 1e-6) || approx_eq(v.x, 16000.0, 1e-6));
        assert!(approx_eq(v.y, -15000.0, 1e-6) || approx_eq(v.y, -15500.0, 1e-6));
        assert!(approx_eq(v.z, 64.0, 1e-6) || approx_eq(v.z, 0.0, 1e-6));
    }
}
