//! Test support library
//! Provides various helper functions & utilities for tests.

#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use vmf_mesh::{Plane, float_types::Real, mesh::PolyMesh};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The six planes bounding the axis-aligned box `[-h, h]^3`.
pub fn box_planes(h: Real) -> Vec<Plane> {
    vec![
        Plane::from_normal(Vector3::x(), h),
        Plane::from_normal(-Vector3::x(), h),
        Plane::from_normal(Vector3::y(), h),
        Plane::from_normal(-Vector3::y(), h),
        Plane::from_normal(Vector3::z(), h),
        Plane::from_normal(-Vector3::z(), h),
    ]
}

/// A `solid` block as Hammer writes an axis-aligned box from `min` to `max`.
pub fn box_solid(id: u32, min: [i32; 3], max: [i32; 3]) -> String {
    let [x0, y0, z0] = min;
    let [x1, y1, z1] = max;
    let sides = [
        format!("({x0} {y1} {z1}) ({x1} {y1} {z1}) ({x1} {y0} {z1})"),
        format!("({x0} {y0} {z0}) ({x1} {y0} {z0}) ({x1} {y1} {z0})"),
        format!("({x0} {y1} {z1}) ({x0} {y0} {z1}) ({x0} {y0} {z0})"),
        format!("({x1} {y1} {z0}) ({x1} {y0} {z0}) ({x1} {y0} {z1})"),
        format!("({x1} {y1} {z1}) ({x0} {y1} {z1}) ({x0} {y1} {z0})"),
        format!("({x1} {y0} {z0}) ({x0} {y0} {z0}) ({x0} {y0} {z1})"),
    ];

    let mut out = format!("\tsolid\n\t{{\n\t\t\"id\" \"{id}\"\n");
    for (i, plane) in sides.iter().enumerate() {
        out.push_str(&format!(
            "\t\tside\n\t\t{{\n\t\t\t\"id\" \"{}\"\n\t\t\t\"plane\" \"{plane}\"\n\t\t\t\"material\" \"DEV/DEV_MEASUREGENERIC01B\"\n\t\t}}\n",
            id * 10 + i as u32
        ));
    }
    out.push_str("\t\teditor\n\t\t{\n\t\t\t\"color\" \"0 175 108\"\n\t\t}\n\t}\n");
    out
}

/// A minimal map: version info, one world holding `solids`, and a player start.
pub fn map_with_solids(solids: &[String]) -> String {
    let mut out = String::from(
        "versioninfo\n{\n\t\"editorversion\" \"400\"\n\t\"mapversion\" \"1\"\n}\nvisgroups\n{\n}\nworld\n{\n\t\"id\" \"1\"\n\t\"classname\" \"worldspawn\"\n",
    );
    for solid in solids {
        out.push_str(solid);
    }
    out.push_str("}\nentity\n{\n\t\"id\" \"2\"\n\t\"classname\" \"info_player_start\"\n\t\"origin\" \"0 0 0\"\n}\ncameras\n{\n\t\"activecamera\" \"-1\"\n}\ncordon\n{\n\t\"active\" \"0\"\n}\n");
    out
}

/// Centroid of all vertices of a mesh.
pub fn mesh_centroid(mesh: &PolyMesh) -> Point3<Real> {
    let sum = mesh
        .vertices
        .iter()
        .fold(Vector3::zeros(), |acc, v| acc + v.coords);
    Point3::from(sum / mesh.vertices.len() as Real)
}
