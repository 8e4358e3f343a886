use crate::import::Level;
use crate::mesh::{PolyMesh, WorldMesh};
use crate::triangulated::Triangulated3D;
use std::io::Cursor;

/// Export to ASCII STL
/// Convert a triangulated shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use vmf_mesh::import::{import_str, ImportOptions};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let level = import_str("world { }", "empty.vmf", &ImportOptions::default())?;
/// let text = level.to_stl_ascii("empty");
/// assert!(text.starts_with("solid empty"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|n, tri| {
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for p in &tri {
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The name is not stored; binary STL headers are left blank.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|n, tri| {
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

/// Number of triangles a shape exports as.
pub fn triangle_count<T: Triangulated3D>(shape: &T) -> usize {
    let mut count = 0;
    shape.visit_triangles(|_, _| count += 1);
    count
}

macro_rules! impl_stl_export {
    ($($ty:ty),*) => {$(
        impl $ty {
            pub fn to_stl_ascii(&self, name: &str) -> String {
                self::to_stl_ascii(self, name)
            }
            pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
                self::to_stl_binary(self, name)
            }
        }
    )*};
}

impl_stl_export!(PolyMesh, WorldMesh, Level);
