//! Assembly of reconstructed brush faces into indexed meshes.
//!
//! Every brush of a `world` block becomes its own [`PolyMesh`], so welding never
//! merges vertices across unrelated brushes.

use crate::brush::Polygon;
use crate::float_types::Real;
use nalgebra::Point3;

pub mod weld;

/// An indexed polygon mesh: a vertex pool and faces listing vertex indices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyMesh {
    pub vertices: Vec<Point3<Real>>,
    pub faces: Vec<Vec<usize>>,
}

impl PolyMesh {
    pub const fn new() -> Self {
        PolyMesh {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Append `polygon` as a new face with its own copies of the vertices.
    pub fn push_polygon(&mut self, polygon: &Polygon) {
        let start = self.vertices.len();
        self.vertices.extend_from_slice(&polygon.vertices);
        self.faces.push((start..self.vertices.len()).collect());
    }

    /// Faces resolved back to point lists.
    pub fn polygons(&self) -> impl Iterator<Item = Polygon> + '_ {
        self.faces
            .iter()
            .map(|face| Polygon::new(face.iter().map(|&i| self.vertices[i]).collect()))
    }

    /// Reverse the winding of every face.
    pub fn reverse_winding(&mut self) {
        self.faces.iter_mut().for_each(|face| face.reverse());
    }

    /// Merge vertices closer than `tolerance`, drop vertices no face uses and faces
    /// that collapse to fewer than three corners.
    pub fn weld(&mut self, tolerance: Real) {
        let (welded, remap) = weld::weld_points(&self.vertices, tolerance);
        let before = self.faces.len();
        self.faces = self
            .faces
            .iter()
            .filter_map(|face| weld::remap_face(face, &remap))
            .collect();
        if self.faces.len() != before {
            log::debug!(
                "welding collapsed {} face(s)",
                before - self.faces.len()
            );
        }
        self.vertices = welded;
        self.compact();
    }

    /// Drop vertices that no face references, keeping the order of the rest.
    fn compact(&mut self) {
        let mut used = vec![false; self.vertices.len()];
        self.faces.iter().flatten().for_each(|&i| used[i] = true);
        if used.iter().all(|&u| u) {
            return;
        }

        let mut new_index = vec![usize::MAX; self.vertices.len()];
        let mut vertices = Vec::with_capacity(self.vertices.len());
        for (i, vertex) in self.vertices.iter().enumerate() {
            if used[i] {
                new_index[i] = vertices.len();
                vertices.push(*vertex);
            }
        }
        self.faces
            .iter_mut()
            .flatten()
            .for_each(|i| *i = new_index[*i]);
        self.vertices = vertices;
    }
}

/// All brushes of one `world` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldMesh {
    /// One mesh per brush that produced at least one face, in file order.
    pub brushes: Vec<PolyMesh>,
}

impl WorldMesh {
    pub fn brush_count(&self) -> usize {
        self.brushes.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.brushes.iter().map(|b| b.vertices.len()).sum()
    }

    pub fn face_count(&self) -> usize {
        self.brushes.iter().map(|b| b.faces.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }

    /// Weld each brush on its own.
    pub fn weld(&mut self, tolerance: Real) {
        self.brushes.iter_mut().for_each(|brush| brush.weld(tolerance));
    }

    /// Concatenate every brush into one mesh, offsetting face indices.
    pub fn merged(&self) -> PolyMesh {
        let mut merged = PolyMesh::new();
        for brush in &self.brushes {
            let offset = merged.vertices.len();
            merged.vertices.extend_from_slice(&brush.vertices);
            merged.faces.extend(
                brush
                    .faces
                    .iter()
                    .map(|face| face.iter().map(|i| i + offset).collect::<Vec<_>>()),
            );
        }
        merged
    }
}

/// Collects brush faces into a [`WorldMesh`].
///
/// Reconstructed faces follow the map format's clockwise-from-outside winding. The
/// builder divides every coordinate by the import scale and reverses all faces once
/// at [`finish`](MeshBuilder::finish), handing out counter-clockwise, outward-facing
/// polygons.
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    scale: Real,
    brushes: Vec<PolyMesh>,
}

impl MeshBuilder {
    /// `scale` must be positive; every output coordinate is divided by it.
    pub const fn new(scale: Real) -> Self {
        MeshBuilder {
            scale,
            brushes: Vec::new(),
        }
    }

    /// Add one brush. Faces with fewer than three vertices are skipped with a warning;
    /// a brush left with no faces is omitted.
    pub fn add_brush(&mut self, faces: &[Polygon]) {
        let mut mesh = PolyMesh::new();
        for (index, face) in faces.iter().enumerate() {
            if face.is_degenerate() {
                log::warn!(
                    "skipping face {index} of brush {}: only {} vertices",
                    self.brushes.len(),
                    face.len()
                );
                continue;
            }
            mesh.push_polygon(&face.scaled(self.scale));
        }

        if mesh.is_empty() {
            log::debug!("brush produced no faces");
            return;
        }
        self.brushes.push(mesh);
    }

    pub fn finish(mut self) -> WorldMesh {
        self.brushes.iter_mut().for_each(PolyMesh::reverse_winding);
        WorldMesh {
            brushes: self.brushes,
        }
    }
}
