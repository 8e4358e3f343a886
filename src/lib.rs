//! Import of **Valve Map Format** (`.vmf`) level geometry as polygon meshes.
//!
//! A VMF file is a tree of named blocks holding quoted key/value pairs. Level
//! geometry lives in `world` → `solid` → `side` blocks, and each side only stores
//! the plane it lies in. This crate parses the block tree, rebuilds every brush's
//! faces by clipping its planes against each other, and assembles the result into
//! indexed meshes.
//!
//! ```text
//! text ──▶ vmf::parse_blocks ──▶ Brush::from_solid ──▶ Brush::faces ──▶ MeshBuilder ──▶ WorldMesh
//! ```
//!
//! ```rust
//! use vmf_mesh::import::{import_str, ImportOptions};
//!
//! let source = r#"
//! world
//! {
//!     solid
//!     {
//!         side { "plane" "(-64 64 64) (64 64 64) (64 -64 64)" }
//!         side { "plane" "(-64 -64 -64) (64 -64 -64) (64 64 -64)" }
//!         side { "plane" "(-64 64 64) (-64 -64 64) (-64 -64 -64)" }
//!         side { "plane" "(64 64 -64) (64 -64 -64) (64 -64 64)" }
//!         side { "plane" "(64 64 64) (-64 64 64) (-64 64 -64)" }
//!         side { "plane" "(64 -64 -64) (-64 -64 -64) (-64 -64 64)" }
//!     }
//! }
//! "#;
//! let mut level = import_str(source, "box.vmf", &ImportOptions::default()).unwrap();
//! assert_eq!(level.face_count(), 6);
//! level.weld(1e-4);
//! assert_eq!(level.vertex_count(), 8);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to reconstruct the brushes of a world concurrently

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod brush;
pub mod errors;
pub mod float_types;
pub mod import;
pub mod io;
pub mod mesh;
pub mod triangulated;
pub mod vmf;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use brush::{Brush, Plane, Polygon};
pub use errors::{ImportError, ParseError, ParseErrorKind, PlaneError};
pub use import::{ImportOptions, Level, ScalePreset, import_file, import_str};
pub use mesh::{MeshBuilder, PolyMesh, WorldMesh};
pub use vmf::{Block, BlockKind, parse_blocks};
