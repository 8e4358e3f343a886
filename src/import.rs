//! Turning a VMF document into meshes.
//!
//! The whole file is parsed before any geometry is built, so a syntax fault never
//! leaves a partial import behind. Only `world` blocks contribute geometry; the
//! other top-level blocks are read and ignored.

use crate::brush::{self, Brush};
use crate::errors::ImportError;
use crate::float_types::Real;
use crate::mesh::{MeshBuilder, WorldMesh};
use crate::vmf::{Block, BlockKind, parse_blocks};
use std::path::Path;

/// Unit conversion presets offered by the importer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScalePreset {
    /// One map unit per output unit.
    #[default]
    Default,
    /// Twelve map units per output unit (Counter-Strike: Global Offensive).
    CsGo,
    /// Fourteen map units per output unit (Team Fortress 2).
    Tf2,
    /// Any other ratio.
    Custom(Real),
}

impl ScalePreset {
    pub const fn scale(self) -> Real {
        match self {
            Self::Default => 1.0,
            Self::CsGo => 12.0,
            Self::Tf2 => 14.0,
            Self::Custom(scale) => scale,
        }
    }
}

/// Settings for [`import_str`] and [`import_file`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportOptions {
    /// Every output coordinate is divided by this. Must be finite and positive.
    pub scale: Real,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl ImportOptions {
    pub const fn with_scale(scale: Real) -> Self {
        Self { scale }
    }

    pub const fn from_preset(preset: ScalePreset) -> Self {
        Self {
            scale: preset.scale(),
        }
    }

    pub fn validate(&self) -> Result<(), ImportError> {
        if self.scale.is_finite() && self.scale > 0.0 {
            Ok(())
        } else {
            Err(ImportError::InvalidScale(self.scale))
        }
    }
}

/// The geometry of one imported file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Level {
    /// One entry per `world` block, in file order. Well-formed maps have exactly one.
    pub worlds: Vec<WorldMesh>,
}

impl Level {
    pub fn brush_count(&self) -> usize {
        self.worlds.iter().map(WorldMesh::brush_count).sum()
    }

    pub fn face_count(&self) -> usize {
        self.worlds.iter().map(WorldMesh::face_count).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.worlds.iter().map(WorldMesh::vertex_count).sum()
    }

    /// Weld every brush of every world on its own.
    pub fn weld(&mut self, tolerance: Real) {
        self.worlds.iter_mut().for_each(|world| world.weld(tolerance));
    }
}

/// Read and import the file at `path`.
pub fn import_file(path: impl AsRef<Path>, options: &ImportOptions) -> Result<Level, ImportError> {
    let path = path.as_ref();
    options.validate()?;

    let source = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    import_str(&source, &path.display().to_string(), options)
}

/// Import VMF text. `filename` is only used in diagnostics.
pub fn import_str(source: &str, filename: &str, options: &ImportOptions) -> Result<Level, ImportError> {
    options.validate()?;
    log::debug!("Parsing VMF file '{filename}'");

    let blocks = parse_blocks(source).map_err(|error| ImportError::syntax(error, filename))?;

    let mut level = Level::default();
    for block in &blocks {
        log::debug!("Parsing '{}' block", block.name);
        match block.kind() {
            BlockKind::World => level.worlds.push(build_world(block, options)),
            BlockKind::VersionInfo
            | BlockKind::VisGroups
            | BlockKind::ViewSettings
            | BlockKind::Entity
            | BlockKind::Hidden
            | BlockKind::Cameras
            | BlockKind::Cordon
            | BlockKind::Editor => {},
            BlockKind::Solid | BlockKind::Side | BlockKind::Unknown => {
                log::warn!("Ignoring unknown top-level block '{}'", block.name);
            },
        }
    }

    Ok(level)
}

/// Reconstruct every `solid` of a `world` block.
///
/// A solid whose planes cannot be read is skipped with a warning; the rest of the
/// world is still imported.
pub fn build_world(world: &Block, options: &ImportOptions) -> WorldMesh {
    let mut brushes = Vec::new();
    for child in &world.children {
        match child.kind() {
            BlockKind::Solid => match Brush::from_solid(child) {
                Ok(brush) => brushes.push(brush),
                Err(error) => log::warn!(
                    "Skipping solid {}: {error}",
                    child.property("id").unwrap_or("?")
                ),
            },
            _ => log::warn!("Ignoring unknown world block '{}'", child.name),
        }
    }

    let mut builder = MeshBuilder::new(options.scale);
    for faces in brush::reconstruct_all(&brushes) {
        builder.add_brush(&faces);
    }
    builder.finish()
}
