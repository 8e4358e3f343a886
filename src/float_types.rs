// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Half-width of the quad a face starts from before it is clipped down to the brush.
///
/// Must exceed any coordinate a map can contain (Hammer's grid ends at ±16384)
/// while staying small enough that interpolated intersections keep their precision.
#[cfg(feature = "f64")]
pub const SEED_EXTENT: Real = 16_777_216.0; // 2^24
/// Half-width of the quad a face starts from before it is clipped down to the brush.
#[cfg(feature = "f32")]
pub const SEED_EXTENT: Real = 131_072.0; // 2^17

/// Threshold on `|normal · Z|` above which the world X axis is used as the helper axis
/// when building a plane's in-plane basis.
pub const HELPER_AXIS_THRESHOLD: Real = 0.9;

/// Lazily-initialized weld tolerance used across the crate.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `VMF_MESH_TOLERANCE` (e.g. `VMF_MESH_TOLERANCE=1e-3 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-3
    }
    #[cfg(feature = "f64")]
    {
        1e-4
    }
}

/// Returns the current weld tolerance.
/// If not set yet, it tries `VMF_MESH_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("VMF_MESH_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the weld tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `vmf_mesh::float_types::set_tolerance(1e-3);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}
