//! Export of imported geometry to mesh file formats.

#[cfg(feature = "stl-io")]
pub mod stl;

use std::path::Path;

/// Generic I/O and format‑conversion errors.
///
/// Export formats are behind cargo feature‑flags.
/// When a feature is disabled the corresponding format reports
/// [`IoError::Unsupported`].
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    Unsupported(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            Unsupported(msg) => write!(f, "Unsupported output format: {msg}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            IoError::Unsupported(_) => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

/// Output formats, picked from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    StlBinary,
    StlAscii,
}

impl Format {
    /// `.stl` maps to binary STL unless `ascii` is set.
    pub fn from_path(path: &Path, ascii: bool) -> Result<Self, IoError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("stl") if ascii => Ok(Format::StlAscii),
            Some("stl") => Ok(Format::StlBinary),
            Some(other) => Err(IoError::Unsupported(format!(".{other}"))),
            None => Err(IoError::Unsupported(path.display().to_string())),
        }
    }
}

/// Write `shape` to `path` in `format`.
#[cfg(feature = "stl-io")]
pub fn save<T: crate::triangulated::Triangulated3D>(
    shape: &T,
    name: &str,
    path: &Path,
    format: Format,
) -> Result<(), IoError> {
    let bytes = match format {
        Format::StlAscii => stl::to_stl_ascii(shape, name).into_bytes(),
        Format::StlBinary => stl::to_stl_binary(shape, name)?,
    };
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Write `shape` to `path` in `format`.
#[cfg(not(feature = "stl-io"))]
pub fn save<T: crate::triangulated::Triangulated3D>(
    _shape: &T,
    _name: &str,
    _path: &Path,
    format: Format,
) -> Result<(), IoError> {
    Err(IoError::Unsupported(format!(
        "{format:?} (built without the stl-io feature)"
    )))
}
