//! Path and file-type helpers for mesh references.
//!
//! Pure string functions shared by the parser and by downstream mesh loaders.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Mesh file format, detected from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeshFileType {
    /// `.dae`
    Collada,
    /// `.stl`
    Stl,
    /// `.obj`
    Obj,
    /// `.cdf`
    SignedDistanceField,
    /// `.vtk`
    Vtk,
    /// Anything else.
    #[default]
    Unknown,
}

impl MeshFileType {
    /// Classify a filename by its extension, ignoring case.
    ///
    /// Names too short to hold a dot and a three-letter extension, and
    /// unrecognized extensions, classify as [`MeshFileType::Unknown`] and are
    /// logged.
    pub fn from_filename(filename: &str) -> Self {
        if filename.chars().count() <= 4 {
            warn!(filename, "invalid mesh filename");
            return Self::Unknown;
        }

        let ext = match filename.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => {
                warn!(filename, "mesh filename has no extension");
                return Self::Unknown;
            }
        };

        match ext.as_str() {
            "dae" => Self::Collada,
            "stl" => Self::Stl,
            "obj" => Self::Obj,
            "cdf" => Self::SignedDistanceField,
            "vtk" => Self::Vtk,
            _ => {
                warn!(filename, extension = %ext, "unrecognized mesh filename extension");
                Self::Unknown
            }
        }
    }

    /// Whether the type is recognized.
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Directory part of a document URL or path, trailing separator included.
///
/// Returns an empty string when there is no separator.
pub fn base_path(url: &str) -> &str {
    match url.rfind(is_separator) {
        Some(idx) => &url[..=idx],
        None => "",
    }
}

/// Filename without directory and without its final extension.
pub fn base_filename(path: &str) -> &str {
    let name = match path.rfind(is_separator) {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}
