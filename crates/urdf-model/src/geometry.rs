//! Geometry variants a visual or collision element may declare.

use serde::{Deserialize, Serialize};
use urdf_math::Vec3;

use crate::paths::MeshFileType;

/// A mesh file reference (also used for signed-distance-field files).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshGeometry {
    /// Filename exactly as written in the document.
    pub filename: String,
    /// Filename without directory and extension.
    pub base_name: String,
    /// File type resolved from the extension.
    pub file_type: MeshFileType,
    /// Per-axis scale, already multiplied by the model scaling factor.
    pub scale: Vec3,
}

impl MeshGeometry {
    /// Create a mesh reference with unit scale.
    pub fn new(filename: impl Into<String>, base_name: impl Into<String>, file_type: MeshFileType) -> Self {
        Self {
            filename: filename.into(),
            base_name: base_name.into(),
            file_type,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

/// Shape of a visual or collision element.
///
/// Exactly one variant is active; lengths are in document units multiplied
/// by the parser's scaling factor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Sphere centered at the shape origin.
    Sphere {
        /// Sphere radius.
        radius: f64,
    },
    /// Box centered at the shape origin.
    Box {
        /// Full extents along x, y and z.
        size: Vec3,
    },
    /// Cylinder along the local Z axis.
    Cylinder {
        /// Cylinder radius.
        radius: f64,
        /// Cylinder length.
        length: f64,
    },
    /// Capsule along the local Z axis (non-standard extension).
    Capsule {
        /// Capsule radius.
        radius: f64,
        /// Length of the cylindrical section.
        length: f64,
    },
    /// Infinite plane through the shape origin.
    Plane {
        /// Plane normal (not scaled).
        normal: Vec3,
    },
    /// Triangle mesh loaded from a file by a downstream collaborator.
    Mesh(MeshGeometry),
    /// Signed distance field loaded from a `.cdf` file (non-standard extension).
    SignedDistanceField(MeshGeometry),
    /// Placeholder for a shape that has not been parsed.
    #[default]
    Unknown,
}

impl Geometry {
    /// Lowercase tag name of the variant, as written in the document.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Sphere { .. } => "sphere",
            Geometry::Box { .. } => "box",
            Geometry::Cylinder { .. } => "cylinder",
            Geometry::Capsule { .. } => "capsule",
            Geometry::Plane { .. } => "plane",
            Geometry::Mesh(_) => "mesh",
            Geometry::SignedDistanceField(_) => "cdf",
            Geometry::Unknown => "unknown",
        }
    }

    /// The mesh file reference, for mesh and signed-distance-field shapes.
    pub fn mesh(&self) -> Option<&MeshGeometry> {
        match self {
            Geometry::Mesh(mesh) | Geometry::SignedDistanceField(mesh) => Some(mesh),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Geometry::default(), Geometry::Unknown);
        assert_eq!(Geometry::default().kind_name(), "unknown");
    }

    #[test]
    fn test_mesh_accessor() {
        let mesh = MeshGeometry::new("meshes/base.stl", "base", MeshFileType::Stl);
        let g = Geometry::SignedDistanceField(mesh.clone());
        assert_eq!(g.mesh(), Some(&mesh));
        assert_eq!(Geometry::Sphere { radius: 1.0 }.mesh(), None);
    }

    #[test]
    fn test_serde_tagged_enum() {
        let g = Geometry::Cylinder {
            radius: 0.5,
            length: 2.0,
        };
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains(r#""type":"Cylinder""#));

        let restored: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(g, restored);
    }
}
