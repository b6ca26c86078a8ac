//! `<geometry>` shapes.

use tracing::debug;
use urdf_math::Vec3;
use urdf_model::paths::base_filename;
use urdf_model::{Geometry, MeshFileType, MeshGeometry};

use super::primitives::{parse_floats, vec3_or_default};
use super::{ElementExt, ParseContext};
use crate::document::Element;
use crate::error::{ParseWarning, Result, UrdfError};

/// Parse the shape inside a `<geometry>` element.
///
/// Lengths are multiplied by the context's scaling factor; plane normals are not.
/// Radii and lengths must be finite and non-negative.
pub fn parse_geometry(geometry: &Element, ctx: &mut ParseContext) -> Result<Geometry> {
    let shape = geometry
        .first_child()
        .ok_or_else(|| UrdfError::missing_element("shape", "<geometry>"))?;
    let s = ctx.scaling;

    let parsed = match shape.name.as_str() {
        "sphere" => Geometry::Sphere {
            radius: shape.required_non_negative("radius")? * s,
        },
        "box" => {
            shape.required_attr("size")?;
            let size = vec3_or_default(shape, "size", Vec3::new(1.0, 1.0, 1.0), ctx);
            Geometry::Box { size: size * s }
        }
        "cylinder" => Geometry::Cylinder {
            radius: shape.required_non_negative("radius")? * s,
            length: shape.required_non_negative("length")? * s,
        },
        "capsule" => Geometry::Capsule {
            radius: shape.required_non_negative("radius")? * s,
            length: shape.required_non_negative("length")? * s,
        },
        "plane" => {
            shape.required_attr("normal")?;
            let normal = vec3_or_default(shape, "normal", Vec3::z(), ctx);
            Geometry::Plane { normal }
        }
        "mesh" => Geometry::Mesh(parse_mesh(shape, ctx)?),
        "cdf" => Geometry::SignedDistanceField(parse_mesh(shape, ctx)?),
        other => return Err(UrdfError::UnknownGeometryType(other.to_string())),
    };

    debug!(kind = parsed.kind_name(), "parsed geometry");
    Ok(parsed)
}

fn parse_mesh(shape: &Element, ctx: &mut ParseContext) -> Result<MeshGeometry> {
    let filename = shape.required_attr("filename")?;
    let file_type = MeshFileType::from_filename(filename);
    if !file_type.is_known() {
        return Err(UrdfError::UnknownMeshType(filename.to_string()));
    }

    let mut mesh = MeshGeometry::new(filename, base_filename(filename), file_type);
    if let Some(raw) = shape.attr("scale") {
        match parse_floats(raw).as_deref() {
            Some([x, y, z]) => mesh.scale = Vec3::new(*x, *y, *z),
            Some([k]) => {
                ctx.warn(ParseWarning::ScalarMeshScale {
                    filename: filename.to_string(),
                    value: raw.to_string(),
                });
                mesh.scale = Vec3::new(*k, *k, *k);
            }
            _ => ctx.warn(ParseWarning::MalformedVector {
                attribute: "scale",
                element: shape.name.clone(),
                value: raw.to_string(),
            }),
        }
    }
    mesh.scale *= ctx.scaling;
    Ok(mesh)
}
