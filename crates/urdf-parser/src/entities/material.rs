//! `<material>` elements.

use urdf_model::Material;

use super::primitives::parse_floats;
use super::{ElementExt, ParseContext};
use crate::document::Element;
use crate::error::{ParseWarning, Result, UrdfError};

/// Parse a `<material>` element with its optional `<texture>`, `<color>` and
/// `<specular>` children.
///
/// Uniqueness of the name is the caller's concern.
pub fn parse_material(element: &Element, ctx: &mut ParseContext) -> Result<Material> {
    let name = element
        .attr("name")
        .ok_or(UrdfError::MissingName { element: "material" })?;
    let mut material = Material::new(name);

    if let Some(filename) = element.child("texture").and_then(|t| t.attr("filename")) {
        material.texture_filename = filename.to_string();
    }

    if let Some(raw) = element.child("color").and_then(|c| c.attr("rgba")) {
        match parse_floats(raw).as_deref() {
            Some(&[r, g, b, a]) => {
                let rgba = [r, g, b, a];
                if rgba.iter().any(|c| !(0.0..=1.0).contains(c)) {
                    ctx.warn(ParseWarning::ColorOutOfRange {
                        material: material.name.clone(),
                        value: raw.to_string(),
                    });
                }
                let [r, g, b, a] = rgba.map(|c| c.clamp(0.0, 1.0));
                material.color.rgb = [r, g, b];
                material.color.alpha = a;
            }
            _ => ctx.warn(ParseWarning::MalformedColor {
                material: material.name.clone(),
                attribute: "rgba",
                value: raw.to_string(),
            }),
        }
    }

    if let Some(raw) = element.child("specular").and_then(|s| s.attr("rgb")) {
        match parse_floats(raw).as_deref() {
            Some(&[r, g, b]) => material.color.specular = [r, g, b],
            _ => ctx.warn(ParseWarning::MalformedColor {
                material: material.name.clone(),
                attribute: "rgb",
                value: raw.to_string(),
            }),
        }
    }

    Ok(material)
}

/// Whether a `<material>` element defines the material inline rather than
/// only referencing it by name.
pub fn defines_material(element: &Element) -> bool {
    ["texture", "color", "specular"]
        .iter()
        .any(|tag| element.child(tag).is_some())
}
