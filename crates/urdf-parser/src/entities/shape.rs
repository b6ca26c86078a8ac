//! `<visual>` and `<collision>` elements.

use urdf_model::{Collision, CollisionFlags, Shape, Visual};

use super::geometry::parse_geometry;
use super::material::{defines_material, parse_material};
use super::primitives::parse_origin;
use super::{ElementExt, ParseContext};
use crate::document::Element;
use crate::error::{ParseWarning, Result, UrdfError};

/// Origin, geometry and name shared by visuals and collisions.
fn parse_shape(element: &Element, ctx: &mut ParseContext) -> Result<Shape> {
    let geometry_el = element.required_child("geometry")?;
    let geometry = parse_geometry(geometry_el, ctx)?;

    let source_file_location = geometry_el
        .first_child()
        .filter(|shape| shape.name == "mesh")
        .and_then(|shape| shape.attr("filename"))
        .map(|filename| format!("{}{}", ctx.base_path, filename));

    Ok(Shape {
        name: element.attr("name").map(str::to_string),
        source_file_location,
        origin: parse_origin(element, ctx),
        geometry,
    })
}

/// Parse a `<visual>` element.
///
/// A `<material>` child must be named. When it also defines texture, color
/// or specular, it becomes the visual's local material; registering it in
/// the model is up to the caller.
pub fn parse_visual(element: &Element, ctx: &mut ParseContext) -> Result<Visual> {
    let mut visual = Visual::new(parse_shape(element, ctx)?);

    if let Some(material) = element.child("material") {
        let name = material
            .attr("name")
            .ok_or(UrdfError::MissingName { element: "material" })?;
        visual.material_name = name.to_string();
        if defines_material(material) {
            visual.local_material = Some(parse_material(material, ctx)?);
        }
    }

    Ok(visual)
}

/// Parse a `<collision>` element with its filter and concavity attributes.
pub fn parse_collision(element: &Element, ctx: &mut ParseContext) -> Result<Collision> {
    let mut collision = Collision::new(parse_shape(element, ctx)?);

    if let Some(group) = collision_filter(element, "group", ctx) {
        collision.set_group(group);
    }
    if let Some(mask) = collision_filter(element, "mask", ctx) {
        collision.set_mask(mask);
    }
    if element
        .attr("concave")
        .is_some_and(|v| v != "false" && v != "0")
    {
        collision.flags.insert(CollisionFlags::FORCE_CONCAVE_TRIMESH);
    }

    Ok(collision)
}

fn collision_filter(element: &Element, attribute: &'static str, ctx: &mut ParseContext) -> Option<i32> {
    let raw = element.attr(attribute)?;
    match raw.trim().parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            ctx.warn(ParseWarning::MalformedCollisionFilter {
                attribute,
                value: raw.to_string(),
            });
            None
        }
    }
}
