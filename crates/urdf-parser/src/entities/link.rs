//! `<link>` elements and their `<inertial>` block.

use tracing::debug;
use urdf_model::{Inertia, Link};

use super::primitives::parse_origin;
use super::shape::{parse_collision, parse_visual};
use super::{ElementExt, ParseContext};
use crate::document::Element;
use crate::error::{ParseWarning, Result, UrdfError};

/// Name of the static reference link that needs no inertial data.
pub const WORLD_LINK: &str = "world";

const OFF_DIAGONAL: [&str; 3] = ["ixy", "ixz", "iyz"];
const DIAGONAL: [&str; 3] = ["ixx", "iyy", "izz"];

/// Parse an `<inertial>` block.
///
/// `<inertia>` must carry either all six tensor components or only the
/// diagonal; off-diagonal terms then default to zero.
pub fn parse_inertial(inertial: &Element, link: &str, ctx: &mut ParseContext) -> Result<Inertia> {
    let origin = parse_origin(inertial, ctx);
    let mass = inertial.required_child("mass")?.required_non_negative("value")?;
    let tensor = inertial.required_child("inertia")?;

    let has = |key: &str| tensor.attr(key).is_some();
    let has_diagonal = DIAGONAL.into_iter().all(|k| has(k));
    let off_diagonal = OFF_DIAGONAL.into_iter().filter(|&k| has(k)).count();
    if !has_diagonal || (off_diagonal != 0 && off_diagonal != OFF_DIAGONAL.len()) {
        return Err(UrdfError::IncompleteInertia {
            link: link.to_string(),
        });
    }

    let mut inertia = Inertia::diagonal(
        mass,
        tensor.required_f64("ixx")?,
        tensor.required_f64("iyy")?,
        tensor.required_f64("izz")?,
    );
    inertia.origin = origin;
    if off_diagonal != 0 {
        inertia.ixy = tensor.required_f64("ixy")?;
        inertia.ixz = tensor.required_f64("ixz")?;
        inertia.iyz = tensor.required_f64("iyz")?;
    }
    Ok(inertia)
}

/// Parse a `<link>` element.
///
/// Without `<inertial>`, the `world` link is static and every other link gets
/// unit mass and a unit diagonal tensor, with a warning. Failures inside the
/// link carry the link's name.
pub fn parse_link(element: &Element, ctx: &mut ParseContext) -> Result<Link> {
    let name = element
        .attr("name")
        .ok_or(UrdfError::MissingName { element: "link" })?;
    parse_link_body(element, name, ctx).map_err(|e| e.in_link(name))
}

fn parse_link_body(element: &Element, name: &str, ctx: &mut ParseContext) -> Result<Link> {
    let mut link = Link::new(name);

    link.inertia = match element.child("inertial") {
        Some(inertial) => parse_inertial(inertial, name, ctx)?,
        None if name == WORLD_LINK => Inertia::zero(),
        None => {
            ctx.warn(ParseWarning::DefaultInertia(name.to_string()));
            Inertia::placeholder()
        }
    };

    for visual in element.children_named("visual") {
        link.visuals.push(parse_visual(visual, ctx)?);
    }
    for collision in element.children_named("collision") {
        link.collisions.push(parse_collision(collision, ctx)?);
    }

    debug!(
        link = name,
        visuals = link.visuals.len(),
        collisions = link.collisions.len(),
        "parsed link"
    );
    Ok(link)
}
