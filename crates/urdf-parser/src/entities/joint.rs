//! `<joint>` elements. Fields only; links are referenced by name.

use tracing::debug;
use urdf_model::{Joint, JointLimits, JointType};

use super::primitives::{parse_origin, vec3_or_default};
use super::{ElementExt, ParseContext};
use crate::document::Element;
use crate::error::{Result, UrdfError};

/// Parse a `<joint>` element. Failures carry the joint's name.
pub fn parse_joint(element: &Element, ctx: &mut ParseContext) -> Result<Joint> {
    let name = element
        .attr("name")
        .ok_or(UrdfError::MissingName { element: "joint" })?;
    parse_joint_body(element, name, ctx).map_err(|e| e.in_joint(name))
}

fn parse_joint_body(element: &Element, name: &str, ctx: &mut ParseContext) -> Result<Joint> {
    let tag = element.required_attr("type")?;
    let joint_type = JointType::from_tag(tag).ok_or_else(|| UrdfError::UnknownJointType(tag.to_string()))?;
    let parent = element.required_child("parent")?.required_attr("link")?;
    let child = element.required_child("child")?.required_attr("link")?;

    let mut joint = Joint::new(name, joint_type, parent, child);
    joint.origin = parse_origin(element, ctx);

    if let Some(axis) = element.child("axis") {
        let xyz = vec3_or_default(axis, "xyz", Joint::default_axis(), ctx);
        joint.axis = xyz.try_normalize(1e-12).unwrap_or_else(Joint::default_axis);
    }

    if let Some(limit) = element.child("limit") {
        let defaults = JointLimits::default();
        joint.limits = JointLimits {
            lower: limit.optional_f64("lower", defaults.lower, ctx),
            upper: limit.optional_f64("upper", defaults.upper, ctx),
            effort: limit.optional_f64("effort", defaults.effort, ctx),
            velocity: limit.optional_f64("velocity", defaults.velocity, ctx),
        };
    }

    if let Some(dynamics) = element.child("dynamics") {
        joint.damping = dynamics.optional_f64("damping", 0.0, ctx);
        joint.friction = dynamics.optional_f64("friction", 0.0, ctx);
    }

    debug!(joint = name, kind = joint_type.as_str(), parent, child, "parsed joint");
    Ok(joint)
}
