//! Numeric vectors and `<origin>` transforms.

use urdf_math::{Transform, Vec3};

use super::{ElementExt, ParseContext};
use crate::document::Element;
use crate::error::{ParseWarning, Result, UrdfError};

/// Parse a whitespace-separated list of numbers.
///
/// Returns `None` if any token is not a finite number.
pub fn parse_floats(value: &str) -> Option<Vec<f64>> {
    value
        .split_whitespace()
        .map(|t| t.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

/// Parse exactly three numbers.
pub fn parse_vec3(value: &str, attribute: &'static str, element: &str) -> Result<Vec3> {
    match parse_floats(value).as_deref() {
        Some([x, y, z]) => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(UrdfError::malformed_vector(attribute, element, value)),
    }
}

/// Read a vector attribute, keeping `default` when it is absent.
///
/// A malformed value also keeps `default` and raises a warning.
pub fn vec3_or_default(element: &Element, attribute: &'static str, default: Vec3, ctx: &mut ParseContext) -> Vec3 {
    let Some(raw) = element.attr(attribute) else {
        return default;
    };
    match parse_vec3(raw, attribute, &element.name) {
        Ok(v) => v,
        Err(_) => {
            ctx.warn(ParseWarning::MalformedVector {
                attribute,
                element: element.name.clone(),
                value: raw.to_string(),
            });
            default
        }
    }
}

/// Transform of the `<origin>` child of `parent`, identity when there is none.
///
/// `xyz` and `rpy` default to zero independently.
pub fn parse_origin(parent: &Element, ctx: &mut ParseContext) -> Transform {
    match parent.child("origin") {
        Some(origin) => {
            let xyz = vec3_or_default(origin, "xyz", Vec3::zeros(), ctx);
            let rpy = vec3_or_default(origin, "rpy", Vec3::zeros(), ctx);
            Transform::from_xyz_rpy(xyz, rpy)
        }
        None => Transform::identity(),
    }
}
