//! Element parsers and attribute extraction utilities.
//!
//! Each submodule turns one kind of element into its model record. Parsers
//! return a fully populated record or an error; recoverable problems are
//! pushed onto the [`ParseContext`] as warnings and replaced by defaults.

pub mod geometry;
pub mod joint;
pub mod link;
pub mod material;
pub mod primitives;
pub mod shape;

pub use geometry::parse_geometry;
pub use joint::parse_joint;
pub use link::{parse_inertial, parse_link};
pub use material::parse_material;
pub use primitives::{parse_origin, parse_vec3};
pub use shape::{parse_collision, parse_visual};

use tracing::warn;

use crate::document::Element;
use crate::error::{ParseWarning, Result, UrdfError};

/// State shared by the element parsers during one document parse.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Factor applied to linear dimensions.
    pub scaling: f64,
    /// Directory of the document, prefixed to mesh filenames.
    pub base_path: String,
    /// Warnings raised so far.
    pub warnings: Vec<ParseWarning>,
}

impl ParseContext {
    /// Fresh context with no warnings.
    pub fn new(scaling: f64, base_path: impl Into<String>) -> Self {
        Self {
            scaling,
            base_path: base_path.into(),
            warnings: Vec::new(),
        }
    }

    /// Log a warning and keep it for the caller.
    pub fn warn(&mut self, warning: ParseWarning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new(1.0, "")
    }
}

/// Helper trait for extracting attribute values from elements.
///
/// An attribute holding the empty string counts as absent.
pub trait ElementExt {
    /// Non-empty attribute value.
    fn attr(&self, key: &str) -> Option<&str>;

    /// Get a required attribute.
    fn required_attr(&self, key: &'static str) -> Result<&str>;

    /// Get a required numeric attribute. `NaN` and infinities are rejected.
    fn required_f64(&self, key: &'static str) -> Result<f64>;

    /// Get a required numeric attribute that must not be negative.
    fn required_non_negative(&self, key: &'static str) -> Result<f64>;

    /// Get an optional numeric attribute, warning and keeping `default` when
    /// it is not a finite number.
    fn optional_f64(&self, key: &'static str, default: f64, ctx: &mut ParseContext) -> f64;

    /// Get a required child element.
    fn required_child(&self, name: &'static str) -> Result<&Element>;
}

impl ElementExt for Element {
    fn attr(&self, key: &str) -> Option<&str> {
        self.attribute(key).filter(|v| !v.is_empty())
    }

    fn required_attr(&self, key: &'static str) -> Result<&str> {
        self.attr(key)
            .ok_or_else(|| UrdfError::missing_attribute(key, self.name.as_str()))
    }

    fn required_f64(&self, key: &'static str) -> Result<f64> {
        let raw = self.required_attr(key)?;
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(UrdfError::invalid_attribute(
                key,
                self.name.as_str(),
                format!("'{raw}' is not a finite number"),
            )),
        }
    }

    fn required_non_negative(&self, key: &'static str) -> Result<f64> {
        let value = self.required_f64(key)?;
        if value < 0.0 {
            return Err(UrdfError::invalid_attribute(
                key,
                self.name.as_str(),
                format!("{value} is negative"),
            ));
        }
        Ok(value)
    }

    fn optional_f64(&self, key: &'static str, default: f64, ctx: &mut ParseContext) -> f64 {
        let Some(raw) = self.attr(key) else {
            return default;
        };
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                ctx.warn(ParseWarning::MalformedNumber {
                    attribute: key,
                    element: self.name.clone(),
                    value: raw.to_string(),
                });
                default
            }
        }
    }

    fn required_child(&self, name: &'static str) -> Result<&Element> {
        self.child(name)
            .ok_or_else(|| UrdfError::missing_element(name, format!("<{}>", self.name)))
    }
}
