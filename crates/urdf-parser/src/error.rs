//! Error and warning types for robot description parsing.

use thiserror::Error;

/// Errors that abort a parse.
#[derive(Error, Debug)]
pub enum UrdfError {
    /// I/O error reading a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document text could not be tokenized.
    #[error("XML error: {0}")]
    Xml(String),

    /// Required child element is absent.
    #[error("Missing required element <{element}> in {context}")]
    MissingElement {
        /// The missing element tag.
        element: &'static str,
        /// Where the element was expected.
        context: String,
    },

    /// Required attribute is absent or empty.
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        /// The missing attribute name.
        attribute: &'static str,
        /// The element that should carry it.
        element: String,
    },

    /// An element that is identified by name has none.
    #[error("<{element}> must have a name attribute")]
    MissingName {
        /// The unnamed element tag.
        element: &'static str,
    },

    /// Required attribute is present but unusable.
    #[error("Invalid value for '{attribute}' on <{element}>: {message}")]
    InvalidAttribute {
        /// The attribute name.
        attribute: &'static str,
        /// The element carrying it.
        element: String,
        /// Why the value is rejected.
        message: String,
    },

    /// A vector attribute did not hold exactly three numbers.
    #[error("Malformed vector for '{attribute}' on <{element}>: '{value}' (expected 3 numbers)")]
    MalformedVector {
        /// The attribute name.
        attribute: &'static str,
        /// The element carrying it.
        element: String,
        /// The raw attribute value.
        value: String,
    },

    /// `<geometry>` child with an unrecognized tag.
    #[error("Unknown geometry type: {0}")]
    UnknownGeometryType(String),

    /// Mesh filename with an unrecognized extension.
    #[error("Unknown mesh file type: {0}")]
    UnknownMeshType(String),

    /// `<joint type>` with an unrecognized value.
    #[error("Unknown joint type: {0}")]
    UnknownJointType(String),

    /// `<inertia>` carrying neither the full tensor nor its diagonal.
    #[error("Inertia of link '{link}' must have ixx, ixy, ixz, iyy, iyz, izz (or ixx, iyy, izz)")]
    IncompleteInertia {
        /// The owning link.
        link: String,
    },

    /// Two links share a name.
    #[error("Link name is not unique: {0}")]
    DuplicateLink(String),

    /// Two joints share a name.
    #[error("Joint name is not unique: {0}")]
    DuplicateJoint(String),

    /// The document holds no link.
    #[error("No links found in robot description")]
    NoLinks,

    /// Parser configuration rejected before parsing.
    #[error("Invalid parser configuration: {0}")]
    InvalidConfig(String),

    /// Failure inside a link, with the link's name.
    #[error("Could not parse link '{link}': {source}")]
    Link {
        /// The owning link.
        link: String,
        /// The underlying failure.
        source: Box<UrdfError>,
    },

    /// Failure inside a joint, with the joint's name.
    #[error("Could not parse joint '{joint}': {source}")]
    Joint {
        /// The joint.
        joint: String,
        /// The underlying failure.
        source: Box<UrdfError>,
    },
}

/// Error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required part of the document is missing or inconsistent.
    Structural,
    /// A value is malformed; callers may substitute a default.
    MalformedValue,
    /// A tag or extension names a variant this parser does not know.
    UnknownVariant,
    /// The document could not be read or tokenized.
    Document,
}

impl UrdfError {
    /// Create a missing element error.
    pub fn missing_element(element: &'static str, context: impl Into<String>) -> Self {
        Self::MissingElement {
            element,
            context: context.into(),
        }
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(attribute: &'static str, element: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute,
            element: element.into(),
        }
    }

    /// Create an invalid attribute error.
    pub fn invalid_attribute(
        attribute: &'static str,
        element: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            attribute,
            element: element.into(),
            message: message.into(),
        }
    }

    /// Create a malformed vector error.
    pub fn malformed_vector(
        attribute: &'static str,
        element: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedVector {
            attribute,
            element: element.into(),
            value: value.into(),
        }
    }

    /// Attach the owning link.
    pub fn in_link(self, link: impl Into<String>) -> Self {
        Self::Link {
            link: link.into(),
            source: Box::new(self),
        }
    }

    /// Attach the owning joint.
    pub fn in_joint(self, joint: impl Into<String>) -> Self {
        Self::Joint {
            joint: joint.into(),
            source: Box::new(self),
        }
    }

    /// Category of this error. Context wrappers report their source's kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Xml(_) => ErrorKind::Document,
            Self::MalformedVector { .. } => ErrorKind::MalformedValue,
            Self::UnknownGeometryType(_) | Self::UnknownMeshType(_) | Self::UnknownJointType(_) => {
                ErrorKind::UnknownVariant
            }
            Self::Link { source, .. } | Self::Joint { source, .. } => source.kind(),
            Self::MissingElement { .. }
            | Self::MissingAttribute { .. }
            | Self::MissingName { .. }
            | Self::InvalidAttribute { .. }
            | Self::IncompleteInertia { .. }
            | Self::DuplicateLink(_)
            | Self::DuplicateJoint(_)
            | Self::NoLinks
            | Self::InvalidConfig(_) => ErrorKind::Structural,
        }
    }

    /// The innermost error, past any link/joint context.
    pub fn root_cause(&self) -> &UrdfError {
        match self {
            Self::Link { source, .. } | Self::Joint { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, UrdfError>;

/// Recoverable problems. The parse continues with a documented default.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseWarning {
    /// Vector attribute without three numbers; the default was kept.
    #[error("Malformed vector for '{attribute}' on <{element}>: '{value}', using default")]
    MalformedVector {
        /// The attribute name.
        attribute: &'static str,
        /// The element carrying it.
        element: String,
        /// The raw attribute value.
        value: String,
    },

    /// Optional numeric attribute that is not a number; the default was kept.
    #[error("Malformed number for '{attribute}' on <{element}>: '{value}', using default")]
    MalformedNumber {
        /// The attribute name.
        attribute: &'static str,
        /// The element carrying it.
        element: String,
        /// The raw attribute value.
        value: String,
    },

    /// Color attribute with the wrong number of components.
    #[error("Material '{material}' has malformed {attribute} '{value}', using default")]
    MalformedColor {
        /// The material name.
        material: String,
        /// `rgba` or `rgb`.
        attribute: &'static str,
        /// The raw attribute value.
        value: String,
    },

    /// Color component outside 0..=1; clamped.
    #[error("Material '{material}' has color components outside [0, 1]: '{value}', clamping")]
    ColorOutOfRange {
        /// The material name.
        material: String,
        /// The raw attribute value.
        value: String,
    },

    /// Mesh scale given as one number; broadcast to all axes.
    #[error("Mesh '{filename}' scale should be a vector3, not the single scalar '{value}'")]
    ScalarMeshScale {
        /// The mesh filename.
        filename: String,
        /// The raw attribute value.
        value: String,
    },

    /// Collision `group`/`mask` that is not an integer; ignored.
    #[error("Collision {attribute} '{value}' is not an integer, ignoring")]
    MalformedCollisionFilter {
        /// `group` or `mask`.
        attribute: &'static str,
        /// The raw attribute value.
        value: String,
    },

    /// A later top-level material reused a name; it was dropped.
    #[error("Duplicate material '{0}', keeping the first definition")]
    DuplicateMaterial(String),

    /// A visual's inline material took over the name of an existing material.
    /// Visuals resolved earlier keep the old definition.
    #[error("Inline material '{0}' shadows an earlier definition")]
    MaterialReplaced(String),

    /// Link without `<inertial>`; mass 1 and unit diagonal inertia were used.
    #[error("No inertial data for link '{0}', using mass=1 and unit diagonal inertia")]
    DefaultInertia(String),

    /// A visual references a material the model does not define.
    #[error("Link '{link}' references unknown material '{material}'")]
    UnresolvedMaterial {
        /// The owning link.
        link: String,
        /// The referenced material name.
        material: String,
    },

    /// Sensor parsing was requested but no handler is installed.
    #[error("{count} sensor element(s) skipped: no sensor handler installed")]
    SensorsSkipped {
        /// Number of `<sensor>` elements seen.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UrdfError::missing_element("geometry", "visual");
        assert!(err.to_string().contains("geometry"));
        assert!(err.to_string().contains("visual"));

        let err = UrdfError::missing_attribute("radius", "sphere");
        assert_eq!(err.to_string(), "Missing required attribute 'radius' on <sphere>");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(UrdfError::NoLinks.kind(), ErrorKind::Structural);
        assert_eq!(UrdfError::DuplicateLink("a".into()).kind(), ErrorKind::Structural);
        assert_eq!(
            UrdfError::UnknownGeometryType("torus".into()).kind(),
            ErrorKind::UnknownVariant
        );
        assert_eq!(
            UrdfError::malformed_vector("xyz", "origin", "1 2").kind(),
            ErrorKind::MalformedValue
        );
        assert_eq!(UrdfError::Xml("eof".into()).kind(), ErrorKind::Document);
    }

    #[test]
    fn test_link_context() {
        let err = UrdfError::UnknownGeometryType("torus".into()).in_link("arm");
        assert!(err.to_string().contains("arm"));
        assert!(err.to_string().contains("torus"));
        assert_eq!(err.kind(), ErrorKind::UnknownVariant);
        assert!(matches!(err.root_cause(), UrdfError::UnknownGeometryType(_)));
    }

    #[test]
    fn test_warning_display() {
        let w = ParseWarning::DuplicateMaterial("red".into());
        assert!(w.to_string().contains("red"));
        let w = ParseWarning::SensorsSkipped { count: 2 };
        assert!(w.to_string().starts_with('2'));
    }
}
