//! Joints as written in the document. No tree linkage is performed.

use serde::{Deserialize, Serialize};
use urdf_math::{Transform, Vec3};

/// Kind of motion a joint allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointType {
    /// Rotation about the axis, bounded by limits.
    Revolute,
    /// Unbounded rotation about the axis.
    Continuous,
    /// Translation along the axis.
    Prismatic,
    /// No motion.
    Fixed,
    /// Six degrees of freedom.
    Floating,
    /// Translation in the plane perpendicular to the axis.
    Planar,
    /// Ball joint (non-standard extension).
    Spherical,
}

impl JointType {
    /// Parse the `type` attribute value.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "revolute" => Some(Self::Revolute),
            "continuous" => Some(Self::Continuous),
            "prismatic" => Some(Self::Prismatic),
            "fixed" => Some(Self::Fixed),
            "floating" => Some(Self::Floating),
            "planar" => Some(Self::Planar),
            "spherical" => Some(Self::Spherical),
            _ => None,
        }
    }

    /// The attribute value for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Revolute => "revolute",
            Self::Continuous => "continuous",
            Self::Prismatic => "prismatic",
            Self::Fixed => "fixed",
            Self::Floating => "floating",
            Self::Planar => "planar",
            Self::Spherical => "spherical",
        }
    }
}

/// `<limit>` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointLimits {
    /// Lower position limit.
    pub lower: f64,
    /// Upper position limit. Below `lower` means unlimited.
    pub upper: f64,
    /// Maximum effort.
    pub effort: f64,
    /// Maximum velocity.
    pub velocity: f64,
}

impl JointLimits {
    /// Whether the position range is bounded.
    pub fn is_bounded(&self) -> bool {
        self.lower <= self.upper
    }
}

impl Default for JointLimits {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: -1.0,
            effort: 0.0,
            velocity: 0.0,
        }
    }
}

/// A named connector between two links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Joint name, unique within its model.
    pub name: String,
    /// Motion type.
    pub joint_type: JointType,
    /// Joint frame relative to the parent link frame.
    pub origin: Transform,
    /// Unit motion axis in the joint frame.
    pub axis: Vec3,
    /// Parent link name (not resolved).
    pub parent_link: String,
    /// Child link name (not resolved).
    pub child_link: String,
    /// Motion limits.
    pub limits: JointLimits,
    /// Viscous damping.
    pub damping: f64,
    /// Coulomb friction.
    pub friction: f64,
}

impl Joint {
    /// Axis used when no `<axis>` is given.
    pub fn default_axis() -> Vec3 {
        Vec3::x()
    }

    /// Joint with default origin, axis, limits and dynamics.
    pub fn new(
        name: impl Into<String>,
        joint_type: JointType,
        parent_link: impl Into<String>,
        child_link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            joint_type,
            origin: Transform::identity(),
            axis: Self::default_axis(),
            parent_link: parent_link.into(),
            child_link: child_link.into(),
            limits: JointLimits::default(),
            damping: 0.0,
            friction: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_type_tags() {
        for t in [
            JointType::Revolute,
            JointType::Continuous,
            JointType::Prismatic,
            JointType::Fixed,
            JointType::Floating,
            JointType::Planar,
            JointType::Spherical,
        ] {
            assert_eq!(JointType::from_tag(t.as_str()), Some(t));
        }
        assert_eq!(JointType::from_tag("Revolute"), None);
        assert_eq!(JointType::from_tag("hinge"), None);
    }

    #[test]
    fn test_default_limits_are_unbounded() {
        assert!(!JointLimits::default().is_bounded());
        let j = Joint::new("j", JointType::Fixed, "a", "b");
        assert_eq!(j.axis, Vec3::x());
        assert_eq!(j.damping, 0.0);
    }
}
