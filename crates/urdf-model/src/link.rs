//! Links and their inertial data.

use serde::{Deserialize, Serialize};
use urdf_math::Transform;

use crate::shape::{Collision, Visual};

/// Link index before a consumer assigns one.
pub const LINK_INDEX_UNASSIGNED: i32 = -2;

/// Mass properties of a link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inertia {
    /// Inertial frame relative to the link frame.
    pub origin: Transform,
    /// Mass.
    pub mass: f64,
    /// Moment of inertia about X.
    pub ixx: f64,
    /// Product of inertia XY.
    pub ixy: f64,
    /// Product of inertia XZ.
    pub ixz: f64,
    /// Moment of inertia about Y.
    pub iyy: f64,
    /// Product of inertia YZ.
    pub iyz: f64,
    /// Moment of inertia about Z.
    pub izz: f64,
}

impl Inertia {
    /// All-zero inertia (static body).
    pub fn zero() -> Self {
        Self {
            origin: Transform::identity(),
            mass: 0.0,
            ixx: 0.0,
            ixy: 0.0,
            ixz: 0.0,
            iyy: 0.0,
            iyz: 0.0,
            izz: 0.0,
        }
    }

    /// Diagonal tensor with the off-diagonal terms at zero.
    pub fn diagonal(mass: f64, ixx: f64, iyy: f64, izz: f64) -> Self {
        Self {
            mass,
            ixx,
            iyy,
            izz,
            ..Self::zero()
        }
    }

    /// Stand-in for links without an `<inertial>` block: unit mass, unit diagonal.
    pub fn placeholder() -> Self {
        Self::diagonal(1.0, 1.0, 1.0, 1.0)
    }

    /// Zero mass and all six tensor components. The frame is kept.
    pub fn make_static(&mut self) {
        let origin = self.origin;
        *self = Self { origin, ..Self::zero() };
    }

    /// Tensor components as `[ixx, ixy, ixz, iyy, iyz, izz]`.
    pub fn tensor(&self) -> [f64; 6] {
        [self.ixx, self.ixy, self.ixz, self.iyy, self.iyz, self.izz]
    }
}

impl Default for Inertia {
    fn default() -> Self {
        Self::zero()
    }
}

/// A rigid body of the kinematic tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Link name, unique within its model.
    pub name: String,
    /// Mass properties.
    pub inertia: Inertia,
    /// Visual elements in document order.
    pub visuals: Vec<Visual>,
    /// Collision elements in document order.
    pub collisions: Vec<Collision>,
    /// Index assigned by a consumer; [`LINK_INDEX_UNASSIGNED`] until then.
    pub link_index: i32,
    /// Parent link, filled in by a tree-linkage step.
    pub parent_link: Option<String>,
    /// Joint connecting this link to its parent, filled in by a tree-linkage step.
    pub parent_joint: Option<String>,
}

impl Link {
    /// Empty link with zero inertia.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inertia: Inertia::zero(),
            visuals: Vec::new(),
            collisions: Vec::new(),
            link_index: LINK_INDEX_UNASSIGNED,
            parent_link: None,
            parent_joint: None,
        }
    }
}
