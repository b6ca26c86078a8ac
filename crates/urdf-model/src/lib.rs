#![warn(missing_docs)]

//! In-memory model of a parsed robot description.
//!
//! The model is purely declarative: links with their inertial, visual and
//! collision data, the material table, and the joints as written. No tree
//! linkage, mesh loading or physics happens here; downstream renderers and
//! physics binders only read these records.
//!
//! Ownership is strictly hierarchical. A [`Model`] owns its links, joints and
//! materials; a [`Visual`] refers to a model-owned material through a
//! [`MaterialId`] rather than a reference.

mod geometry;
mod joint;
mod link;
mod material;
mod model;
pub mod paths;
mod shape;

pub use geometry::{Geometry, MeshGeometry};
pub use joint::{Joint, JointLimits, JointType};
pub use link::{Inertia, Link, LINK_INDEX_UNASSIGNED};
pub use material::{Material, MaterialColor};
pub use model::{Deformable, MaterialId, Model};
pub use paths::MeshFileType;
pub use shape::{Collision, CollisionFlags, Shape, Visual};

pub use urdf_math::{Quat, Transform, Vec3};
