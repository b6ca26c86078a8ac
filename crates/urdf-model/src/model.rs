//! The top-level robot model.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::joint::Joint;
use crate::link::Link;
use crate::material::Material;
use crate::shape::Visual;

/// Index of a material in [`Model::materials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub usize);

/// Marker for a `<deformable>` element. Its body is not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deformable {
    /// The element's `name` attribute, if any.
    pub name: Option<String>,
}

/// A parsed robot description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    /// Robot name.
    pub name: String,
    /// Directory of the source document, trailing separator included.
    pub source_file: String,
    /// Materials in insertion order. A name can occur more than once when an
    /// inline material redefines it; lookups by name see the latest.
    pub materials: Vec<Material>,
    /// Links in document order. Names are unique.
    pub links: Vec<Link>,
    /// Joints in document order. Names are unique.
    pub joints: Vec<Joint>,
    /// Present when the document declares a `<deformable>` element.
    pub deformable: Option<Deformable>,
}

impl Model {
    /// Empty model.
    pub fn new(name: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_file: source_file.into(),
            ..Default::default()
        }
    }

    /// Link by name.
    pub fn link(&self, name: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.name == name)
    }

    /// Joint by name.
    pub fn joint(&self, name: &str) -> Option<&Joint> {
        self.joints.iter().find(|j| j.name == name)
    }

    /// Index of the latest material with this name.
    pub fn material_id(&self, name: &str) -> Option<MaterialId> {
        self.materials.iter().rposition(|m| m.name == name).map(MaterialId)
    }

    /// Material by name.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.material_id(name).and_then(|id| self.material_by_id(id))
    }

    /// Material by index.
    pub fn material_by_id(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    /// The material a visual resolves to.
    pub fn visual_material(&self, visual: &Visual) -> Option<&Material> {
        visual.material.and_then(|id| self.material_by_id(id))
    }

    /// Names of links that no joint names as its child, in document order.
    pub fn root_link_names(&self) -> Vec<&str> {
        let children: HashSet<&str> = self.joints.iter().map(|j| j.child_link.as_str()).collect();
        self.links
            .iter()
            .map(|l| l.name.as_str())
            .filter(|name| !children.contains(name))
            .collect()
    }

    /// Pin the named links: zero their mass and inertia tensor.
    ///
    /// Returns how many links were changed. Unknown names are ignored.
    pub fn apply_fixed_base<I, S>(&mut self, roots: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roots: HashSet<String> = roots.into_iter().map(|s| s.as_ref().to_string()).collect();
        let mut fixed = 0;
        for link in self.links.iter_mut().filter(|l| roots.contains(&l.name)) {
            link.inertia.make_static();
            fixed += 1;
        }
        fixed
    }
}
