//! Document driver: converts a document tree into a robot model.

use std::path::Path;

use tracing::debug;
use urdf_model::paths::base_path;
use urdf_model::{Deformable, Link, Material, MaterialId, Model};

use crate::config::ParserConfig;
use crate::document::{Document, Element};
use crate::entities::{parse_joint, parse_link, parse_material, ElementExt, ParseContext};
use crate::error::{ParseWarning, Result, UrdfError};

/// Receives `<sensor>` elements when sensor parsing is enabled.
///
/// Called once per top-level `<sensor>`, after all links and joints have been
/// accepted. An error aborts the parse.
pub trait SensorHandler {
    /// Handle one sensor element.
    fn sensor(&mut self, model: &Model, element: &Element) -> Result<()>;
}

impl<F> SensorHandler for F
where
    F: FnMut(&Model, &Element) -> Result<()>,
{
    fn sensor(&mut self, model: &Model, element: &Element) -> Result<()> {
        self(model, element)
    }
}

/// A parsed model together with the problems that were recovered from.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    /// The model.
    pub model: Model,
    /// Recovered problems, in the order they were met.
    pub warnings: Vec<ParseWarning>,
}

/// Reusable document driver.
///
/// Holds the configuration and an optional sensor handler. Every read owns a
/// fresh model and warning list.
pub struct ModelReader {
    config: ParserConfig,
    sensor_handler: Option<Box<dyn SensorHandler>>,
}

impl ModelReader {
    /// Reader with the given configuration and no sensor handler.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            sensor_handler: None,
        }
    }

    /// Install a sensor handler.
    pub fn with_sensor_handler(mut self, handler: impl SensorHandler + 'static) -> Self {
        self.sensor_handler = Some(Box::new(handler));
        self
    }

    /// The configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Read a file from disk.
    ///
    /// The file's path is the base URL unless the configuration sets one.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<ParseOutput> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let document = Document::parse_str(&text)?;
        let base_url = if self.config.base_url.is_empty() {
            path.to_string_lossy().into_owned()
        } else {
            self.config.base_url.clone()
        };
        self.read_with_base_url(&document, &base_url)
    }

    /// Read XML text.
    pub fn read_str(&mut self, xml: &str) -> Result<ParseOutput> {
        let document = Document::parse_str(xml)?;
        self.read(&document)
    }

    /// Read an already tokenized document.
    pub fn read(&mut self, document: &Document) -> Result<ParseOutput> {
        let base_url = self.config.base_url.clone();
        self.read_with_base_url(document, &base_url)
    }

    fn read_with_base_url(&mut self, document: &Document, base_url: &str) -> Result<ParseOutput> {
        self.config.validate()?;

        let robot = &document.root;
        if robot.name != "robot" {
            return Err(UrdfError::missing_element("robot", "document root"));
        }
        let name = robot
            .attr("name")
            .ok_or(UrdfError::MissingName { element: "robot" })?;

        let mut ctx = ParseContext::new(self.config.scaling, base_path(base_url));
        let mut model = Model::new(name, ctx.base_path.clone());

        for element in robot.children_named("material") {
            let material = parse_material(element, &mut ctx)?;
            if model.material_id(&material.name).is_some() {
                ctx.warn(ParseWarning::DuplicateMaterial(material.name));
                continue;
            }
            debug!(material = %material.name, "registered material");
            model.materials.push(material);
        }

        if let Some(deformable) = robot.child("deformable") {
            model.deformable = Some(Deformable {
                name: deformable.attr("name").map(str::to_string),
            });
        }

        for element in robot.children_named("link") {
            let mut link = parse_link(element, &mut ctx)?;
            if model.link(&link.name).is_some() {
                return Err(UrdfError::DuplicateLink(link.name));
            }
            resolve_materials(&mut model, &mut link, &mut ctx);
            debug!(link = %link.name, "accepted link");
            model.links.push(link);
        }
        if model.links.is_empty() {
            return Err(UrdfError::NoLinks);
        }

        for element in robot.children_named("joint") {
            let joint = parse_joint(element, &mut ctx)?;
            if model.joint(&joint.name).is_some() {
                return Err(UrdfError::DuplicateJoint(joint.name));
            }
            model.joints.push(joint);
        }

        if self.config.force_fixed_base {
            let roots: Vec<String> = model
                .root_link_names()
                .into_iter()
                .map(str::to_string)
                .collect();
            let fixed = model.apply_fixed_base(&roots);
            debug!(fixed, ?roots, "applied fixed base");
        }

        if self.config.parse_sensors {
            let sensors: Vec<&Element> = robot.children_named("sensor").collect();
            match self.sensor_handler.as_mut() {
                Some(handler) => {
                    for sensor in sensors {
                        handler.sensor(&model, sensor)?;
                    }
                }
                None if !sensors.is_empty() => {
                    ctx.warn(ParseWarning::SensorsSkipped { count: sensors.len() });
                }
                None => {}
            }
        }

        Ok(ParseOutput {
            model,
            warnings: ctx.warnings,
        })
    }
}

/// Register a link's inline materials and resolve its material references.
fn resolve_materials(model: &mut Model, link: &mut Link, ctx: &mut ParseContext) {
    for visual in &mut link.visuals {
        if let Some(local) = &visual.local_material {
            visual.material = Some(register_local_material(model, local.clone(), ctx));
        } else if !visual.material_name.is_empty() {
            match model.material_id(&visual.material_name) {
                Some(id) => visual.material = Some(id),
                None => ctx.warn(ParseWarning::UnresolvedMaterial {
                    link: link.name.clone(),
                    material: visual.material_name.clone(),
                }),
            }
        }
    }
}

/// Store an inline material in a new slot.
///
/// A name that is already taken now resolves to the new slot. Ids handed out
/// earlier keep pointing at the material they were resolved against.
fn register_local_material(model: &mut Model, material: Material, ctx: &mut ParseContext) -> MaterialId {
    if model.material_id(&material.name).is_some() {
        ctx.warn(ParseWarning::MaterialReplaced(material.name.clone()));
    }
    model.materials.push(material);
    MaterialId(model.materials.len() - 1)
}
