#![warn(missing_docs)]

//! Robot description (URDF) parsing.
//!
//! Turns a robot description document into a validated [`Model`]: links with
//! inertial, visual and collision data, the material table and the joints.
//! Required fields that are missing abort the parse with a [`UrdfError`];
//! cosmetic problems are recovered with a default and reported as
//! [`ParseWarning`]s next to the model.
//!
//! # Example
//!
//! ```
//! use urdf_parser::{parse_urdf_str, ParserConfig};
//!
//! let xml = r#"
//!     <robot name="pendulum">
//!         <link name="world"/>
//!         <link name="bob">
//!             <visual><geometry><sphere radius="0.1"/></geometry></visual>
//!         </link>
//!         <joint name="pivot" type="continuous">
//!             <parent link="world"/>
//!             <child link="bob"/>
//!         </joint>
//!     </robot>"#;
//!
//! let output = parse_urdf_str(xml, &ParserConfig::default()).unwrap();
//! assert_eq!(output.model.links.len(), 2);
//! assert_eq!(output.model.root_link_names(), vec!["world"]);
//! ```

mod config;
pub mod document;
pub mod entities;
mod error;
mod reader;

use std::path::Path;

pub use config::ParserConfig;
pub use document::{Document, Element};
pub use error::{ErrorKind, ParseWarning, Result, UrdfError};
pub use reader::{ModelReader, ParseOutput, SensorHandler};

pub use urdf_model::Model;

/// Parse an already tokenized document.
pub fn parse_document(document: &Document, config: &ParserConfig) -> Result<ParseOutput> {
    ModelReader::new(config.clone()).read(document)
}

/// Parse XML text.
pub fn parse_urdf_str(xml: &str, config: &ParserConfig) -> Result<ParseOutput> {
    let document = Document::parse_str(xml)?;
    parse_document(&document, config)
}

/// Read and parse a file. Its path is the base URL unless `config` sets one.
pub fn parse_urdf_file(path: impl AsRef<Path>, config: &ParserConfig) -> Result<ParseOutput> {
    ModelReader::new(config.clone()).read_file(path)
}
