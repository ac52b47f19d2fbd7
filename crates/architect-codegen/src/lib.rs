//! # Architect Codegen
//!
//! Generates UI template artifacts for scaffolded projects.
//!
//! Produces the framework theme file, the `ui-template.json` metadata and a
//! design-system markdown reference from a template and its customization.

pub mod configurator;
pub mod design_system;
pub mod theme_file;

pub use configurator::{ConfigurationSnapshot, TemplateConfigurator, METADATA_FILE};
pub use design_system::{GeneratedDesignSystem, generate_design_system_md, render_design_system_md, write_design_system_md};
