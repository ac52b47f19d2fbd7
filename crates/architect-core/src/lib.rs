//! Architect Core Library
//!
//! Design systems, token registries and the resolution context behind the
//! UI template pipeline of the project scaffolder.

pub mod config;
pub mod customization;
pub mod design;
pub mod error;
pub mod layout;
pub mod preset;
pub mod registry;
pub mod template;
pub mod theme;
pub mod typography;

pub use config::ArchitectConfig;
pub use customization::Customization;
pub use error::{ArchitectError, ArchitectResult};
pub use preset::{build_template_config, get_preset, TemplateRequest, TemplateSelection};
pub use template::{Framework, TemplateConfig, UiTemplate};
