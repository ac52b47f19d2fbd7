//! Design system module.
//!
//! Holds the registry of shipped design systems, the resolution context that
//! turns symbolic tokens into concrete values, and the consistency check for
//! pattern references.

pub mod context;
pub mod model;
mod systems;
pub mod validate;

use std::sync::LazyLock;

use crate::registry;
use model::DesignSystem;

pub use context::{DesignSystemContext, ResolvedStyle, Scale};
pub use validate::{unresolved_references, UnresolvedToken};

/// Id of the design system returned for unknown ids.
pub const DEFAULT_DESIGN_SYSTEM: &str = "material";

static DESIGN_SYSTEMS: LazyLock<Vec<DesignSystem>> = LazyLock::new(systems::all);

/// All design systems in declaration order.
pub fn list_design_systems() -> &'static [DesignSystem] {
    &DESIGN_SYSTEMS
}

/// Look up a design system without falling back.
pub fn find_design_system(id: &str) -> Option<&'static DesignSystem> {
    registry::lookup(list_design_systems(), id)
}

/// Look up a design system; unknown ids yield the `material` system.
pub fn get_design_system(id: &str) -> &'static DesignSystem {
    registry::lookup_or_default(list_design_systems(), id, "design system")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_registered_systems() {
        for system in list_design_systems() {
            assert_eq!(get_design_system(&system.id).id, system.id);
        }
    }

    #[test]
    fn test_unknown_system_defaults_to_material() {
        assert_eq!(get_design_system("bogus").id, DEFAULT_DESIGN_SYSTEM);
        assert_eq!(list_design_systems()[0].id, DEFAULT_DESIGN_SYSTEM);
        assert!(find_design_system("bogus").is_none());
    }

    #[test]
    fn test_list_order_is_stable() {
        let ids: Vec<&str> = list_design_systems().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["material", "fluent", "carbon", "ant"]);
        let again: Vec<&str> = list_design_systems().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, again);
    }
}
