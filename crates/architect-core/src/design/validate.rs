//! Static consistency check for design systems.
//!
//! Every symbolic name a pattern uses must exist in the foundations of the
//! same system. Resolution never fails on a miss, so this check is the only
//! place a dangling reference shows up.

use serde::Serialize;

use super::model::{ComponentKind, DesignSystem, PatternDescriptor};

/// A pattern field that names a token missing from the foundations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedToken {
    pub system: String,
    pub component: ComponentKind,
    /// Field path inside the descriptor, e.g. `hover.shadow`.
    pub field: String,
    pub token: String,
}

impl std::fmt::Display for UnresolvedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}.{} references unknown token '{}'",
            self.system, self.component, self.field, self.token
        )
    }
}

/// Collect every unresolved reference in a design system's patterns.
pub fn unresolved_references(system: &DesignSystem) -> Vec<UnresolvedToken> {
    let mut missing = Vec::new();
    for (kind, pattern) in &system.patterns {
        check_pattern(system, *kind, pattern, "", &mut missing);
        if let Some(hover) = &pattern.hover {
            check_pattern(system, *kind, hover, "hover.", &mut missing);
        }
    }
    missing
}

fn check_pattern(
    system: &DesignSystem,
    kind: ComponentKind,
    pattern: &PatternDescriptor,
    prefix: &str,
    missing: &mut Vec<UnresolvedToken>,
) {
    let foundations = &system.foundations;
    let mut report = |field: &str, token: String| {
        missing.push(UnresolvedToken {
            system: system.id.clone(),
            component: kind,
            field: format!("{}{}", prefix, field),
            token,
        });
    };

    if let Some((vertical, horizontal)) = pattern.padding {
        for step in [vertical, horizontal] {
            if !foundations.spacing.scale.contains_key(&step) {
                report("padding", step.to_string());
            }
        }
    }
    if let Some(name) = &pattern.border_radius {
        if !foundations.border_radius.contains_key(name) {
            report("borderRadius", name.clone());
        }
    }
    if let Some(name) = &pattern.border {
        if !foundations.borders.colors.contains_key(name) {
            report("border", name.clone());
        }
    }
    if let Some(name) = &pattern.shadow {
        if !foundations.shadows.contains_key(name) {
            report("shadow", name.clone());
        }
    }
    if let Some(name) = &pattern.font_weight {
        if !foundations.typography.font_weights.contains_key(name) {
            report("fontWeight", name.clone());
        }
    }
    if let Some(name) = &pattern.transition {
        if !foundations.transitions.duration.contains_key(name) {
            report("transition", name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{get_design_system, list_design_systems};

    #[test]
    fn test_shipped_systems_are_consistent() {
        for system in list_design_systems() {
            let missing = unresolved_references(system);
            assert!(missing.is_empty(), "{}: {:?}", system.id, missing);
        }
    }

    #[test]
    fn test_shipped_systems_have_required_keys() {
        for system in list_design_systems() {
            let f = &system.foundations;
            assert!(f.borders.widths.contains_key("thin"), "{}", system.id);
            assert!(f.borders.colors.contains_key("default"), "{}", system.id);
            assert!(f.transitions.duration.contains_key("normal"), "{}", system.id);
            assert!(f.transitions.easing.contains_key("standard"), "{}", system.id);
        }
    }

    #[test]
    fn test_reports_dangling_references() {
        let mut system = get_design_system("material").clone();
        system.patterns.insert(
            ComponentKind::Card,
            PatternDescriptor::new()
                .radius("huge")
                .padding(2, 42)
                .hover(PatternDescriptor::new().shadow("glow")),
        );

        let missing = unresolved_references(&system);
        let fields: Vec<&str> = missing.iter().map(|m| m.field.as_str()).collect();
        assert_eq!(missing.len(), 3);
        assert!(fields.contains(&"borderRadius"));
        assert!(fields.contains(&"padding"));
        assert!(fields.contains(&"hover.shadow"));
        assert_eq!(
            missing.iter().find(|m| m.field == "hover.shadow").unwrap().to_string(),
            "material: card.hover.shadow references unknown token 'glow'"
        );
    }
}
