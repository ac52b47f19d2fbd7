//! Shipped design system definitions.
//!
//! Declaration order is the order shown in pickers; `material` comes first
//! because it is the default system.

use std::collections::BTreeMap;

use super::model::{
    table, Borders, ComponentKind, DesignSystem, Foundations, PatternDescriptor, SpacingScale,
    Transitions, TypeFoundation,
};

pub(crate) fn all() -> Vec<DesignSystem> {
    vec![material(), fluent(), carbon(), ant()]
}

fn spacing(base: u32, steps: &[(u32, u32)]) -> SpacingScale {
    SpacingScale {
        base,
        scale: steps.iter().copied().collect(),
    }
}

fn patterns(entries: Vec<(ComponentKind, PatternDescriptor)>) -> BTreeMap<ComponentKind, PatternDescriptor> {
    entries.into_iter().collect()
}

fn material() -> DesignSystem {
    DesignSystem {
        id: "material".to_string(),
        name: "Material Design".to_string(),
        vendor: "Google".to_string(),
        description: "Elevation-driven surfaces with an 8px grid and motion easing".to_string(),
        foundations: Foundations {
            spacing: spacing(8, &[(0, 0), (1, 4), (2, 8), (3, 12), (4, 16), (5, 24), (6, 32), (7, 48), (8, 64)]),
            border_radius: table(&[("none", 0), ("xs", 2), ("sm", 4), ("md", 8), ("lg", 12), ("xl", 16), ("full", 9999)]),
            shadows: table(&[
                ("none", "none".to_string()),
                ("sm", "0 1px 3px rgba(0,0,0,0.12), 0 1px 2px rgba(0,0,0,0.24)".to_string()),
                ("md", "0 3px 6px rgba(0,0,0,0.15), 0 2px 4px rgba(0,0,0,0.12)".to_string()),
                ("lg", "0 10px 20px rgba(0,0,0,0.15), 0 3px 6px rgba(0,0,0,0.10)".to_string()),
                ("elevated", "0 15px 25px rgba(0,0,0,0.15), 0 5px 10px rgba(0,0,0,0.05)".to_string()),
            ]),
            borders: Borders {
                widths: table(&[("thin", 1), ("medium", 2), ("thick", 4)]),
                colors: table(&[
                    ("subtle", "rgba(0,0,0,0.08)".to_string()),
                    ("default", "rgba(0,0,0,0.12)".to_string()),
                    ("strong", "rgba(0,0,0,0.38)".to_string()),
                    ("focus", "#1976d2".to_string()),
                ]),
            },
            typography: TypeFoundation {
                font_weights: table(&[("light", 300), ("regular", 400), ("medium", 500), ("bold", 700)]),
                line_heights: table(&[("tight", 1.2), ("normal", 1.5), ("relaxed", 1.75)]),
            },
            transitions: Transitions {
                duration: table(&[
                    ("fast", "150ms".to_string()),
                    ("normal", "250ms".to_string()),
                    ("slow", "375ms".to_string()),
                ]),
                easing: table(&[
                    ("standard", "cubic-bezier(0.4, 0, 0.2, 1)".to_string()),
                    ("decelerate", "cubic-bezier(0, 0, 0.2, 1)".to_string()),
                    ("accelerate", "cubic-bezier(0.4, 0, 1, 1)".to_string()),
                ]),
            },
        },
        patterns: patterns(vec![
            (
                ComponentKind::Button,
                PatternDescriptor::new()
                    .variant("contained")
                    .padding(2, 4)
                    .radius("sm")
                    .shadow("sm")
                    .weight("medium")
                    .transition("fast")
                    .hover(PatternDescriptor::new().shadow("md")),
            ),
            (
                ComponentKind::Card,
                PatternDescriptor::new()
                    .variant("elevated")
                    .padding(4, 4)
                    .radius("md")
                    .shadow("md")
                    .transition("normal")
                    .hover(PatternDescriptor::new().shadow("lg")),
            ),
            (
                ComponentKind::Input,
                PatternDescriptor::new()
                    .variant("outlined")
                    .padding(2, 3)
                    .radius("sm")
                    .border("default")
                    .hover(PatternDescriptor::new().border("strong")),
            ),
            (
                ComponentKind::Table,
                PatternDescriptor::new()
                    .variant("standard")
                    .padding(2, 4)
                    .border("subtle")
                    .weight("regular"),
            ),
            (
                ComponentKind::Nav,
                PatternDescriptor::new()
                    .variant("drawer")
                    .padding(2, 3)
                    .radius("none")
                    .shadow("elevated")
                    .weight("medium"),
            ),
        ]),
    }
}

fn fluent() -> DesignSystem {
    DesignSystem {
        id: "fluent".to_string(),
        name: "Fluent UI".to_string(),
        vendor: "Microsoft".to_string(),
        description: "Soft depth and a 4px grid with subtle strokes".to_string(),
        foundations: Foundations {
            spacing: spacing(4, &[(0, 0), (1, 2), (2, 4), (3, 8), (4, 12), (5, 16), (6, 20), (7, 24), (8, 32)]),
            border_radius: table(&[("none", 0), ("sm", 2), ("md", 4), ("lg", 8), ("xl", 12), ("circular", 9999)]),
            shadows: table(&[
                ("none", "none".to_string()),
                ("sm", "0 0 2px rgba(0,0,0,0.12), 0 2px 4px rgba(0,0,0,0.14)".to_string()),
                ("md", "0 0 2px rgba(0,0,0,0.12), 0 4px 8px rgba(0,0,0,0.14)".to_string()),
                ("lg", "0 0 2px rgba(0,0,0,0.12), 0 8px 16px rgba(0,0,0,0.14)".to_string()),
                ("elevated", "0 0 8px rgba(0,0,0,0.12), 0 14px 28px rgba(0,0,0,0.14)".to_string()),
            ]),
            borders: Borders {
                widths: table(&[("thin", 1), ("thick", 2), ("thicker", 3)]),
                colors: table(&[
                    ("subtle", "#e0e0e0".to_string()),
                    ("default", "#d1d1d1".to_string()),
                    ("strong", "#616161".to_string()),
                    ("accent", "#0f6cbd".to_string()),
                ]),
            },
            typography: TypeFoundation {
                font_weights: table(&[("regular", 400), ("semibold", 600), ("bold", 700)]),
                line_heights: table(&[("tight", 1.25), ("normal", 1.43), ("relaxed", 1.6)]),
            },
            transitions: Transitions {
                duration: table(&[
                    ("faster", "100ms".to_string()),
                    ("fast", "150ms".to_string()),
                    ("normal", "200ms".to_string()),
                    ("slow", "300ms".to_string()),
                ]),
                easing: table(&[
                    ("standard", "cubic-bezier(0.33, 0, 0.67, 1)".to_string()),
                    ("decelerate", "cubic-bezier(0.1, 0.9, 0.2, 1)".to_string()),
                    ("accelerate", "cubic-bezier(0.9, 0.1, 1, 0.2)".to_string()),
                ]),
            },
        },
        patterns: patterns(vec![
            (
                ComponentKind::Button,
                PatternDescriptor::new()
                    .variant("primary")
                    .padding(3, 5)
                    .radius("md")
                    .border("default")
                    .weight("semibold")
                    .transition("faster")
                    .hover(PatternDescriptor::new().border("strong")),
            ),
            (
                ComponentKind::Card,
                PatternDescriptor::new()
                    .variant("filled")
                    .padding(5, 5)
                    .radius("lg")
                    .shadow("sm")
                    .transition("normal")
                    .hover(PatternDescriptor::new().shadow("md")),
            ),
            (
                ComponentKind::Input,
                PatternDescriptor::new()
                    .variant("outline")
                    .padding(2, 4)
                    .radius("md")
                    .border("default")
                    .hover(PatternDescriptor::new().border("strong")),
            ),
            (
                ComponentKind::Table,
                PatternDescriptor::new()
                    .variant("subtle")
                    .padding(3, 4)
                    .border("subtle")
                    .weight("regular"),
            ),
            (
                ComponentKind::Nav,
                PatternDescriptor::new()
                    .variant("rail")
                    .padding(3, 4)
                    .radius("md")
                    .weight("semibold"),
            ),
        ]),
    }
}

fn carbon() -> DesignSystem {
    DesignSystem {
        id: "carbon".to_string(),
        name: "Carbon".to_string(),
        vendor: "IBM".to_string(),
        description: "Square corners, flat tiles and productive motion".to_string(),
        foundations: Foundations {
            spacing: spacing(8, &[(1, 2), (2, 4), (3, 8), (4, 12), (5, 16), (6, 24), (7, 32), (8, 40), (9, 48)]),
            border_radius: table(&[("none", 0), ("sm", 2), ("md", 4), ("lg", 8)]),
            shadows: table(&[
                ("none", "none".to_string()),
                ("sm", "0 2px 6px rgba(0,0,0,0.3)".to_string()),
                ("md", "0 4px 8px rgba(0,0,0,0.25)".to_string()),
                ("elevated", "0 8px 24px rgba(0,0,0,0.3)".to_string()),
            ]),
            borders: Borders {
                widths: table(&[("thin", 1), ("thick", 2)]),
                colors: table(&[
                    ("subtle", "#e0e0e0".to_string()),
                    ("default", "#8d8d8d".to_string()),
                    ("strong", "#161616".to_string()),
                    ("interactive", "#0f62fe".to_string()),
                ]),
            },
            typography: TypeFoundation {
                font_weights: table(&[("light", 300), ("regular", 400), ("semibold", 600)]),
                line_heights: table(&[("tight", 1.25), ("normal", 1.42), ("relaxed", 1.5)]),
            },
            transitions: Transitions {
                duration: table(&[
                    ("fast", "110ms".to_string()),
                    ("normal", "240ms".to_string()),
                    ("slow", "400ms".to_string()),
                ]),
                easing: table(&[
                    ("standard", "cubic-bezier(0.2, 0, 0.38, 0.9)".to_string()),
                    ("entrance", "cubic-bezier(0, 0, 0.38, 0.9)".to_string()),
                    ("exit", "cubic-bezier(0.2, 0, 1, 0.9)".to_string()),
                ]),
            },
        },
        patterns: patterns(vec![
            (
                ComponentKind::Button,
                PatternDescriptor::new()
                    .variant("primary")
                    .padding(4, 5)
                    .radius("none")
                    .weight("regular")
                    .transition("fast")
                    .hover(PatternDescriptor::new().border("interactive")),
            ),
            (
                ComponentKind::Card,
                PatternDescriptor::new()
                    .variant("tile")
                    .padding(5, 5)
                    .radius("none")
                    .border("subtle")
                    .hover(PatternDescriptor::new().shadow("sm")),
            ),
            (
                ComponentKind::Input,
                PatternDescriptor::new()
                    .variant("fluid")
                    .padding(3, 5)
                    .radius("none")
                    .border("default")
                    .transition("fast")
                    .hover(PatternDescriptor::new().border("strong")),
            ),
            (
                ComponentKind::Table,
                PatternDescriptor::new()
                    .variant("zebra")
                    .padding(4, 5)
                    .border("subtle")
                    .weight("semibold"),
            ),
            (
                ComponentKind::Nav,
                PatternDescriptor::new()
                    .variant("side-nav")
                    .padding(4, 5)
                    .radius("none")
                    .shadow("elevated")
                    .weight("semibold"),
            ),
        ]),
    }
}

fn ant() -> DesignSystem {
    DesignSystem {
        id: "ant".to_string(),
        name: "Ant Design".to_string(),
        vendor: "Ant Group".to_string(),
        description: "Dense enterprise layouts with rounded controls".to_string(),
        foundations: Foundations {
            spacing: spacing(8, &[(0, 0), (1, 4), (2, 8), (3, 12), (4, 16), (5, 20), (6, 24), (7, 32), (8, 48)]),
            border_radius: table(&[("none", 0), ("xs", 2), ("sm", 4), ("md", 6), ("lg", 8)]),
            shadows: table(&[
                ("none", "none".to_string()),
                ("sm", "0 1px 2px rgba(0,0,0,0.03), 0 1px 6px -1px rgba(0,0,0,0.02)".to_string()),
                ("md", "0 6px 16px rgba(0,0,0,0.08), 0 3px 6px -4px rgba(0,0,0,0.12)".to_string()),
                ("lg", "0 9px 28px 8px rgba(0,0,0,0.05), 0 6px 16px rgba(0,0,0,0.08)".to_string()),
                ("elevated", "0 12px 48px 16px rgba(0,0,0,0.03), 0 9px 28px rgba(0,0,0,0.05)".to_string()),
            ]),
            borders: Borders {
                widths: table(&[("thin", 1), ("thick", 2)]),
                colors: table(&[
                    ("subtle", "#f0f0f0".to_string()),
                    ("default", "#d9d9d9".to_string()),
                    ("strong", "#bfbfbf".to_string()),
                    ("primary", "#1677ff".to_string()),
                ]),
            },
            typography: TypeFoundation {
                font_weights: table(&[("regular", 400), ("medium", 500), ("semibold", 600)]),
                line_heights: table(&[("tight", 1.35), ("normal", 1.5714), ("relaxed", 1.66)]),
            },
            transitions: Transitions {
                duration: table(&[
                    ("fast", "100ms".to_string()),
                    ("normal", "200ms".to_string()),
                    ("slow", "300ms".to_string()),
                ]),
                easing: table(&[
                    ("standard", "cubic-bezier(0.645, 0.045, 0.355, 1)".to_string()),
                    ("out", "cubic-bezier(0.215, 0.61, 0.355, 1)".to_string()),
                    ("in", "cubic-bezier(0.55, 0.055, 0.675, 0.19)".to_string()),
                ]),
            },
        },
        patterns: patterns(vec![
            (
                ComponentKind::Button,
                PatternDescriptor::new()
                    .variant("primary")
                    .padding(1, 4)
                    .radius("md")
                    .shadow("sm")
                    .weight("regular")
                    .transition("normal")
                    .hover(PatternDescriptor::new().border("primary")),
            ),
            (
                ComponentKind::Card,
                PatternDescriptor::new()
                    .variant("bordered")
                    .padding(6, 6)
                    .radius("lg")
                    .border("subtle")
                    .transition("slow")
                    .hover(PatternDescriptor::new().shadow("lg")),
            ),
            (
                ComponentKind::Input,
                PatternDescriptor::new()
                    .variant("outlined")
                    .padding(1, 3)
                    .radius("md")
                    .border("default")
                    .transition("normal")
                    .hover(PatternDescriptor::new().border("primary")),
            ),
            (
                ComponentKind::Table,
                PatternDescriptor::new()
                    .variant("middle")
                    .padding(3, 4)
                    .border("subtle")
                    .weight("semibold"),
            ),
            (
                ComponentKind::Nav,
                PatternDescriptor::new()
                    .variant("inline")
                    .padding(2, 6)
                    .radius("md")
                    .weight("regular"),
            ),
        ]),
    }
}
