//! Design system resolution context.
//!
//! Preview components hold a [`DesignSystemContext`] and query it per element
//! instead of walking the foundation tables themselves. Every accessor is
//! total: a missing token degrades to a fixed fallback and never panics.

use serde::Serialize;

use super::model::{ComponentKind, DesignSystem, PatternDescriptor};
use crate::theme::{ColorTheme, SemanticRole};

pub const FALLBACK_SIZE: &str = "0px";
pub const FALLBACK_SHADOW: &str = "none";
pub const FALLBACK_FONT_WEIGHT: u32 = 400;
const FALLBACK_BORDER_WIDTH: u32 = 1;
const FALLBACK_BORDER_COLOR: &str = "currentColor";
const FALLBACK_DURATION: &str = "200ms";
const FALLBACK_EASING: &str = "ease";

static EMPTY_PATTERN: PatternDescriptor = PatternDescriptor::EMPTY;

/// Multiplier applied to foundation pixel values.
///
/// The preview computes it from the user's slider value against the
/// system's own base value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f64);

impl Scale {
    pub const IDENTITY: Scale = Scale(1.0);

    /// `custom / base`, or identity when either side is zero.
    pub fn ratio(custom: u32, base: u32) -> Self {
        if custom == 0 || base == 0 {
            return Self::IDENTITY;
        }
        Scale(f64::from(custom) / f64::from(base))
    }

    pub fn factor(&self) -> f64 {
        self.0
    }

    fn apply(&self, px: u32) -> u32 {
        (f64::from(px) * self.0).round() as u32
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Concrete style values for one component kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub variant: Option<String>,
    pub padding: String,
    pub border_radius: String,
    pub border: String,
    pub shadow: String,
    pub font_weight: u32,
    pub transition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Box<ResolvedStyle>>,
}

/// Accessor layer over one (design system, color theme) pair.
#[derive(Debug, Clone, Copy)]
pub struct DesignSystemContext<'a> {
    system: &'a DesignSystem,
    theme: &'a ColorTheme,
    radius_scale: Scale,
    spacing_scale: Scale,
}

impl<'a> DesignSystemContext<'a> {
    pub fn new(system: &'a DesignSystem, theme: &'a ColorTheme) -> Self {
        Self {
            system,
            theme,
            radius_scale: Scale::IDENTITY,
            spacing_scale: Scale::IDENTITY,
        }
    }

    pub fn with_radius_scale(mut self, scale: Scale) -> Self {
        self.radius_scale = scale;
        self
    }

    pub fn with_spacing_scale(mut self, scale: Scale) -> Self {
        self.spacing_scale = scale;
        self
    }

    pub fn system(&self) -> &'a DesignSystem {
        self.system
    }

    pub fn theme(&self) -> &'a ColorTheme {
        self.theme
    }

    /// Spacing step as `"<px>px"`; unknown steps resolve to `"0px"`.
    pub fn spacing(&self, step: u32) -> String {
        match self.system.foundations.spacing.scale.get(&step) {
            Some(px) => px_value(self.spacing_scale.apply(*px)),
            None => FALLBACK_SIZE.to_string(),
        }
    }

    /// Border radius size as `"<px>px"`; unknown sizes resolve to `"0px"`.
    pub fn border_radius(&self, size: &str) -> String {
        match self.system.foundations.border_radius.get(size) {
            Some(px) => px_value(self.radius_scale.apply(*px)),
            None => FALLBACK_SIZE.to_string(),
        }
    }

    /// CSS box-shadow for a size name; unknown sizes resolve to `"none"`.
    pub fn shadow(&self, size: &str) -> String {
        self.system
            .foundations
            .shadows
            .get(size)
            .cloned()
            .unwrap_or_else(|| FALLBACK_SHADOW.to_string())
    }

    /// `"<thin>px solid <color>"` for a strength name.
    ///
    /// Unknown strengths use the `default` strength's color.
    pub fn border(&self, strength: &str) -> String {
        let borders = &self.system.foundations.borders;
        let width = borders.widths.get("thin").copied().unwrap_or(FALLBACK_BORDER_WIDTH);
        let color = borders
            .colors
            .get(strength)
            .or_else(|| borders.colors.get("default"))
            .map(String::as_str)
            .unwrap_or(FALLBACK_BORDER_COLOR);
        format!("{}px solid {}", width, color)
    }

    /// Border with the `default` strength.
    pub fn default_border(&self) -> String {
        self.border("default")
    }

    /// Pattern descriptor for a component kind name; unknown kinds yield an
    /// empty descriptor.
    pub fn component_pattern(&self, kind: &str) -> &'a PatternDescriptor {
        ComponentKind::from_name(kind)
            .and_then(|kind| self.system.patterns.get(&kind))
            .unwrap_or(&EMPTY_PATTERN)
    }

    /// Numeric font weight for a weight name; unknown names resolve to 400.
    pub fn font_weight(&self, name: &str) -> u32 {
        self.system
            .foundations
            .typography
            .font_weights
            .get(name)
            .copied()
            .unwrap_or(FALLBACK_FONT_WEIGHT)
    }

    /// `"<properties> <duration> <standard easing>"`.
    ///
    /// Unknown duration names use the `normal` duration.
    pub fn transition(&self, properties: &str, duration: &str) -> String {
        let transitions = &self.system.foundations.transitions;
        let duration = transitions
            .duration
            .get(duration)
            .or_else(|| transitions.duration.get("normal"))
            .map(String::as_str)
            .unwrap_or(FALLBACK_DURATION);
        let easing = transitions
            .easing
            .get("standard")
            .map(String::as_str)
            .unwrap_or(FALLBACK_EASING);
        format!("{} {} {}", properties, duration, easing)
    }

    /// Theme color for a role, or `fallback` when the theme leaves it unset.
    pub fn color<'b>(&self, role: SemanticRole, fallback: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.theme.color(role).unwrap_or(fallback)
    }

    /// Resolve a component kind's pattern into concrete values.
    ///
    /// Hover values are the base pattern overlaid with the hover descriptor.
    pub fn resolve_pattern(&self, kind: &str) -> ResolvedStyle {
        let pattern = self.component_pattern(kind);
        let mut style = self.resolve_descriptor(pattern);
        if let Some(hover) = &pattern.hover {
            style.hover = Some(Box::new(self.resolve_descriptor(&pattern.overlay(hover))));
        }
        style
    }

    fn resolve_descriptor(&self, pattern: &PatternDescriptor) -> ResolvedStyle {
        ResolvedStyle {
            variant: pattern.variant.clone(),
            padding: pattern
                .padding
                .map(|(vertical, horizontal)| {
                    format!("{} {}", self.spacing(vertical), self.spacing(horizontal))
                })
                .unwrap_or_else(|| FALLBACK_SIZE.to_string()),
            border_radius: pattern
                .border_radius
                .as_deref()
                .map(|size| self.border_radius(size))
                .unwrap_or_else(|| FALLBACK_SIZE.to_string()),
            border: pattern
                .border
                .as_deref()
                .map(|strength| self.border(strength))
                .unwrap_or_else(|| "none".to_string()),
            shadow: pattern
                .shadow
                .as_deref()
                .map(|size| self.shadow(size))
                .unwrap_or_else(|| FALLBACK_SHADOW.to_string()),
            font_weight: pattern
                .font_weight
                .as_deref()
                .map(|name| self.font_weight(name))
                .unwrap_or(FALLBACK_FONT_WEIGHT),
            transition: pattern
                .transition
                .as_deref()
                .map(|duration| self.transition("all", duration)),
            hover: None,
        }
    }
}

fn px_value(px: u32) -> String {
    format!("{}px", px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::get_design_system;
    use crate::theme::get_theme;

    fn material() -> DesignSystemContext<'static> {
        DesignSystemContext::new(get_design_system("material"), get_theme("blue"))
    }

    #[test]
    fn test_spacing() {
        let ctx = material();
        assert_eq!(ctx.spacing(2), "8px");
        assert_eq!(ctx.spacing(4), "16px");
        assert_eq!(ctx.spacing(99), "0px");
    }

    #[test]
    fn test_border_radius_and_shadow() {
        let ctx = material();
        assert_eq!(ctx.border_radius("md"), "8px");
        assert_eq!(ctx.border_radius("enormous"), "0px");
        assert_eq!(ctx.shadow("none"), "none");
        assert_eq!(ctx.shadow("glow"), "none");
        assert!(ctx.shadow("md").contains("rgba"));
    }

    #[test]
    fn test_border_falls_back_to_default_strength() {
        let ctx = material();
        assert_eq!(ctx.border("default"), "1px solid rgba(0,0,0,0.12)");
        assert_eq!(ctx.border("doesNotExist"), ctx.border("default"));
        assert_eq!(ctx.default_border(), ctx.border("default"));
        assert_eq!(ctx.border("strong"), "1px solid rgba(0,0,0,0.38)");
    }

    #[test]
    fn test_component_pattern() {
        let ctx = material();
        assert_eq!(ctx.component_pattern("button").border_radius.as_deref(), Some("sm"));
        assert!(ctx.component_pattern("carousel").is_empty());
    }

    #[test]
    fn test_font_weight() {
        let ctx = material();
        assert_eq!(ctx.font_weight("bold"), 700);
        assert_eq!(ctx.font_weight("black"), 400);
    }

    #[test]
    fn test_transition() {
        let ctx = material();
        assert_eq!(
            ctx.transition("opacity", "fast"),
            "opacity 150ms cubic-bezier(0.4, 0, 0.2, 1)"
        );
        assert_eq!(
            ctx.transition("transform", "glacial"),
            ctx.transition("transform", "normal")
        );
    }

    #[test]
    fn test_color_fallback() {
        let mut theme = get_theme("blue").clone();
        theme.colors.remove(&SemanticRole::Info);
        let ctx = DesignSystemContext::new(get_design_system("material"), &theme);
        assert_eq!(ctx.color(SemanticRole::Info, "#0288d1"), "#0288d1");
        assert_eq!(ctx.color(SemanticRole::Primary, "#000"), "#1976d2");
    }

    #[test]
    fn test_resolve_pattern_with_hover() {
        let ctx = material();
        let button = ctx.resolve_pattern("button");
        assert_eq!(button.padding, "8px 16px");
        assert_eq!(button.border_radius, "4px");
        assert_eq!(button.font_weight, 500);
        assert_eq!(button.border, "none");
        assert_eq!(
            button.transition.as_deref(),
            Some("all 150ms cubic-bezier(0.4, 0, 0.2, 1)")
        );

        let hover = button.hover.unwrap();
        assert_eq!(hover.shadow, ctx.shadow("md"));
        assert_eq!(hover.border_radius, "4px");
    }

    #[test]
    fn test_resolve_unknown_pattern() {
        let style = material().resolve_pattern("carousel");
        assert_eq!(style.padding, "0px");
        assert_eq!(style.shadow, "none");
        assert_eq!(style.font_weight, 400);
        assert!(style.hover.is_none());
    }

    #[test]
    fn test_scales() {
        let ctx = material()
            .with_radius_scale(Scale::ratio(16, 8))
            .with_spacing_scale(Scale::ratio(4, 8));
        assert_eq!(ctx.border_radius("md"), "16px");
        assert_eq!(ctx.spacing(4), "8px");
        assert_eq!(ctx.spacing(99), "0px");
        assert_eq!(Scale::ratio(0, 8), Scale::IDENTITY);
        assert_eq!(Scale::ratio(12, 0).factor(), 1.0);
    }
}
