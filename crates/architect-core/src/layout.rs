//! Layout registry and navigation planning.
//!
//! A layout is a structural arrangement with named content slots. The
//! navigation style decides where navigation renders, or whether it renders
//! at all.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::registry::{self, Entry};

/// Id of the layout returned for unknown ids.
pub const DEFAULT_LAYOUT: &str = "dashboardGrid";

/// Where the navigation of a layout is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationStyle {
    #[default]
    Side,
    Top,
    SideTop,
    Compact,
    None,
}

impl NavigationStyle {
    pub const ALL: [NavigationStyle; 5] = [
        NavigationStyle::Side,
        NavigationStyle::Top,
        NavigationStyle::SideTop,
        NavigationStyle::Compact,
        NavigationStyle::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationStyle::Side => "side",
            NavigationStyle::Top => "top",
            NavigationStyle::SideTop => "side-top",
            NavigationStyle::Compact => "compact",
            NavigationStyle::None => "none",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == label.trim())
    }

    pub fn shows_navigation(&self) -> bool {
        !matches!(self, NavigationStyle::None)
    }
}

impl std::fmt::Display for NavigationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NavigationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            format!("unknown navigation style '{}' (expected side, top, side-top, compact or none)", s)
        })
    }
}

/// Named content region of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Navigation,
    Header,
    Metrics,
    Charts,
    Table,
    Toolbar,
    Grid,
    Columns,
    Sidebar,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Navigation => "navigation",
            Slot::Header => "header",
            Slot::Metrics => "metrics",
            Slot::Charts => "charts",
            Slot::Table => "table",
            Slot::Toolbar => "toolbar",
            Slot::Grid => "grid",
            Slot::Columns => "columns",
            Slot::Sidebar => "sidebar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Slots in render order.
    pub slots: Vec<Slot>,
}

impl Entry for Layout {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Rendering plan of a layout for one navigation style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub layout: String,
    pub navigation_style: NavigationStyle,
    pub slots: Vec<Slot>,
}

impl Layout {
    /// Slots that render under `style`; `none` drops the navigation slot.
    pub fn plan(&self, style: NavigationStyle) -> LayoutPlan {
        let slots = self
            .slots
            .iter()
            .copied()
            .filter(|slot| *slot != Slot::Navigation || style.shows_navigation())
            .collect();
        LayoutPlan {
            layout: self.id.clone(),
            navigation_style: style,
            slots,
        }
    }
}

fn layout(id: &str, name: &str, category: &str, description: &str, slots: &[Slot]) -> Layout {
    Layout {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        slots: slots.to_vec(),
    }
}

static LAYOUTS: LazyLock<Vec<Layout>> = LazyLock::new(|| {
    vec![
        layout(
            "dashboardGrid",
            "Dashboard Grid",
            "dashboard",
            "Metric cards above a chart row and a data table",
            &[Slot::Navigation, Slot::Header, Slot::Metrics, Slot::Charts, Slot::Table],
        ),
        layout(
            "spreadsheet",
            "Spreadsheet",
            "data",
            "Toolbar over a full-bleed editable grid with a details sidebar",
            &[Slot::Navigation, Slot::Header, Slot::Toolbar, Slot::Grid, Slot::Sidebar],
        ),
        layout(
            "kanban",
            "Kanban Board",
            "workflow",
            "Horizontally scrolling status columns with a filter sidebar",
            &[Slot::Navigation, Slot::Header, Slot::Sidebar, Slot::Columns],
        ),
    ]
});

/// All layouts in declaration order.
pub fn list_layouts() -> &'static [Layout] {
    &LAYOUTS
}

pub fn find_layout(id: &str) -> Option<&'static Layout> {
    registry::lookup(list_layouts(), id)
}

/// Look up a layout; unknown ids yield `dashboardGrid`.
pub fn get_layout(id: &str) -> &'static Layout {
    registry::lookup_or_default(list_layouts(), id, "layout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_style_labels() {
        assert_eq!(NavigationStyle::from_label("side-top"), Some(NavigationStyle::SideTop));
        assert_eq!("compact".parse::<NavigationStyle>(), Ok(NavigationStyle::Compact));
        assert!("floating".parse::<NavigationStyle>().is_err());
        assert_eq!(serde_json::to_string(&NavigationStyle::SideTop).unwrap(), "\"side-top\"");
    }

    #[test]
    fn test_unknown_layout_defaults_to_dashboard_grid() {
        assert_eq!(get_layout("bogus").id, DEFAULT_LAYOUT);
        assert_eq!(get_layout("kanban").id, "kanban");
    }

    #[test]
    fn test_plan_without_navigation() {
        let plan = get_layout("dashboardGrid").plan(NavigationStyle::None);
        assert_eq!(plan.slots, vec![Slot::Header, Slot::Metrics, Slot::Charts, Slot::Table]);
    }

    #[test]
    fn test_plan_keeps_navigation() {
        for style in [NavigationStyle::Side, NavigationStyle::Top, NavigationStyle::SideTop, NavigationStyle::Compact] {
            let plan = get_layout("kanban").plan(style);
            assert_eq!(plan.slots.first(), Some(&Slot::Navigation));
            assert_eq!(plan.navigation_style, style);
        }
    }
}
