// ModusKit - core/catalog.rs
//
// Static catalogue of the design-system components and icons browsable in
// the Dev Panel, plus the substring filter behind its search box.

/// Broad grouping used to section the component list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentCategory {
    Actions,
    Inputs,
    Feedback,
    Navigation,
    Layout,
}

impl ComponentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentCategory::Actions => "Actions",
            ComponentCategory::Inputs => "Inputs",
            ComponentCategory::Feedback => "Feedback",
            ComponentCategory::Navigation => "Navigation",
            ComponentCategory::Layout => "Layout",
        }
    }
}

/// One design-system widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentInfo {
    /// Custom-element tag, e.g. `modus-wc-button`.
    pub tag: &'static str,
    pub name: &'static str,
    pub category: ComponentCategory,
}

/// One icon from the icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconInfo {
    pub name: &'static str,
    /// Closest Unicode stand-in used for the preview.
    pub glyph: &'static str,
}

const fn component(
    tag: &'static str,
    name: &'static str,
    category: ComponentCategory,
) -> ComponentInfo {
    ComponentInfo {
        tag,
        name,
        category,
    }
}

pub const COMPONENTS: &[ComponentInfo] = &[
    component("modus-wc-button", "Button", ComponentCategory::Actions),
    component("modus-wc-dropdown-menu", "Dropdown Menu", ComponentCategory::Actions),
    component("modus-wc-checkbox", "Checkbox", ComponentCategory::Inputs),
    component("modus-wc-date", "Date Input", ComponentCategory::Inputs),
    component("modus-wc-number-input", "Number Input", ComponentCategory::Inputs),
    component("modus-wc-radio", "Radio", ComponentCategory::Inputs),
    component("modus-wc-select", "Select", ComponentCategory::Inputs),
    component("modus-wc-slider", "Slider", ComponentCategory::Inputs),
    component("modus-wc-switch", "Switch", ComponentCategory::Inputs),
    component("modus-wc-text-input", "Text Input", ComponentCategory::Inputs),
    component("modus-wc-textarea", "Textarea", ComponentCategory::Inputs),
    component("modus-wc-alert", "Alert", ComponentCategory::Feedback),
    component("modus-wc-badge", "Badge", ComponentCategory::Feedback),
    component("modus-wc-loader", "Loader", ComponentCategory::Feedback),
    component("modus-wc-progress", "Progress", ComponentCategory::Feedback),
    component("modus-wc-toast", "Toast", ComponentCategory::Feedback),
    component("modus-wc-tooltip", "Tooltip", ComponentCategory::Feedback),
    component("modus-wc-breadcrumbs", "Breadcrumbs", ComponentCategory::Navigation),
    component("modus-wc-navbar", "Navbar", ComponentCategory::Navigation),
    component("modus-wc-pagination", "Pagination", ComponentCategory::Navigation),
    component("modus-wc-side-navigation", "Side Navigation", ComponentCategory::Navigation),
    component("modus-wc-tabs", "Tabs", ComponentCategory::Navigation),
    component("modus-wc-accordion", "Accordion", ComponentCategory::Layout),
    component("modus-wc-card", "Card", ComponentCategory::Layout),
    component("modus-wc-divider", "Divider", ComponentCategory::Layout),
    component("modus-wc-modal", "Modal", ComponentCategory::Layout),
    component("modus-wc-table", "Table", ComponentCategory::Layout),
];

pub const ICONS: &[IconInfo] = &[
    IconInfo { name: "add", glyph: "\u{2795}" },
    IconInfo { name: "alert", glyph: "\u{26a0}" },
    IconInfo { name: "calendar", glyph: "\u{1f4c5}" },
    IconInfo { name: "check", glyph: "\u{2714}" },
    IconInfo { name: "chevron_right", glyph: "\u{203a}" },
    IconInfo { name: "close", glyph: "\u{2716}" },
    IconInfo { name: "copy", glyph: "\u{2398}" },
    IconInfo { name: "delete", glyph: "\u{1f5d1}" },
    IconInfo { name: "download", glyph: "\u{2b07}" },
    IconInfo { name: "edit", glyph: "\u{270e}" },
    IconInfo { name: "folder", glyph: "\u{1f4c1}" },
    IconInfo { name: "help", glyph: "\u{2753}" },
    IconInfo { name: "home", glyph: "\u{1f3e0}" },
    IconInfo { name: "info", glyph: "\u{2139}" },
    IconInfo { name: "lock", glyph: "\u{1f512}" },
    IconInfo { name: "menu", glyph: "\u{2630}" },
    IconInfo { name: "search", glyph: "\u{1f50d}" },
    IconInfo { name: "settings", glyph: "\u{2699}" },
    IconInfo { name: "star", glyph: "\u{2605}" },
    IconInfo { name: "upload", glyph: "\u{2b06}" },
];

/// Case-insensitive substring match on a component's name or tag.
/// An empty (or whitespace-only) query matches everything.
pub fn filter_components(query: &str) -> Vec<&'static ComponentInfo> {
    let needle = query.trim().to_lowercase();
    COMPONENTS
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.tag.contains(&needle)
        })
        .collect()
}

/// Case-insensitive substring match on an icon name.
pub fn filter_icons(query: &str) -> Vec<&'static IconInfo> {
    let needle = query.trim().to_lowercase();
    ICONS
        .iter()
        .filter(|i| needle.is_empty() || i.name.contains(&needle))
        .collect()
}
