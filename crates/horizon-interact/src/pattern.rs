//! Declarative interaction patterns.
//!
//! A [`Pattern`] names one of the composite-widget idioms the engine knows
//! how to drive. Each pattern carries a fixed [`PatternConfig`]: the
//! container role, the implied item role, which accessibility attribute
//! conveys selection, and the orientation the pattern assumes when the host
//! declares none. The tables are immutable; hosts pick a pattern, they do
//! not edit one.

use crate::role::{CollectionRole, ItemRole, Orientation};

/// How selection state is conveyed to the accessible tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionAttribute {
    /// No selection attribute is emitted.
    None,
    /// Selection is conveyed via the `selected` state.
    Selected,
    /// Selection is conveyed via the `toggled` (pressed/checked) state.
    Toggled,
}

/// A composite-widget interaction pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Pattern {
    /// A popup menu of actions.
    Menu,
    /// A horizontal bar of top-level menus.
    MenuBar,
    /// A list of selectable options.
    Listbox,
    /// A hierarchical tree of items.
    Tree,
    /// A tab list controlling panels.
    Tabs,
    /// A 2D grid of cells.
    Grid,
    /// A hierarchical grid.
    TreeGrid,
    /// A group of mutually exclusive options.
    RadioGroup,
    /// Vertically stacked expandable sections.
    Accordion,
    /// A bar of action controls.
    Toolbar,
}

/// The fixed configuration a pattern implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    /// The container role, if the pattern has one. Accordions have none:
    /// their interactive surface is the section headers, not a container.
    pub role: Option<CollectionRole>,
    /// The role items take unless overridden.
    pub item_role: Option<ItemRole>,
    /// How item selection reaches the accessible tree.
    pub selection_attribute: SelectionAttribute,
    /// The orientation assumed when the host declares none, where the
    /// pattern has orientation semantics at all.
    pub orientation: Option<Orientation>,
}

impl Pattern {
    /// Look up the pattern's fixed configuration.
    pub const fn config(self) -> PatternConfig {
        match self {
            Self::Menu => PatternConfig {
                role: Some(CollectionRole::Menu),
                item_role: Some(ItemRole::MenuItem),
                selection_attribute: SelectionAttribute::Toggled,
                orientation: Some(Orientation::Vertical),
            },
            Self::MenuBar => PatternConfig {
                role: Some(CollectionRole::MenuBar),
                item_role: Some(ItemRole::MenuItem),
                selection_attribute: SelectionAttribute::Toggled,
                orientation: Some(Orientation::Horizontal),
            },
            Self::Listbox => PatternConfig {
                role: Some(CollectionRole::ListBox),
                item_role: Some(ItemRole::ListBoxOption),
                selection_attribute: SelectionAttribute::Selected,
                orientation: Some(Orientation::Vertical),
            },
            Self::Tree => PatternConfig {
                role: Some(CollectionRole::Tree),
                item_role: Some(ItemRole::TreeItem),
                selection_attribute: SelectionAttribute::Selected,
                orientation: None,
            },
            Self::Tabs => PatternConfig {
                role: Some(CollectionRole::TabList),
                item_role: Some(ItemRole::Tab),
                selection_attribute: SelectionAttribute::Selected,
                orientation: Some(Orientation::Horizontal),
            },
            Self::Grid => PatternConfig {
                role: Some(CollectionRole::Grid),
                item_role: Some(ItemRole::Cell),
                selection_attribute: SelectionAttribute::Selected,
                orientation: None,
            },
            Self::TreeGrid => PatternConfig {
                role: Some(CollectionRole::TreeGrid),
                item_role: Some(ItemRole::Cell),
                selection_attribute: SelectionAttribute::Selected,
                orientation: None,
            },
            Self::RadioGroup => PatternConfig {
                role: Some(CollectionRole::RadioGroup),
                item_role: Some(ItemRole::RadioButton),
                selection_attribute: SelectionAttribute::Toggled,
                orientation: Some(Orientation::Vertical),
            },
            Self::Accordion => PatternConfig {
                role: None,
                item_role: None,
                selection_attribute: SelectionAttribute::None,
                orientation: None,
            },
            Self::Toolbar => PatternConfig {
                role: Some(CollectionRole::Toolbar),
                item_role: Some(ItemRole::Button),
                selection_attribute: SelectionAttribute::Toggled,
                orientation: Some(Orientation::Horizontal),
            },
        }
    }

    /// The container role the pattern implies, if any.
    pub fn role(self) -> Option<CollectionRole> {
        self.config().role
    }

    /// The item role the pattern implies, if any.
    pub fn item_role(self) -> Option<ItemRole> {
        self.config().item_role
    }

    /// How this pattern conveys selection.
    pub fn selection_attribute(self) -> SelectionAttribute {
        self.config().selection_attribute
    }
}
