//! Accessibility roles for collections and their items.
//!
//! These enums are a simplified set of composite-widget roles, mapped onto
//! the more comprehensive AccessKit `Role` enum. The role tables here encode
//! constraints imposed by the accessibility standard rather than configurable
//! choices: which roles may carry a multi-select marker, which have spatial
//! orientation semantics, and which item role each collection role implies.

use accesskit::Role;

/// Orientation of a collection's primary navigation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Items are arranged top to bottom.
    #[default]
    Vertical,
    /// Items are arranged left to right.
    Horizontal,
}

impl Orientation {
    /// Convert to AccessKit's Orientation enum.
    pub fn to_accesskit(self) -> accesskit::Orientation {
        match self {
            Self::Vertical => accesskit::Orientation::Vertical,
            Self::Horizontal => accesskit::Orientation::Horizontal,
        }
    }
}

/// The accessibility role of a collection container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CollectionRole {
    /// A generic grouping with no interaction semantics.
    Group,
    /// A non-interactive list of items.
    List,
    /// A list of selectable options.
    ListBox,
    /// A popup or submenu.
    Menu,
    /// A horizontal bar of menus.
    MenuBar,
    /// A hierarchical tree.
    Tree,
    /// A list of tabs.
    TabList,
    /// A 2D grid of cells.
    Grid,
    /// A hierarchical grid.
    TreeGrid,
    /// A group of mutually exclusive radio buttons.
    RadioGroup,
    /// A bar of action buttons.
    Toolbar,
}

impl CollectionRole {
    /// Convert to AccessKit's Role enum.
    pub fn to_accesskit_role(self) -> Role {
        match self {
            Self::Group => Role::Group,
            Self::List => Role::List,
            Self::ListBox => Role::ListBox,
            Self::Menu => Role::Menu,
            Self::MenuBar => Role::MenuBar,
            Self::Tree => Role::Tree,
            Self::TabList => Role::TabList,
            Self::Grid => Role::Grid,
            Self::TreeGrid => Role::TreeGrid,
            Self::RadioGroup => Role::RadioGroup,
            Self::Toolbar => Role::Toolbar,
        }
    }

    /// Whether the accessibility standard permits a multi-select marker on
    /// this role. This is a fixed whitelist, not a configurable choice.
    pub fn supports_multiselectable(self) -> bool {
        matches!(self, Self::ListBox | Self::Tree | Self::Grid | Self::TreeGrid)
    }

    /// The role's built-in orientation default, or `None` for roles without
    /// spatial orientation semantics (trees and grids).
    pub fn default_orientation(self) -> Option<Orientation> {
        match self {
            Self::List | Self::ListBox | Self::Menu | Self::RadioGroup => {
                Some(Orientation::Vertical)
            }
            Self::MenuBar | Self::TabList | Self::Toolbar => Some(Orientation::Horizontal),
            Self::Group | Self::Tree | Self::Grid | Self::TreeGrid => None,
        }
    }

    /// The role a nested collection inherits when it declares none of its
    /// own. Fixed inheritance table: tree levels group their children,
    /// menus nest as submenus.
    pub fn inherited_child_role(self) -> Option<CollectionRole> {
        match self {
            Self::Tree | Self::TreeGrid => Some(Self::Group),
            Self::Menu | Self::MenuBar => Some(Self::Menu),
            _ => None,
        }
    }

    /// The item role this collection role implies.
    pub fn default_item_role(self) -> Option<ItemRole> {
        match self {
            Self::List => Some(ItemRole::ListItem),
            Self::ListBox => Some(ItemRole::ListBoxOption),
            Self::Menu | Self::MenuBar => Some(ItemRole::MenuItem),
            Self::Tree => Some(ItemRole::TreeItem),
            Self::TabList => Some(ItemRole::Tab),
            Self::Grid | Self::TreeGrid => Some(ItemRole::Cell),
            Self::RadioGroup => Some(ItemRole::RadioButton),
            Self::Toolbar => Some(ItemRole::Button),
            Self::Group => None,
        }
    }

    /// Whether items under this role live in a tree scope, where item roles
    /// default to tree items and level attributes apply.
    pub fn is_tree_scope(self) -> bool {
        matches!(self, Self::Tree)
    }
}

/// The accessibility role of an item within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ItemRole {
    /// An item in a non-interactive list.
    ListItem,
    /// A selectable option in a listbox.
    ListBoxOption,
    /// An item in a menu.
    MenuItem,
    /// A checkable menu item.
    MenuItemCheckBox,
    /// A mutually exclusive menu item.
    MenuItemRadio,
    /// An item in a tree.
    TreeItem,
    /// A single tab.
    Tab,
    /// A cell in a grid.
    Cell,
    /// A row in a grid.
    Row,
    /// A radio button.
    RadioButton,
    /// A push button.
    Button,
}

impl ItemRole {
    /// Convert to AccessKit's Role enum.
    pub fn to_accesskit_role(self) -> Role {
        match self {
            Self::ListItem => Role::ListItem,
            Self::ListBoxOption => Role::ListBoxOption,
            Self::MenuItem => Role::MenuItem,
            Self::MenuItemCheckBox => Role::MenuItemCheckBox,
            Self::MenuItemRadio => Role::MenuItemRadio,
            Self::TreeItem => Role::TreeItem,
            Self::Tab => Role::Tab,
            Self::Cell => Role::Cell,
            Self::Row => Role::Row,
            Self::RadioButton => Role::RadioButton,
            Self::Button => Role::Button,
        }
    }
}

impl From<CollectionRole> for Role {
    fn from(role: CollectionRole) -> Self {
        role.to_accesskit_role()
    }
}

impl From<ItemRole> for Role {
    fn from(role: ItemRole) -> Self {
        role.to_accesskit_role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiselect_whitelist() {
        assert!(CollectionRole::ListBox.supports_multiselectable());
        assert!(CollectionRole::Tree.supports_multiselectable());
        assert!(CollectionRole::Grid.supports_multiselectable());
        assert!(CollectionRole::TreeGrid.supports_multiselectable());

        assert!(!CollectionRole::Menu.supports_multiselectable());
        assert!(!CollectionRole::TabList.supports_multiselectable());
        assert!(!CollectionRole::RadioGroup.supports_multiselectable());
    }

    #[test]
    fn test_orientation_semantics() {
        assert_eq!(
            CollectionRole::MenuBar.default_orientation(),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            CollectionRole::ListBox.default_orientation(),
            Some(Orientation::Vertical)
        );
        // Trees and grids have no orientation semantics at all.
        assert_eq!(CollectionRole::Tree.default_orientation(), None);
        assert_eq!(CollectionRole::Grid.default_orientation(), None);
    }

    #[test]
    fn test_inheritance_table() {
        assert_eq!(
            CollectionRole::Tree.inherited_child_role(),
            Some(CollectionRole::Group)
        );
        assert_eq!(
            CollectionRole::Menu.inherited_child_role(),
            Some(CollectionRole::Menu)
        );
        assert_eq!(CollectionRole::ListBox.inherited_child_role(), None);
    }
}
