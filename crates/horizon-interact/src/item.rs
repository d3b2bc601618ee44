//! Declarative item model.
//!
//! Hosts describe a collection's contents as a tree of [`Item`] values
//! instead of having the engine inspect live widgets. Controllers consume
//! flattened key orders derived from this model; the model itself carries no
//! interaction state (selection and expansion live in their controllers,
//! keyed by [`ItemKey`]).

use std::collections::HashSet;

use crate::key::ItemKey;

/// One item in a collection, possibly with nested children.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// The item's key, unique within the collection's flat key space.
    pub key: ItemKey,
    /// The human-readable label.
    pub label: String,
    /// Disabled items render but do not participate in navigation.
    pub disabled: bool,
    /// Nested child items (tree branches, submenus).
    pub children: Vec<Item>,
}

impl Item {
    /// Create an enabled leaf item.
    pub fn new(key: impl Into<ItemKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Mark the item disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach child items.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Item>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether the item has children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// All keys in depth-first document order.
pub fn flat_keys(items: &[Item]) -> Vec<ItemKey> {
    let mut keys = Vec::new();
    collect(items, &mut |item| {
        keys.push(item.key.clone());
        true
    });
    keys
}

/// Keys reachable by keyboard navigation: depth-first order, skipping
/// disabled items (a disabled item's children stay unreachable with it).
pub fn navigable_keys(items: &[Item]) -> Vec<ItemKey> {
    let mut keys = Vec::new();
    collect(items, &mut |item| {
        if item.disabled {
            return false;
        }
        keys.push(item.key.clone());
        true
    });
    keys
}

/// Keys currently visible in a tree: depth-first order, descending into
/// children only under expanded parents. Disabled items are included; they
/// are visible, just not navigable.
pub fn visible_keys(items: &[Item], expanded: &HashSet<ItemKey>) -> Vec<ItemKey> {
    fn walk(items: &[Item], expanded: &HashSet<ItemKey>, keys: &mut Vec<ItemKey>) {
        for item in items {
            keys.push(item.key.clone());
            if expanded.contains(&item.key) {
                walk(&item.children, expanded, keys);
            }
        }
    }
    let mut keys = Vec::new();
    walk(items, expanded, &mut keys);
    keys
}

/// Find an item anywhere in the tree.
pub fn find<'a>(items: &'a [Item], key: &ItemKey) -> Option<&'a Item> {
    for item in items {
        if &item.key == key {
            return Some(item);
        }
        if let Some(found) = find(&item.children, key) {
            return Some(found);
        }
    }
    None
}

/// The 1-based tree depth of an item, for the level attribute of tree items.
pub fn level_of(items: &[Item], key: &ItemKey) -> Option<usize> {
    fn walk(items: &[Item], key: &ItemKey, depth: usize) -> Option<usize> {
        for item in items {
            if &item.key == key {
                return Some(depth);
            }
            if let Some(level) = walk(&item.children, key, depth + 1) {
                return Some(level);
            }
        }
        None
    }
    walk(items, key, 1)
}

/// Depth-first traversal. The visitor returns whether to descend into the
/// item's children.
fn collect(items: &[Item], visit: &mut impl FnMut(&Item) -> bool) {
    for item in items {
        if visit(item) {
            collect(&item.children, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("fruit", "Fruit").with_children([
                Item::new("apple", "Apple"),
                Item::new("kiwi", "Kiwi").with_disabled(true),
            ]),
            Item::new("veg", "Vegetables").with_children([Item::new("leek", "Leek")]),
        ]
    }

    #[test]
    fn test_flat_keys_document_order() {
        let keys = flat_keys(&sample());
        let expected: Vec<ItemKey> = ["fruit", "apple", "kiwi", "veg", "leek"]
            .into_iter()
            .map(ItemKey::from)
            .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_navigable_keys_skip_disabled() {
        let keys = navigable_keys(&sample());
        assert!(!keys.contains(&ItemKey::from("kiwi")));
        assert!(keys.contains(&ItemKey::from("apple")));
    }

    #[test]
    fn test_visible_keys_follow_expansion() {
        let items = sample();
        let mut expanded = HashSet::new();

        // Nothing expanded: only roots are visible.
        assert_eq!(visible_keys(&items, &expanded).len(), 2);

        expanded.insert(ItemKey::from("fruit"));
        let keys = visible_keys(&items, &expanded);
        assert!(keys.contains(&ItemKey::from("apple")));
        assert!(!keys.contains(&ItemKey::from("leek")));
    }

    #[test]
    fn test_find_and_level() {
        let items = sample();
        assert_eq!(find(&items, &ItemKey::from("leek")).map(|i| i.label.as_str()), Some("Leek"));
        assert_eq!(level_of(&items, &ItemKey::from("veg")), Some(1));
        assert_eq!(level_of(&items, &ItemKey::from("apple")), Some(2));
        assert_eq!(level_of(&items, &ItemKey::from("missing")), None);
    }
}
