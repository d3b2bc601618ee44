//! Role and attribute resolution.
//!
//! The [`RoleResolver`] turns declarative configuration into the concrete
//! attribute sets a host pushes into its accessible tree. Resolution is
//! deterministic and side-effect free apart from diagnostics: structural
//! misconfiguration (a multi-select marker on a role that cannot carry one,
//! an orientation on a role without orientation semantics, a level outside a
//! tree) degrades to the compliant subset of attributes and warns once per
//! resolver.
//!
//! Role precedence, highest first:
//! 1. an explicit role set by the host,
//! 2. the role implied by the collection's [`Pattern`],
//! 3. the role inherited from the parent collection's role,
//! 4. none.

use accesskit::{Node, Toggled};

use horizon_interact_core::{DiagnosticsSink, TracingSink};

use crate::pattern::{Pattern, SelectionAttribute};
use crate::role::{CollectionRole, ItemRole, Orientation};
use crate::selection::SelectionMode;

// ============================================================================
// Configuration inputs
// ============================================================================

/// Declarative configuration for a collection container.
#[derive(Debug, Clone, Default)]
pub struct CollectionConfig {
    /// The interaction pattern driving this collection, if any.
    pub pattern: Option<Pattern>,
    /// An explicit role, overriding the pattern.
    pub role: Option<CollectionRole>,
    /// The resolved role of the enclosing collection, for nested
    /// collections that inherit a role.
    pub parent_role: Option<CollectionRole>,
    /// The collection's selection mode.
    pub selection_mode: SelectionMode,
    /// An explicit orientation, overriding the role default.
    pub orientation: Option<Orientation>,
}

impl CollectionConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for a pattern.
    pub fn for_pattern(pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..Self::default()
        }
    }

    /// Set an explicit role.
    pub fn with_role(mut self, role: CollectionRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the enclosing collection's resolved role.
    pub fn with_parent_role(mut self, role: CollectionRole) -> Self {
        self.parent_role = Some(role);
        self
    }

    /// Set the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Set an explicit orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

/// Declarative configuration for a single item.
#[derive(Debug, Clone, Default)]
pub struct ItemConfig {
    /// An explicit item role, overriding the pattern and collection.
    pub role: Option<ItemRole>,
    /// Whether the host element already carries an implicit native role,
    /// in which case no role is emitted at all.
    pub has_native_role: bool,
    /// The item's selection state, if it participates in selection.
    pub selected: Option<bool>,
    /// The item's depth in a tree, starting at 1.
    pub level: Option<usize>,
}

impl ItemConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit item role.
    pub fn with_role(mut self, role: ItemRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Mark the host element as carrying an implicit native role.
    pub fn with_native_role(mut self) -> Self {
        self.has_native_role = true;
        self
    }

    /// Set the selection state.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Set the tree depth, starting at 1.
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }
}

// ============================================================================
// Resolved attribute sets
// ============================================================================

/// The resolved accessibility attributes of a collection container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionAttributes {
    /// The resolved role, if any.
    pub role: Option<CollectionRole>,
    /// Whether the multi-select marker is emitted.
    pub multiselectable: bool,
    /// The orientation to emit, present only when it differs from the
    /// role's built-in default.
    pub orientation: Option<Orientation>,
}

impl CollectionAttributes {
    /// Apply these attributes to an existing node.
    pub fn apply_to(&self, node: &mut Node) {
        if self.multiselectable {
            node.set_multiselectable();
        }
        if let Some(orientation) = self.orientation {
            node.set_orientation(orientation.to_accesskit());
        }
    }

    /// Build a fresh node carrying these attributes. Collections without a
    /// resolved role become generic containers.
    pub fn build_node(&self) -> Node {
        let role = self
            .role
            .map(CollectionRole::to_accesskit_role)
            .unwrap_or(accesskit::Role::GenericContainer);
        let mut node = Node::new(role);
        self.apply_to(&mut node);
        node
    }
}

/// The resolved accessibility attributes of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAttributes {
    /// The resolved item role, if any.
    pub role: Option<ItemRole>,
    /// Which attribute conveys selection state.
    pub selection_attribute: SelectionAttribute,
    /// The item's selection state, if it participates in selection.
    pub selected: Option<bool>,
    /// The item's tree depth, present only for tree items.
    pub level: Option<usize>,
}

impl ItemAttributes {
    /// Apply these attributes to an existing node.
    pub fn apply_to(&self, node: &mut Node) {
        if let Some(selected) = self.selected {
            match self.selection_attribute {
                SelectionAttribute::Selected => node.set_selected(selected),
                SelectionAttribute::Toggled => {
                    node.set_toggled(if selected { Toggled::True } else { Toggled::False });
                }
                SelectionAttribute::None => {}
            }
        }
        if let Some(level) = self.level {
            node.set_level(level);
        }
    }

    /// Build a fresh node carrying these attributes. Items without a
    /// resolved role become generic containers.
    pub fn build_node(&self) -> Node {
        let role = self
            .role
            .map(ItemRole::to_accesskit_role)
            .unwrap_or(accesskit::Role::GenericContainer);
        let mut node = Node::new(role);
        self.apply_to(&mut node);
        node
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolves collection and item attributes from declarative configuration.
///
/// One resolver serves one collection; its diagnostics deduplicate per
/// instance, so a misconfiguration reported during one resolution stays
/// silent on every later recomputation.
pub struct RoleResolver {
    sink: Box<dyn DiagnosticsSink>,
    scope: u64,
}

impl RoleResolver {
    /// Create a resolver that reports diagnostics through `tracing`.
    pub fn new() -> Self {
        Self {
            sink: Box::new(TracingSink::default()),
            scope: 0,
        }
    }

    /// Replace the diagnostics sink.
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Set the diagnostic scope identifying this collection in shared sinks.
    pub fn with_scope(mut self, scope: u64) -> Self {
        self.scope = scope;
        self
    }

    /// Resolve the attributes of a collection container.
    pub fn resolve_collection(&mut self, config: &CollectionConfig) -> CollectionAttributes {
        let role = Self::resolved_role(config);

        let multiselectable = if config.selection_mode == SelectionMode::Multiple {
            match role {
                Some(role) if role.supports_multiselectable() => true,
                _ => {
                    self.sink.warn_once(
                        self.scope,
                        "multiselectable-unsupported",
                        "multiple selection requested on a role without a \
                         multi-select marker; marker omitted",
                    );
                    false
                }
            }
        } else {
            false
        };

        let orientation = match (role.map(CollectionRole::default_orientation), config.orientation)
        {
            // The role has orientation semantics; emit only a non-default value.
            (Some(Some(default)), Some(requested)) if requested != default => Some(requested),
            (Some(Some(_)), _) => None,
            // Trees and grids have no orientation semantics.
            (Some(None), Some(_)) | (None, Some(_)) => {
                self.sink.warn_once(
                    self.scope,
                    "orientation-unsupported",
                    "orientation set on a role without orientation semantics; omitted",
                );
                None
            }
            _ => None,
        };

        CollectionAttributes {
            role,
            multiselectable,
            orientation,
        }
    }

    /// Resolve the attributes of an item within a collection.
    pub fn resolve_item(
        &mut self,
        collection: &CollectionConfig,
        item: &ItemConfig,
    ) -> ItemAttributes {
        let collection_role = Self::resolved_role(collection);

        let role = if item.has_native_role {
            None
        } else {
            item.role
                .or_else(|| collection.pattern.and_then(Pattern::item_role))
                .or_else(|| collection_role.and_then(CollectionRole::default_item_role))
        };

        let level = match item.level {
            Some(level) if role == Some(ItemRole::TreeItem) => Some(level),
            Some(_) => {
                self.sink.warn_once(
                    self.scope,
                    "level-outside-tree",
                    "level set on an item that is not a tree item; omitted",
                );
                None
            }
            None => None,
        };

        let selection_attribute = collection
            .pattern
            .map(Pattern::selection_attribute)
            .unwrap_or(SelectionAttribute::None);

        ItemAttributes {
            role,
            selection_attribute,
            selected: item.selected,
            level,
        }
    }

    fn resolved_role(config: &CollectionConfig) -> Option<CollectionRole> {
        config
            .role
            .or_else(|| config.pattern.and_then(Pattern::role))
            .or_else(|| {
                config
                    .parent_role
                    .and_then(CollectionRole::inherited_child_role)
            })
    }
}

impl Default for RoleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RoleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleResolver")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
