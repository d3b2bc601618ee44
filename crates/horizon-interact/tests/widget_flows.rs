//! Integration tests composing the engine's controllers the way a host
//! widget would: a listbox with roving focus and selection, a dropdown menu
//! behind an overlay, and a tree with expansion-driven visibility.

use std::cell::Cell;
use std::rc::Rc;

use horizon_interact::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct NullHandle;

impl FocusHandle for NullHandle {
    fn focus(&self) {}
    fn scroll_into_view(&self) {}
    fn origin(&self) -> Point {
        Point::ZERO
    }
}

#[test]
fn listbox_keyboard_selection_flow() {
    init_tracing();
    let items = vec![
        Item::new("small", "Small"),
        Item::new("medium", "Medium"),
        Item::new("large", "Large"),
    ];

    let mut resolver = RoleResolver::new();
    let config = CollectionConfig::for_pattern(Pattern::Listbox)
        .with_selection_mode(SelectionMode::Single);
    let attrs = resolver.resolve_collection(&config);
    assert_eq!(attrs.role, Some(CollectionRole::ListBox));
    assert!(!attrs.multiselectable);

    let mut roving = RovingFocusController::new(Topology::Linear).with_loop(true);
    for item in &items {
        roving.register(item.key.clone(), Box::new(NullHandle));
    }
    roving.set_items(horizon_interact::item::navigable_keys(&items));

    let mut selection = SelectionController::new(SelectionMode::Single);

    // Arrow in, move down once, select with Space.
    assert!(roving.handle_key(Key::ArrowDown, KeyboardModifiers::NONE));
    assert!(roving.handle_key(Key::ArrowDown, KeyboardModifiers::NONE));
    let active = roving.active().cloned().unwrap();
    assert_eq!(active, ItemKey::from("medium"));

    assert_eq!(
        action_for(Key::Space, KeyboardModifiers::NONE),
        Some(KeyAction::Activate)
    );
    selection.toggle(&active, SelectionCause::Keyboard);
    assert!(selection.is_selected(&active));

    // The item's accessible node reflects the selection.
    let item_attrs = resolver.resolve_item(
        &config,
        &ItemConfig::new().with_selected(selection.is_selected(&active)),
    );
    assert_eq!(item_attrs.role, Some(ItemRole::ListBoxOption));
    assert_eq!(item_attrs.selection_attribute, SelectionAttribute::Selected);
    assert_eq!(item_attrs.selected, Some(true));
}

#[test]
fn disabled_items_are_skipped_by_navigation() {
    let items = vec![
        Item::new("a", "A"),
        Item::new("b", "B").with_disabled(true),
        Item::new("c", "C"),
    ];

    let mut roving = RovingFocusController::new(Topology::Linear);
    for item in &items {
        roving.register(item.key.clone(), Box::new(NullHandle));
    }
    roving.set_items(horizon_interact::item::navigable_keys(&items));

    roving.navigate_to(&ItemKey::from("a"));
    roving.handle_key(Key::ArrowDown, KeyboardModifiers::NONE);
    assert_eq!(roving.active(), Some(&ItemKey::from("c")));
}

struct MenuHost {
    focusables: usize,
    scroll_locked: Rc<Cell<bool>>,
}

impl OverlayHost for MenuHost {
    fn focusable_count(&self) -> usize {
        self.focusables
    }

    fn focus_focusable(&mut self, _index: usize) {}

    fn lock_scroll(&mut self) -> horizon_interact::Result<()> {
        self.scroll_locked.set(true);
        Ok(())
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locked.set(false);
    }

    fn set_background_inert(&mut self, _inert: bool) -> horizon_interact::Result<()> {
        Ok(())
    }
}

struct CountingTrigger {
    focused: Rc<Cell<usize>>,
}

impl FocusHandle for CountingTrigger {
    fn focus(&self) {
        self.focused.set(self.focused.get() + 1);
    }

    fn scroll_into_view(&self) {}

    fn origin(&self) -> Point {
        Point::ZERO
    }
}

#[test]
fn dropdown_menu_overlay_flow() {
    init_tracing();
    let scroll_locked = Rc::new(Cell::new(false));
    let trigger_focused = Rc::new(Cell::new(0));

    let mut overlay = OverlayController::new(Box::new(MenuHost {
        focusables: 3,
        scroll_locked: scroll_locked.clone(),
    }))
    .with_trigger(Box::new(CountingTrigger {
        focused: trigger_focused.clone(),
    }));

    let closed_count = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let closed_clone = closed_count.clone();
    overlay.closed.connect(move |()| {
        closed_clone.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    });

    overlay.toggle().unwrap();
    assert!(overlay.is_open());
    // A plain menu is not modal-like: the page keeps scrolling.
    assert!(!scroll_locked.get());

    // Navigate the menu items virtually while focus sits on the trigger.
    let mut virtual_focus = ActiveDescendantController::new(Topology::Linear).with_loop(true);
    let keys: Vec<ItemKey> = ["new", "open", "save"].into_iter().map(ItemKey::from).collect();
    for (i, key) in keys.iter().enumerate() {
        virtual_focus.register(key.clone(), accesskit::NodeId(i as u64), Box::new(NullHandle));
    }
    virtual_focus.set_items(keys);

    virtual_focus.handle_key(Key::ArrowDown, KeyboardModifiers::NONE);
    assert_eq!(virtual_focus.active(), Some(&ItemKey::from("new")));
    assert_eq!(virtual_focus.active_descendant(), Some(accesskit::NodeId(0)));

    // Escape closes, restores trigger focus, and announces the close.
    assert!(overlay.handle_escape());
    assert!(!overlay.is_open());
    assert_eq!(trigger_focused.get(), 1);
    assert_eq!(closed_count.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn modal_dialog_traps_focus_and_locks_scroll() {
    let scroll_locked = Rc::new(Cell::new(false));
    let mut overlay = OverlayController::modal(Box::new(MenuHost {
        focusables: 2,
        scroll_locked: scroll_locked.clone(),
    }));

    overlay.open().unwrap();
    assert!(scroll_locked.get());

    assert_eq!(overlay.handle_tab(false, Some(1)), TabOutcome::FocusControl(0));
    assert_eq!(overlay.handle_tab(true, Some(0)), TabOutcome::FocusControl(1));

    overlay.close();
    assert!(!scroll_locked.get());
}

#[test]
fn tree_expansion_drives_visibility_and_levels() {
    let items = vec![
        Item::new("clothing", "Clothing").with_children([
            Item::new("shirts", "Shirts"),
            Item::new("shoes", "Shoes"),
        ]),
        Item::new("books", "Books"),
    ];

    let mut expansion = ExpansionController::new().with_multiple(true);
    let visible = horizon_interact::item::visible_keys(&items, expansion.expanded());
    assert_eq!(visible.len(), 2);

    expansion.expand(&ItemKey::from("clothing"));
    let visible = horizon_interact::item::visible_keys(&items, expansion.expanded());
    assert_eq!(visible.len(), 4);

    // Tree items carry their depth.
    let mut resolver = RoleResolver::new();
    let tree = CollectionConfig::for_pattern(Pattern::Tree);
    let level = horizon_interact::item::level_of(&items, &ItemKey::from("shirts")).unwrap();
    let attrs = resolver.resolve_item(&tree, &ItemConfig::new().with_level(level));
    assert_eq!(attrs.role, Some(ItemRole::TreeItem));
    assert_eq!(attrs.level, Some(2));
}
