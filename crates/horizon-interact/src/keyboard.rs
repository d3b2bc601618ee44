//! Keyboard contract.
//!
//! The engine consumes a small, fixed set of keys. Hosts translate their
//! platform events into [`Key`] and [`KeyboardModifiers`] and ask
//! [`action_for`] which logical action, if any, the press maps to. The
//! mapping is not configurable; keys outside the set (and chords with
//! control, alt or meta held) pass through to the host untouched.

use crate::navigation::Direction;

/// The keys the interaction engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Enter / Return.
    Enter,
    /// Spacebar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
}

/// Modifier key state accompanying a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt key held.
    pub alt: bool,
    /// Meta (Command / Windows) key held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift held, nothing else.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };
}

/// The logical action a key press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the active item in a direction.
    Move(Direction),
    /// Jump forward by a page.
    PageForward,
    /// Jump backward by a page.
    PageBackward,
    /// Activate the active item (select, toggle, trigger).
    Activate,
    /// Dismiss the current overlay.
    Dismiss,
    /// Move real focus forward out of or through the composite.
    TabForward,
    /// Move real focus backward.
    TabBackward,
}

/// Map a key press to its logical action.
///
/// Returns `None` for chords with control, alt or meta held: those belong
/// to the host (or the platform), never to the engine.
pub fn action_for(key: Key, modifiers: KeyboardModifiers) -> Option<KeyAction> {
    if modifiers.control || modifiers.alt || modifiers.meta {
        return None;
    }
    let action = match key {
        Key::ArrowUp => KeyAction::Move(Direction::Up),
        Key::ArrowDown => KeyAction::Move(Direction::Down),
        Key::ArrowLeft => KeyAction::Move(Direction::Left),
        Key::ArrowRight => KeyAction::Move(Direction::Right),
        Key::Home => KeyAction::Move(Direction::First),
        Key::End => KeyAction::Move(Direction::Last),
        Key::PageUp => KeyAction::PageBackward,
        Key::PageDown => KeyAction::PageForward,
        Key::Enter | Key::Space => KeyAction::Activate,
        Key::Escape => KeyAction::Dismiss,
        Key::Tab if modifiers.shift => KeyAction::TabBackward,
        Key::Tab => KeyAction::TabForward,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_mapping() {
        assert_eq!(
            action_for(Key::ArrowDown, KeyboardModifiers::NONE),
            Some(KeyAction::Move(Direction::Down))
        );
        assert_eq!(
            action_for(Key::Home, KeyboardModifiers::NONE),
            Some(KeyAction::Move(Direction::First))
        );
    }

    #[test]
    fn test_tab_direction_follows_shift() {
        assert_eq!(
            action_for(Key::Tab, KeyboardModifiers::NONE),
            Some(KeyAction::TabForward)
        );
        assert_eq!(
            action_for(Key::Tab, KeyboardModifiers::SHIFT),
            Some(KeyAction::TabBackward)
        );
    }

    #[test]
    fn test_chords_pass_through() {
        let ctrl = KeyboardModifiers {
            control: true,
            ..KeyboardModifiers::NONE
        };
        assert_eq!(action_for(Key::ArrowDown, ctrl), None);
        assert_eq!(action_for(Key::Enter, ctrl), None);
    }
}
