//! The navigation interaction state machine.
//!
//! All pointer, keyboard, and viewport input funnels through
//! [`InteractionState::handle`], which updates the state and returns the
//! side effects the host must apply. Rendering is a pure projection of
//! this state, so replaying the same events always produces the same
//! markup.

use crate::{
    focus::{FocusDirection, FocusManager},
    menu::MenuTree,
};
use smallvec::SmallVec;

/// The viewport mode the widget is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewport {
    /// Desktop widths: inline menu with hover and click submenus.
    #[default]
    Desktop,
    /// Mobile widths: burger trigger and slide-in drawer.
    Mobile,
}

/// An input event driving the state machine.
///
/// Events that do not match their preconditions are ignored, so hosts
/// can forward raw input without filtering it first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// The pointer entered a top-level item.
    PointerEnter(String),
    /// The pointer left a top-level item.
    PointerLeave(String),
    /// A top-level link with a submenu was clicked.
    TriggerClick(String),
    /// The `Escape` key was pressed.
    Escape,
    /// Move focus towards the last submenu link.
    FocusNext,
    /// Move focus towards the first submenu link.
    FocusPrev,
    /// The burger trigger was activated.
    DrawerToggle,
    /// The drawer was dismissed via backdrop, outside click, or close
    /// control.
    DrawerDismiss,
    /// An expandable drawer section was toggled.
    ExpandToggle(String),
    /// The viewport crossed the configured breakpoint.
    ViewportChange(Viewport),
    /// The widget is being detached from the page.
    Detach,
}

/// A side effect the host must apply after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEffect {
    /// Prevent the page body from scrolling behind the drawer.
    LockScroll,
    /// Restore page scrolling.
    UnlockScroll,
    /// Move keyboard focus to the submenu link with the given item id.
    FocusLink(String),
}

/// The side effects produced by a single transition.
pub type MenuEffects = SmallVec<[MenuEffect; 2]>;

/// The interaction state of the navigation widget.
///
/// At most one desktop submenu is open at a time, while any number of
/// drawer sections may be expanded at once. Desktop submenu state and
/// drawer state never interfere with each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// The id of the open desktop submenu.
    active_submenu: Option<String>,
    /// Whether the mobile drawer is open.
    drawer_open: bool,
    /// Ids of the expanded drawer sections.
    expanded_items: Vec<String>,
    /// The current viewport mode.
    viewport: Viewport,
    /// The focus cursor over the open submenu.
    focus: FocusManager,
}

impl InteractionState {
    /// Creates a new instance for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Returns the id of the open desktop submenu.
    pub fn active_submenu(&self) -> Option<&str> {
        self.active_submenu.as_deref()
    }

    /// Returns `true` if the mobile drawer is open.
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Returns `true` if the identified drawer section is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_items.iter().any(|item| item == id)
    }

    /// Returns the current viewport mode.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the focus cursor position over the open submenu.
    pub fn focus_position(&self) -> Option<usize> {
        self.focus.position()
    }

    /// Applies an event to the state machine and returns the side
    /// effects to perform.
    pub fn handle(&mut self, tree: &MenuTree, event: MenuEvent) -> MenuEffects {
        let mut effects = MenuEffects::new();
        match event {
            MenuEvent::PointerEnter(id) => {
                if self.viewport == Viewport::Desktop
                    && tree.is_expandable(&id)
                    && self.active_submenu.as_deref() != Some(id.as_str())
                {
                    self.open_submenu(id);
                }
            }
            MenuEvent::PointerLeave(id) => {
                if self.active_submenu.as_deref() == Some(id.as_str()) {
                    self.close_submenu();
                }
            }
            MenuEvent::TriggerClick(id) => {
                if self.active_submenu.as_deref() == Some(id.as_str()) {
                    self.close_submenu();
                } else if tree.is_expandable(&id) {
                    self.open_submenu(id);
                }
            }
            MenuEvent::Escape => {
                if self.active_submenu.is_some() {
                    self.close_submenu();
                } else if self.drawer_open {
                    self.close_drawer(&mut effects);
                }
            }
            MenuEvent::FocusNext => {
                self.move_focus(tree, FocusDirection::Next, &mut effects);
            }
            MenuEvent::FocusPrev => {
                self.move_focus(tree, FocusDirection::Prev, &mut effects);
            }
            MenuEvent::DrawerToggle => {
                if self.drawer_open {
                    self.close_drawer(&mut effects);
                } else {
                    self.open_drawer(&mut effects);
                }
            }
            MenuEvent::DrawerDismiss => {
                if self.drawer_open {
                    self.close_drawer(&mut effects);
                }
            }
            MenuEvent::ExpandToggle(id) => {
                if let Some(index) = self.expanded_items.iter().position(|item| *item == id) {
                    self.expanded_items.remove(index);
                } else {
                    self.expanded_items.push(id);
                }
            }
            MenuEvent::ViewportChange(viewport) => {
                let crossed_to_desktop =
                    self.viewport == Viewport::Mobile && viewport == Viewport::Desktop;
                self.viewport = viewport;
                if crossed_to_desktop && self.drawer_open {
                    self.close_drawer(&mut effects);
                }
            }
            MenuEvent::Detach => {
                *self = Self::default();
                effects.push(MenuEffect::UnlockScroll);
            }
        }
        effects
    }

    /// Opens the identified submenu, closing any other.
    fn open_submenu(&mut self, id: String) {
        tracing::debug!("open the `{id}` submenu");
        self.active_submenu = Some(id);
        self.focus.reset();
    }

    /// Closes the open submenu.
    fn close_submenu(&mut self) {
        self.active_submenu = None;
        self.focus.reset();
    }

    /// Opens the drawer and locks page scrolling.
    fn open_drawer(&mut self, effects: &mut MenuEffects) {
        tracing::debug!("open the mobile drawer");
        self.drawer_open = true;
        effects.push(MenuEffect::LockScroll);
    }

    /// Closes the drawer and restores page scrolling.
    fn close_drawer(&mut self, effects: &mut MenuEffects) {
        self.drawer_open = false;
        effects.push(MenuEffect::UnlockScroll);
    }

    /// Moves the submenu focus cursor and emits the focus effect.
    fn move_focus(
        &mut self,
        tree: &MenuTree,
        direction: FocusDirection,
        effects: &mut MenuEffects,
    ) {
        let Some(item) = self.active_submenu.as_deref().and_then(|id| tree.get(id)) else {
            return;
        };
        if let Some(index) = self.focus.move_focus(direction, item.children.len()) {
            if let Some(child) = item.children.get(index) {
                effects.push(MenuEffect::FocusLink(child.id.clone()));
            }
        }
    }
}
