//! Submenu focus tracking.

/// The direction of a focus movement inside an open submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Towards the last link.
    Next,
    /// Towards the first link.
    Prev,
}

/// A cursor over the links of the open submenu.
///
/// An unfocused list always focuses its first link first, and the cursor
/// clamps at both ends instead of wrapping around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusManager {
    /// The index of the focused link, if any.
    position: Option<usize>,
}

impl FocusManager {
    /// Creates a new instance with no link focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of the focused link.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Clears the cursor.
    pub fn reset(&mut self) {
        self.position = None;
    }

    /// Moves the cursor within a list of `len` links.
    ///
    /// Returns the new index when the cursor moved and `None` when the
    /// movement was clamped at either end or the list is empty.
    pub fn move_focus(&mut self, direction: FocusDirection, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let next = match (self.position, direction) {
            (None, _) => 0,
            // A stale cursor from a replaced list snaps back to the start.
            (Some(index), _) if index >= len => 0,
            (Some(index), FocusDirection::Next) if index + 1 < len => index + 1,
            (Some(index), FocusDirection::Prev) if index > 0 => index - 1,
            (Some(_), _) => return None,
        };
        self.position = Some(next);
        Some(next)
    }
}
