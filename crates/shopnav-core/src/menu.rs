//! Menu tree data model.

use crate::{JsonValue, error::NavError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An entry in the navigation menu.
///
/// Submenus are a single level deep: the children of a top-level item
/// render as links and any deeper nesting is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// A stable identifier, unique across the whole tree.
    pub id: String,
    /// The visible label.
    pub label: String,
    /// The navigation target.
    pub url: String,
    /// Child entries forming the submenu.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Creates a new instance without children.
    pub fn new(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child entry, consuming and returning `self`.
    #[must_use]
    pub fn child(mut self, item: MenuItem) -> Self {
        self.children.push(item);
        self
    }

    /// Returns `true` if the item has a submenu.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// An ordered tree of menu items.
///
/// The tree is immutable after construction; a reload replaces it
/// wholesale rather than patching it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    items: Vec<MenuItem>,
}

impl MenuTree {
    /// Parses a menu tree from a JSON array of items.
    ///
    /// Fails with [`NavError::MalformedData`] when the payload is not
    /// valid JSON, does not match the item shape, or contains duplicate
    /// identifiers.
    pub fn parse(data: &str) -> Result<Self, NavError> {
        let tree: Self = serde_json::from_str(data)?;
        tree.ensure_unique_ids()?;
        Ok(tree)
    }

    /// Converts a JSON value into a menu tree.
    pub fn from_value(value: JsonValue) -> Result<Self, NavError> {
        let tree: Self = serde_json::from_value(value)?;
        tree.ensure_unique_ids()?;
        Ok(tree)
    }

    /// Returns the top-level items in authored order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns the number of top-level items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the tree has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the top-level item with the given identifier.
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns `true` if the identified top-level item has a submenu.
    pub fn is_expandable(&self, id: &str) -> bool {
        self.get(id).is_some_and(MenuItem::has_children)
    }

    /// Verifies that identifiers are unique across the whole tree.
    fn ensure_unique_ids(&self) -> Result<(), NavError> {
        let mut seen = HashSet::new();
        let mut stack: Vec<&MenuItem> = self.items.iter().collect();
        while let Some(item) = stack.pop() {
            if !seen.insert(item.id.as_str()) {
                let message = format!("duplicate menu item id `{}`", item.id);
                return Err(NavError::MalformedData(message));
            }
            stack.extend(item.children.iter());
        }
        Ok(())
    }
}

impl From<Vec<MenuItem>> for MenuTree {
    fn from(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}
