//! Space-delimited CSS class lists.

use smallvec::SmallVec;
use std::fmt;

/// A space-delimited list of CSS classes.
///
/// Modifier classes are switched with [`set()`](Class::set), which keeps
/// class membership a pure function of widget state rather than a series
/// of imperative toggles.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    /// Class names in insertion order.
    classes: SmallVec<[&'static str; 4]>,
}

impl Class {
    /// Creates a new instance, splitting `class` on ASCII whitespace.
    pub fn new(class: &'static str) -> Self {
        Self {
            classes: class.split_ascii_whitespace().collect(),
        }
    }

    /// Adds a class to the list, ignoring duplicates.
    pub fn add(&mut self, class: &'static str) {
        if !class.is_empty() && !self.contains(class) {
            self.classes.push(class);
        }
    }

    /// Removes a class from the list.
    pub fn remove(&mut self, class: &'static str) {
        self.classes.retain(|s| *s != class);
    }

    /// Toggles a class in the list.
    pub fn toggle(&mut self, class: &'static str) {
        if self.contains(class) {
            self.remove(class);
        } else {
            self.add(class);
        }
    }

    /// Adds the class when `on` is `true` and removes it otherwise.
    pub fn set(&mut self, class: &'static str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    /// Returns `true` if the list contains the given class.
    pub fn contains(&self, class: &'static str) -> bool {
        self.classes.iter().any(|s| *s == class)
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Formats the list as a space-delimited string.
    pub fn format(&self) -> String {
        self.classes.join(" ")
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl From<&'static str> for Class {
    fn from(class: &'static str) -> Self {
        Self::new(class)
    }
}

#[cfg(test)]
mod tests {
    use super::Class;

    #[test]
    fn it_formats_class_lists() {
        let mut class = Class::new("navbar__submenu");
        class.add("navbar__submenu--open");
        assert_eq!(class.format(), "navbar__submenu navbar__submenu--open");

        class.remove("navbar__submenu--open");
        assert_eq!(class.to_string(), "navbar__submenu");
    }

    #[test]
    fn it_sets_modifier_classes() {
        let mut class = Class::new("navbar__mobile-menu");
        class.set("navbar__mobile-menu--open", true);
        class.set("navbar__mobile-menu--open", true);
        assert_eq!(class.format(), "navbar__mobile-menu navbar__mobile-menu--open");

        class.set("navbar__mobile-menu--open", false);
        assert_eq!(class.format(), "navbar__mobile-menu");
    }

    #[test]
    fn it_splits_whitespace_on_construction() {
        let class = Class::from("navbar__item  is-active");
        assert!(class.contains("navbar__item"));
        assert!(class.contains("is-active"));
        assert_eq!(class.format(), "navbar__item is-active");
    }

    #[test]
    fn it_toggles_classes() {
        let mut class = Class::new("navbar__item");
        class.toggle("navbar__item--active");
        assert!(class.contains("navbar__item--active"));

        class.toggle("navbar__item--active");
        assert!(!class.contains("navbar__item--active"));
        assert!(!class.is_empty());
    }
}
