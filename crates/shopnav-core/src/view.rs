//! Pure projection of menu data and interaction state into a view model.
//!
//! [`render`] has no side effects: rendering twice with the same inputs
//! yields the same view, and re-rendering never duplicates entries.

use crate::{
    class::Class,
    menu::{MenuItem, MenuTree},
    state::InteractionState,
};

/// The CSS class vocabulary of the navigation widget.
///
/// Each field holds a single class name; modifiers live in their own
/// fields so the renderer can project them from state. The defaults
/// follow the `navbar__block--modifier` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavClasses {
    /// The root `nav` element.
    pub root: &'static str,
    /// The brand slot.
    pub brand: &'static str,
    /// The desktop menu list.
    pub list: &'static str,
    /// A desktop top-level item.
    pub item: &'static str,
    /// Modifier for the item whose submenu is open.
    pub item_active: &'static str,
    /// A desktop top-level link.
    pub link: &'static str,
    /// A desktop submenu panel.
    pub submenu: &'static str,
    /// Modifier for the open submenu panel.
    pub submenu_open: &'static str,
    /// A desktop submenu link.
    pub submenu_link: &'static str,
    /// The burger trigger button.
    pub trigger: &'static str,
    /// The slide-in drawer panel.
    pub drawer: &'static str,
    /// Modifier for the open drawer panel.
    pub drawer_open: &'static str,
    /// The backdrop behind the open drawer.
    pub backdrop: &'static str,
    /// Modifier for the visible backdrop.
    pub backdrop_visible: &'static str,
    /// The drawer close control.
    pub close: &'static str,
    /// The drawer menu list.
    pub mobile_list: &'static str,
    /// A drawer item.
    pub mobile_item: &'static str,
    /// A drawer link.
    pub mobile_link: &'static str,
    /// A drawer expand control.
    pub mobile_expand: &'static str,
    /// A drawer submenu list.
    pub mobile_submenu: &'static str,
    /// Modifier for an expanded drawer submenu list.
    pub mobile_submenu_open: &'static str,
}

impl Default for NavClasses {
    fn default() -> Self {
        Self {
            root: "navbar",
            brand: "navbar__brand",
            list: "navbar__list",
            item: "navbar__item",
            item_active: "navbar__item--active",
            link: "navbar__link",
            submenu: "navbar__submenu",
            submenu_open: "navbar__submenu--open",
            submenu_link: "navbar__submenu-link",
            trigger: "navbar__toggle",
            drawer: "navbar__mobile-menu",
            drawer_open: "navbar__mobile-menu--open",
            backdrop: "navbar__backdrop",
            backdrop_visible: "navbar__backdrop--visible",
            close: "navbar__close",
            mobile_list: "navbar__mobile-list",
            mobile_item: "navbar__mobile-item",
            mobile_link: "navbar__mobile-link",
            mobile_expand: "navbar__mobile-expand",
            mobile_submenu: "navbar__mobile-submenu",
            mobile_submenu_open: "navbar__mobile-submenu--open",
        }
    }
}

/// A rendered link inside a submenu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    /// The item id.
    pub id: String,
    /// The visible label.
    pub label: String,
    /// The navigation target.
    pub url: String,
}

/// A top-level entry of the desktop menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    /// The item id.
    pub id: String,
    /// The visible label.
    pub label: String,
    /// The navigation target.
    pub url: String,
    /// Whether this entry's submenu is open.
    pub open: bool,
    /// The `aria-expanded` value of the entry's link.
    pub aria_expanded: &'static str,
    /// Classes of the item container.
    pub class: Class,
    /// Classes of the submenu panel.
    pub submenu_class: Class,
    /// The submenu links.
    pub links: Vec<MenuLink>,
}

impl DesktopEntry {
    /// Returns `true` if the entry has a submenu.
    pub fn has_submenu(&self) -> bool {
        !self.links.is_empty()
    }
}

/// An entry of the mobile drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileEntry {
    /// The item id.
    pub id: String,
    /// The visible label.
    pub label: String,
    /// The navigation target.
    pub url: String,
    /// Whether this entry's section is expanded.
    pub expanded: bool,
    /// The `aria-expanded` value of the expand control.
    pub aria_expanded: &'static str,
    /// Classes of the section list.
    pub submenu_class: Class,
    /// The section links.
    pub links: Vec<MenuLink>,
}

impl MobileEntry {
    /// Returns `true` if the entry has an expandable section.
    pub fn has_submenu(&self) -> bool {
        !self.links.is_empty()
    }
}

/// The mobile drawer and its trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileMenu {
    /// Whether the drawer is open.
    pub open: bool,
    /// The `aria-expanded` value of the burger trigger.
    pub aria_expanded: &'static str,
    /// Classes of the drawer panel.
    pub class: Class,
    /// Classes of the backdrop.
    pub backdrop_class: Class,
    /// The drawer entries.
    pub entries: Vec<MobileEntry>,
}

/// The complete view model for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    /// The desktop entries in authored order.
    pub desktop: Vec<DesktopEntry>,
    /// The mobile drawer.
    pub mobile: MobileMenu,
}

/// Projects the menu tree and interaction state into a view model.
pub fn render(tree: &MenuTree, state: &InteractionState, classes: &NavClasses) -> MenuView {
    let desktop = tree
        .items()
        .iter()
        .map(|item| desktop_entry(item, state, classes))
        .collect();

    let drawer_open = state.is_drawer_open();
    let mut drawer_class = Class::new(classes.drawer);
    drawer_class.set(classes.drawer_open, drawer_open);
    let mut backdrop_class = Class::new(classes.backdrop);
    backdrop_class.set(classes.backdrop_visible, drawer_open);
    let mobile = MobileMenu {
        open: drawer_open,
        aria_expanded: aria_bool(drawer_open),
        class: drawer_class,
        backdrop_class,
        entries: tree
            .items()
            .iter()
            .map(|item| mobile_entry(item, state, classes))
            .collect(),
    };
    MenuView { desktop, mobile }
}

/// Projects one top-level item for the desktop menu.
fn desktop_entry(item: &MenuItem, state: &InteractionState, classes: &NavClasses) -> DesktopEntry {
    let links = submenu_links(item);
    let open = !links.is_empty() && state.active_submenu() == Some(item.id.as_str());
    let mut class = Class::new(classes.item);
    class.set(classes.item_active, open);
    let mut submenu_class = Class::new(classes.submenu);
    submenu_class.set(classes.submenu_open, open);
    DesktopEntry {
        id: item.id.clone(),
        label: item.label.clone(),
        url: item.url.clone(),
        open,
        aria_expanded: aria_bool(open),
        class,
        submenu_class,
        links,
    }
}

/// Projects one top-level item for the mobile drawer.
fn mobile_entry(item: &MenuItem, state: &InteractionState, classes: &NavClasses) -> MobileEntry {
    let links = submenu_links(item);
    let expanded = !links.is_empty() && state.is_expanded(&item.id);
    let mut submenu_class = Class::new(classes.mobile_submenu);
    submenu_class.set(classes.mobile_submenu_open, expanded);
    MobileEntry {
        id: item.id.clone(),
        label: item.label.clone(),
        url: item.url.clone(),
        expanded,
        aria_expanded: aria_bool(expanded),
        submenu_class,
        links,
    }
}

/// Flattens an item's children into submenu links, ignoring deeper
/// nesting.
fn submenu_links(item: &MenuItem) -> Vec<MenuLink> {
    item.children
        .iter()
        .map(|child| MenuLink {
            id: child.id.clone(),
            label: child.label.clone(),
            url: child.url.clone(),
        })
        .collect()
}

/// Formats a boolean for an `aria-*` attribute.
fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::{NavClasses, render};
    use crate::{
        menu::{MenuItem, MenuTree},
        state::{InteractionState, MenuEvent, Viewport},
    };

    fn storefront_tree() -> MenuTree {
        MenuTree::from(vec![
            MenuItem::new("tops", "Tops", "/tops")
                .child(MenuItem::new("kurtis", "Kurtis", "/tops/kurtis"))
                .child(MenuItem::new("shirts", "Shirts", "/tops/shirts")),
            MenuItem::new("bottoms", "Bottoms", "/bottoms")
                .child(MenuItem::new("jeans", "Jeans", "/bottoms/jeans")),
            MenuItem::new("sale", "Sale", "/sale"),
        ])
    }

    #[test]
    fn it_renders_the_same_view_twice() {
        let tree = storefront_tree();
        let mut state = InteractionState::default();
        let classes = NavClasses::default();
        state.handle(&tree, MenuEvent::PointerEnter("tops".to_owned()));

        let first = render(&tree, &state, &classes);
        let second = render(&tree, &state, &classes);
        assert_eq!(first, second);
        assert_eq!(second.desktop.len(), 3);
        assert_eq!(second.mobile.entries.len(), 3);
    }

    #[test]
    fn it_preserves_item_order() {
        let view = render(
            &storefront_tree(),
            &InteractionState::default(),
            &NavClasses::default(),
        );
        let labels: Vec<&str> = view.desktop.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, ["Tops", "Bottoms", "Sale"]);
    }

    #[test]
    fn it_marks_the_open_submenu() {
        let tree = storefront_tree();
        let mut state = InteractionState::default();
        let classes = NavClasses::default();
        state.handle(&tree, MenuEvent::PointerEnter("tops".to_owned()));

        let view = render(&tree, &state, &classes);
        let tops = &view.desktop[0];
        assert!(tops.open);
        assert_eq!(tops.aria_expanded, "true");
        assert!(tops.class.contains("navbar__item--active"));
        assert!(tops.submenu_class.contains("navbar__submenu--open"));

        let bottoms = &view.desktop[1];
        assert!(!bottoms.open);
        assert_eq!(bottoms.aria_expanded, "false");
        assert!(!bottoms.submenu_class.contains("navbar__submenu--open"));
    }

    #[test]
    fn it_renders_the_embedded_storefront_scenario() {
        let data = r#"[
            {"id": "1", "label": "Tops", "url": "/tops", "children": [
                {"id": "1-1", "label": "Kurtis", "url": "/tops/kurtis"},
                {"id": "1-2", "label": "Shirts", "url": "/tops/shirts"}
            ]},
            {"id": "2", "label": "Sale", "url": "/sale"}
        ]"#;
        let tree = MenuTree::parse(data).unwrap();
        let mut state = InteractionState::default();
        state.handle(&tree, MenuEvent::PointerEnter("1".to_owned()));

        let view = render(&tree, &state, &NavClasses::default());
        let tops = &view.desktop[0];
        assert!(tops.has_submenu());
        assert_eq!(tops.aria_expanded, "true");
        assert_eq!(tops.links.len(), 2);
        assert_eq!(tops.links[0].label, "Kurtis");
        assert_eq!(tops.links[0].url, "/tops/kurtis");

        let sale = &view.desktop[1];
        assert!(!sale.has_submenu());
        assert_eq!(sale.aria_expanded, "false");
    }

    #[test]
    fn it_projects_drawer_state() {
        let tree = storefront_tree();
        let mut state = InteractionState::new(Viewport::Mobile);
        let classes = NavClasses::default();
        state.handle(&tree, MenuEvent::DrawerToggle);
        state.handle(&tree, MenuEvent::ExpandToggle("tops".to_owned()));

        let view = render(&tree, &state, &classes);
        assert!(view.mobile.open);
        assert_eq!(view.mobile.aria_expanded, "true");
        assert!(view.mobile.class.contains("navbar__mobile-menu--open"));
        assert!(view.mobile.backdrop_class.contains("navbar__backdrop--visible"));

        let tops = &view.mobile.entries[0];
        assert!(tops.expanded);
        assert!(tops.submenu_class.contains("navbar__mobile-submenu--open"));
        assert!(!view.mobile.entries[1].expanded);
    }

    #[test]
    fn it_projects_a_closed_drawer_by_default() {
        let view = render(
            &storefront_tree(),
            &InteractionState::default(),
            &NavClasses::default(),
        );
        assert!(!view.mobile.open);
        assert_eq!(view.mobile.aria_expanded, "false");
        assert!(!view.mobile.class.contains("navbar__mobile-menu--open"));
    }

    #[test]
    fn it_flattens_deep_nesting_into_links() {
        let tree = MenuTree::from(vec![MenuItem::new("a", "A", "/a").child(
            MenuItem::new("b", "B", "/b").child(MenuItem::new("c", "C", "/c")),
        )]);
        let view = render(&tree, &InteractionState::default(), &NavClasses::default());
        assert_eq!(view.desktop[0].links.len(), 1);
        assert_eq!(view.desktop[0].links[0].id, "b");
    }

    #[test]
    fn it_renders_an_empty_tree_as_an_empty_shell() {
        let view = render(
            &MenuTree::default(),
            &InteractionState::default(),
            &NavClasses::default(),
        );
        assert!(view.desktop.is_empty());
        assert!(view.mobile.entries.is_empty());
    }

    #[test]
    fn it_drops_a_stale_submenu_after_a_reload() {
        let tree = storefront_tree();
        let mut state = InteractionState::default();
        state.handle(&tree, MenuEvent::PointerEnter("tops".to_owned()));

        // A fresh load without the open item renders everything closed.
        let reloaded = MenuTree::from(vec![MenuItem::new("sale", "Sale", "/sale")]);
        let view = render(&reloaded, &state, &NavClasses::default());
        assert_eq!(view.desktop.len(), 1);
        assert!(!view.desktop[0].open);
    }
}
