//! Slide-in drawers for the mobile navigation menu.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::fa_solid_icons::{FaChevronDown, FaXmark},
};
use shopnav_core::{
    SharedString,
    state::MenuEvent,
    view::{MobileEntry, MobileMenu, NavClasses},
};

/// A slide-in drawer listing the menu items on small screens.
///
/// The drawer renders from a [`MobileMenu`] view model and raises its
/// interactions as [`MenuEvent`]s, so the owning navigation bar keeps
/// the single source of truth for open and expanded state.
pub fn MobileDrawer(props: MobileDrawerProps) -> Element {
    let MobileMenu {
        open,
        aria_expanded: _,
        class,
        backdrop_class,
        entries,
    } = props.menu;
    let nav_id = props.nav_id.clone();
    let classes = props.classes;
    let on_event = props.on_event;
    let on_navigate = props.on_navigate;
    let items = entries
        .into_iter()
        .map(|entry| drawer_item(entry, &nav_id, &classes, on_event, on_navigate))
        .collect::<Vec<_>>();
    rsx! {
        div {
            class: "{backdrop_class}",
            onclick: move |_| on_event.call(MenuEvent::DrawerDismiss),
        }
        div {
            class: "{class}",
            aria_hidden: if !open { "true" },
            button {
                r#type: "button",
                class: "{classes.close}",
                aria_label: "{props.close_label}",
                onclick: move |_| on_event.call(MenuEvent::DrawerDismiss),
                Icon {
                    icon: FaXmark,
                    width: 16,
                    height: 16,
                }
            }
            ul {
                class: "{classes.mobile_list}",
                { items.into_iter() }
            }
        }
    }
}

/// The [`MobileDrawer`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct MobileDrawerProps {
    /// The identifier of the owning navigation bar, used as the prefix
    /// for drawer link ids.
    #[props(into, default = "navbar")]
    pub nav_id: SharedString,
    /// The CSS class vocabulary for the component.
    #[props(default)]
    pub classes: NavClasses,
    /// The drawer view model to render.
    pub menu: MobileMenu,
    /// An accessible label for the close control.
    #[props(into, default = "Close menu")]
    pub close_label: SharedString,
    /// An event handler to be called with the interaction events raised
    /// by the drawer.
    pub on_event: EventHandler<MenuEvent>,
    /// An event handler to be called with the target URL when a drawer
    /// link is activated.
    pub on_navigate: Option<EventHandler<String>>,
}

/// Renders one drawer entry with its optional expandable section.
fn drawer_item(
    entry: MobileEntry,
    nav_id: &SharedString,
    classes: &NavClasses,
    on_event: EventHandler<MenuEvent>,
    on_navigate: Option<EventHandler<String>>,
) -> Element {
    let MobileEntry {
        id,
        label,
        url,
        expanded: _,
        aria_expanded,
        submenu_class,
        links,
    } = entry;
    let has_submenu = !links.is_empty();
    let link_id = format!("{nav_id}-mobile-link-{id}");
    let expand_label = format!("Toggle {label}");
    let toggle_id = id.clone();
    let target = url.clone();
    let link_nodes = links
        .into_iter()
        .map(|link| {
            let target = link.url.clone();
            rsx! {
                li {
                    a {
                        class: "{classes.mobile_link}",
                        href: "{link.url}",
                        onclick: move |event: MouseEvent| {
                            on_event.call(MenuEvent::DrawerDismiss);
                            if let Some(handler) = on_navigate.as_ref() {
                                event.prevent_default();
                                handler.call(target.clone());
                            }
                        },
                        "{link.label}"
                    }
                }
            }
        })
        .collect::<Vec<_>>();
    rsx! {
        li {
            class: "{classes.mobile_item}",
            a {
                id: "{link_id}",
                class: "{classes.mobile_link}",
                href: "{url}",
                onclick: move |event: MouseEvent| {
                    on_event.call(MenuEvent::DrawerDismiss);
                    if let Some(handler) = on_navigate.as_ref() {
                        event.prevent_default();
                        handler.call(target.clone());
                    }
                },
                "{label}"
            }
            if has_submenu {
                button {
                    r#type: "button",
                    class: "{classes.mobile_expand}",
                    aria_label: "{expand_label}",
                    aria_haspopup: "true",
                    aria_expanded: "{aria_expanded}",
                    onclick: move |_| on_event.call(MenuEvent::ExpandToggle(toggle_id.clone())),
                    Icon {
                        icon: FaChevronDown,
                        width: 12,
                        height: 12,
                    }
                }
                ul {
                    class: "{submenu_class}",
                    { link_nodes.into_iter() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MobileDrawer;
    use dioxus::prelude::*;
    use shopnav_core::{
        menu::{MenuItem, MenuTree},
        state::InteractionState,
        view::{self, MenuView, NavClasses},
    };

    fn storefront_drawer() -> Element {
        let tree = MenuTree::from(vec![
            MenuItem::new("tops", "Tops", "/tops")
                .child(MenuItem::new("kurtis", "Kurtis", "/tops/kurtis")),
            MenuItem::new("sale", "Sale", "/sale"),
        ]);
        let MenuView { mobile, .. } =
            view::render(&tree, &InteractionState::default(), &NavClasses::default());
        rsx! {
            MobileDrawer {
                menu: mobile,
                on_event: move |_| {},
            }
        }
    }

    #[test]
    fn it_marks_expandable_entries_as_popup_triggers() {
        let mut vdom = VirtualDom::new(storefront_drawer);
        vdom.rebuild_in_place();

        let html = dioxus_ssr::render(&vdom);
        assert_eq!(html.matches(r#"aria-haspopup="true""#).count(), 1);
        assert!(html.contains(r#"aria-expanded="false""#));
    }
}
