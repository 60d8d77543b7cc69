//! Responsive navigation bars with desktop submenus.

use crate::drawer::MobileDrawer;
use dioxus::{document, prelude::*};
use dioxus_free_icons::{
    Icon,
    icons::fa_solid_icons::{FaBars, FaChevronDown},
};
use shopnav_core::{
    SharedString,
    class::Class,
    loader::{MenuLoader, MenuSource},
    menu::{MenuItem, MenuTree},
    state::{InteractionState, MenuEffect, MenuEvent, Viewport},
    subscription::Subscriptions,
    view::{self, DesktopEntry, MenuView, NavClasses},
};
use std::{cell::RefCell, rc::Rc};

/// A responsive storefront navigation bar.
///
/// Menu items come from the `items` prop, the embedded `menu_data`
/// payload, or the remote `endpoint`, in that order of precedence; with
/// no source the bar renders an empty shell. All input funnels through
/// the interaction state machine, and the document-level listeners it
/// needs are detached when the component unmounts.
pub fn Navbar(props: NavbarProps) -> Element {
    let mut state = use_signal(InteractionState::default);
    let subscriptions = use_hook(|| Rc::new(RefCell::new(Subscriptions::new())));

    let source = if !props.items.is_empty() {
        MenuSource::Tree(MenuTree::from(props.items.clone()))
    } else if !props.menu_data.is_empty() {
        MenuSource::Inline(props.menu_data.to_string())
    } else if !props.endpoint.is_empty() {
        MenuSource::Remote(props.endpoint.to_string())
    } else {
        MenuSource::None
    };
    let menu = use_resource(move || {
        let loader = MenuLoader::new(source.clone());
        async move { loader.load_or_default().await }
    });

    let nav_id = props.id.clone();
    let dispatch = use_callback(move |event: MenuEvent| {
        let tree = match &*menu.read() {
            Some(tree) => tree.clone(),
            None => MenuTree::default(),
        };
        let effects = state.write().handle(&tree, event);
        apply_effects(&nav_id, &effects);
    });

    let escape_key = listener_key(&props.id, "escape");
    {
        let subscriptions = subscriptions.clone();
        use_future(move || {
            let escape_key = escape_key.clone();
            let subscriptions = subscriptions.clone();
            async move {
                let mut listener = document::eval(&attach_escape_listener(&escape_key));
                let cleanup = detach_listener(&escape_key, "keydown");
                subscriptions.borrow_mut().add(move || {
                    document::eval(&cleanup);
                });
                while let Ok(true) = listener.recv::<bool>().await {
                    dispatch.call(MenuEvent::Escape);
                }
            }
        });
    }

    let outside_key = listener_key(&props.id, "outside");
    {
        let classes = props.classes;
        let mobile_enabled = props.mobile;
        let subscriptions = subscriptions.clone();
        use_future(move || {
            let outside_key = outside_key.clone();
            let subscriptions = subscriptions.clone();
            async move {
                if !mobile_enabled {
                    return;
                }
                let script = attach_outside_listener(&outside_key, classes.drawer, classes.trigger);
                let mut listener = document::eval(&script);
                let cleanup = detach_listener(&outside_key, "click");
                subscriptions.borrow_mut().add(move || {
                    document::eval(&cleanup);
                });
                while let Ok(true) = listener.recv::<bool>().await {
                    if state.peek().is_drawer_open() {
                        dispatch.call(MenuEvent::DrawerDismiss);
                    }
                }
            }
        });
    }

    let viewport_key = listener_key(&props.id, "viewport");
    {
        let breakpoint = props.breakpoint;
        let subscriptions = subscriptions.clone();
        use_future(move || {
            let viewport_key = viewport_key.clone();
            let subscriptions = subscriptions.clone();
            async move {
                let script = attach_viewport_watcher(&viewport_key, breakpoint);
                let mut watcher = document::eval(&script);
                let cleanup = detach_viewport_watcher(&viewport_key);
                subscriptions.borrow_mut().add(move || {
                    document::eval(&cleanup);
                });
                while let Ok(desktop) = watcher.recv::<bool>().await {
                    let viewport = if desktop {
                        Viewport::Desktop
                    } else {
                        Viewport::Mobile
                    };
                    dispatch.call(MenuEvent::ViewportChange(viewport));
                }
            }
        });
    }

    {
        let subscriptions = subscriptions.clone();
        use_drop(move || {
            tracing::debug!("detach the navigation listeners");
            subscriptions.borrow_mut().cancel();
            document::eval("document.body.style.overflow = '';");
        });
    }

    let tree = match &*menu.read() {
        Some(tree) => tree.clone(),
        None => MenuTree::default(),
    };
    let MenuView { desktop, mobile } = view::render(&tree, &state.read(), &props.classes);
    let classes = props.classes;
    let item_prefix = props.id.clone();
    let items = desktop
        .into_iter()
        .map(|entry| desktop_item(entry, &item_prefix, &classes, dispatch, props.on_navigate))
        .collect::<Vec<_>>();
    let trigger_expanded = mobile.aria_expanded;
    rsx! {
        nav {
            id: "{props.id}",
            class: "{classes.root}",
            onkeydown: move |event| {
                let key = event.key();
                if key == Key::ArrowDown {
                    event.prevent_default();
                    dispatch.call(MenuEvent::FocusNext);
                } else if key == Key::ArrowUp {
                    event.prevent_default();
                    dispatch.call(MenuEvent::FocusPrev);
                }
            },
            if let Some(brand) = props.brand {
                div {
                    class: "{classes.brand}",
                    { brand }
                }
            }
            ul {
                class: "{classes.list}",
                { items.into_iter() }
            }
            if props.mobile {
                button {
                    r#type: "button",
                    class: "{classes.trigger}",
                    aria_label: "{props.trigger_label}",
                    aria_expanded: "{trigger_expanded}",
                    onclick: move |_| dispatch.call(MenuEvent::DrawerToggle),
                    Icon {
                        icon: FaBars,
                        width: 20,
                        height: 20,
                    }
                }
                if let Some(handler) = props.on_navigate {
                    MobileDrawer {
                        nav_id: props.id.clone(),
                        classes,
                        menu: mobile,
                        on_event: move |event| dispatch.call(event),
                        on_navigate: move |url| handler.call(url),
                    }
                } else {
                    MobileDrawer {
                        nav_id: props.id.clone(),
                        classes,
                        menu: mobile,
                        on_event: move |event| dispatch.call(event),
                    }
                }
            }
        }
    }
}

/// The [`Navbar`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct NavbarProps {
    /// The identifier of the root element, also used as the prefix for
    /// submenu link ids when moving keyboard focus.
    #[props(into, default = "navbar")]
    pub id: SharedString,
    /// The CSS class vocabulary for the component.
    #[props(default)]
    pub classes: NavClasses,
    /// Menu items built by the host, taking precedence over `menu_data`
    /// and `endpoint`.
    #[props(default)]
    pub items: Vec<MenuItem>,
    /// A JSON payload of menu items embedded alongside the component.
    #[props(into, default)]
    pub menu_data: SharedString,
    /// A remote endpoint serving the menu items, used when no embedded
    /// payload is provided.
    #[props(into, default)]
    pub endpoint: SharedString,
    /// The viewport width in pixels at which the desktop layout starts.
    #[props(default = 1024)]
    pub breakpoint: u32,
    /// A flag to indicate whether to render the burger trigger and the
    /// mobile drawer.
    #[props(default = true)]
    pub mobile: bool,
    /// An accessible label for the burger trigger.
    #[props(into, default = "Open menu")]
    pub trigger_label: SharedString,
    /// The brand content to be rendered before the menu items.
    pub brand: Option<Element>,
    /// An event handler to be called with the target URL when a menu
    /// link is activated, for hosts that route navigation on the client.
    pub on_navigate: Option<EventHandler<String>>,
}

/// A brand link rendered before the menu items.
pub fn NavbarBrand(props: NavbarBrandProps) -> Element {
    rsx! {
        a {
            class: "{props.class}",
            href: "{props.href}",
            { props.children }
        }
    }
}

/// The [`NavbarBrand`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct NavbarBrandProps {
    /// The class attribute for the component.
    #[props(into, default = "navbar__brand-link")]
    pub class: Class,
    /// The navigation target of the brand link.
    #[props(into, default = "/")]
    pub href: SharedString,
    /// The children to render within the component.
    pub children: Element,
}

/// Renders one top-level desktop entry with its optional submenu.
fn desktop_item(
    entry: DesktopEntry,
    nav_id: &SharedString,
    classes: &NavClasses,
    dispatch: Callback<MenuEvent>,
    on_navigate: Option<EventHandler<String>>,
) -> Element {
    let DesktopEntry {
        id,
        label,
        url,
        open: _,
        aria_expanded,
        class,
        submenu_class,
        links,
    } = entry;
    let has_submenu = !links.is_empty();
    let enter_id = id.clone();
    let leave_id = id.clone();
    let click_id = id.clone();
    let target = url.clone();
    let link_nodes = links
        .into_iter()
        .map(|link| {
            let link_id = format!("{nav_id}-link-{}", link.id);
            let target = link.url.clone();
            rsx! {
                li {
                    a {
                        id: "{link_id}",
                        class: "{classes.submenu_link}",
                        href: "{link.url}",
                        onclick: move |event: MouseEvent| {
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
            class: "{class}",
            onmouseenter: move |_| dispatch.call(MenuEvent::PointerEnter(enter_id.clone())),
            onmouseleave: move |_| dispatch.call(MenuEvent::PointerLeave(leave_id.clone())),
            a {
                class: "{classes.link}",
                href: "{url}",
                aria_haspopup: if has_submenu { "true" },
                aria_expanded: if has_submenu { "{aria_expanded}" },
                onclick: move |event: MouseEvent| {
                    if has_submenu {
                        // A parent link never navigates; it toggles its submenu.
                        event.prevent_default();
                        dispatch.call(MenuEvent::TriggerClick(click_id.clone()));
                    } else if let Some(handler) = on_navigate.as_ref() {
                        event.prevent_default();
                        handler.call(target.clone());
                    }
                },
                "{label}"
                if has_submenu {
                    Icon {
                        icon: FaChevronDown,
                        width: 12,
                        height: 12,
                    }
                }
            }
            if has_submenu {
                ul {
                    class: "{submenu_class}",
                    { link_nodes.into_iter() }
                }
            }
        }
    }
}

/// Applies the side effects of a state transition to the page.
fn apply_effects(nav_id: &SharedString, effects: &[MenuEffect]) {
    for effect in effects {
        match effect {
            MenuEffect::LockScroll => {
                document::eval("document.body.style.overflow = 'hidden';");
            }
            MenuEffect::UnlockScroll => {
                document::eval("document.body.style.overflow = '';");
            }
            MenuEffect::FocusLink(id) => {
                let script = format!(
                    r#"const link = document.getElementById("{nav_id}-link-{id}");
if (link) {{
    link.focus();
}}"#
                );
                document::eval(&script);
            }
        }
    }
}

/// Formats the window property key under which a listener is stashed so
/// that detaching can find it again.
fn listener_key(id: &str, kind: &str) -> String {
    format!("__shopnav_{kind}_{id}")
}

fn attach_escape_listener(key: &str) -> String {
    format!(
        r#"window["{key}"] = (event) => {{
    if (event.key === "Escape") {{
        dioxus.send(true);
    }}
}};
document.addEventListener("keydown", window["{key}"]);"#
    )
}

fn attach_outside_listener(key: &str, drawer: &str, trigger: &str) -> String {
    format!(
        r#"window["{key}"] = (event) => {{
    if (!event.target.closest(".{drawer}") && !event.target.closest(".{trigger}")) {{
        dioxus.send(true);
    }}
}};
document.addEventListener("click", window["{key}"]);"#
    )
}

fn detach_listener(key: &str, event: &str) -> String {
    format!(
        r#"if (window["{key}"]) {{
    document.removeEventListener("{event}", window["{key}"]);
    delete window["{key}"];
}}"#
    )
}

fn attach_viewport_watcher(key: &str, breakpoint: u32) -> String {
    format!(
        r#"window["{key}_query"] = window.matchMedia("(min-width: {breakpoint}px)");
window["{key}"] = (event) => dioxus.send(event.matches);
window["{key}_query"].addEventListener("change", window["{key}"]);
dioxus.send(window["{key}_query"].matches);"#
    )
}

fn detach_viewport_watcher(key: &str) -> String {
    format!(
        r#"if (window["{key}_query"]) {{
    window["{key}_query"].removeEventListener("change", window["{key}"]);
    delete window["{key}_query"];
    delete window["{key}"];
}}"#
    )
}
