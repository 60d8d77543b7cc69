//! Re-exports of components and common types.

pub use crate::{
    drawer::MobileDrawer,
    navbar::{Navbar, NavbarBrand},
};

#[doc(no_inline)]
pub use shopnav_core::{
    class::Class,
    error::NavError,
    loader::{MenuLoader, MenuSource},
    menu::{MenuItem, MenuTree},
    state::{InteractionState, MenuEffect, MenuEvent, Viewport},
    view::{MenuView, NavClasses},
};
