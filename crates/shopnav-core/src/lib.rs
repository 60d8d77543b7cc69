#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]

pub mod class;
pub mod error;
pub mod focus;
pub mod loader;
pub mod menu;
pub mod state;
pub mod subscription;
pub mod view;

#[doc(no_inline)]
pub use serde_json::json;

/// A JSON value.
pub type JsonValue = serde_json::Value;

/// A JSON key-value type.
pub type Map = serde_json::Map<String, JsonValue>;

/// A string that is either borrowed for the whole program or owned.
pub type SharedString = std::borrow::Cow<'static, str>;
