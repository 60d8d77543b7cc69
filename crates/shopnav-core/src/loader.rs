//! Menu data loading.
//!
//! Menu items come from a tree built by the host, a JSON payload
//! embedded alongside the widget, or a remote endpoint fetched once at
//! mount. With no source configured the widget renders an empty shell.

use crate::{JsonValue, Map, error::NavError, menu::MenuTree};

/// Where the menu items come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MenuSource {
    /// No source configured. Loading yields an empty tree.
    #[default]
    None,
    /// A menu tree built by the host application.
    Tree(MenuTree),
    /// A JSON payload embedded alongside the widget.
    Inline(String),
    /// A remote endpoint serving the menu as JSON.
    Remote(String),
}

/// A loader that resolves a [`MenuSource`] into a [`MenuTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuLoader {
    /// The configured source.
    source: MenuSource,
}

impl MenuLoader {
    /// Creates a new instance for the given source.
    pub fn new(source: MenuSource) -> Self {
        Self { source }
    }

    /// Creates a new instance for a menu tree built by the host.
    pub fn tree(tree: impl Into<MenuTree>) -> Self {
        Self::new(MenuSource::Tree(tree.into()))
    }

    /// Creates a new instance for an embedded JSON payload.
    pub fn inline(data: impl Into<String>) -> Self {
        Self::new(MenuSource::Inline(data.into()))
    }

    /// Creates a new instance for a remote endpoint.
    pub fn remote(endpoint: impl Into<String>) -> Self {
        Self::new(MenuSource::Remote(endpoint.into()))
    }

    /// Returns the configured source.
    pub fn source(&self) -> &MenuSource {
        &self.source
    }

    /// Loads the menu tree from the configured source.
    ///
    /// Embedded payloads that fail to parse are reported as
    /// [`NavError::MalformedData`]; endpoint failures of any kind, wrong
    /// payload shape included, are reported as [`NavError::FetchFailed`].
    pub async fn load(&self) -> Result<MenuTree, NavError> {
        match &self.source {
            MenuSource::None => Ok(MenuTree::default()),
            MenuSource::Tree(tree) => Ok(tree.clone()),
            MenuSource::Inline(data) => MenuTree::parse(data),
            MenuSource::Remote(endpoint) => Self::fetch(endpoint).await,
        }
    }

    /// Loads the menu tree, degrading to an empty tree on failure.
    ///
    /// The error is logged and swallowed so that a broken menu source
    /// leaves the rest of the page functional.
    pub async fn load_or_default(&self) -> MenuTree {
        match self.load().await {
            Ok(tree) => tree,
            Err(err) => {
                tracing::error!("fail to load the menu items: {err}");
                MenuTree::default()
            }
        }
    }

    /// Fetches and decodes the menu from a remote endpoint.
    async fn fetch(endpoint: &str) -> Result<MenuTree, NavError> {
        if endpoint.is_empty() {
            return Err(NavError::MissingElements("menu endpoint"));
        }

        let response = reqwest::get(endpoint).await?;
        let status = response.status();
        if !status.is_success() {
            let message = format!("menu endpoint responded with {status}");
            return Err(NavError::FetchFailed(message));
        }
        let payload = response.json::<JsonValue>().await?;
        Self::decode_payload(payload)
    }

    /// Decodes a response payload of the form `{"menu": [...]}` or
    /// `{"items": [...]}`.
    fn decode_payload(payload: JsonValue) -> Result<MenuTree, NavError> {
        let JsonValue::Object(mut object) = payload else {
            return Err(NavError::FetchFailed("unexpected payload shape".to_owned()));
        };
        let items = Self::wrapped_items(&mut object)
            .ok_or_else(|| NavError::FetchFailed("payload contains no menu items".to_owned()))?;
        MenuTree::from_value(items).map_err(|err| match err {
            NavError::MalformedData(message) => NavError::FetchFailed(message),
            err => err,
        })
    }

    /// Extracts the wrapped item array from a payload object.
    fn wrapped_items(object: &mut Map) -> Option<JsonValue> {
        object
            .remove("menu")
            .or_else(|| object.remove("items"))
            .filter(JsonValue::is_array)
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuLoader, MenuSource};
    use crate::{error::NavError, json, menu::MenuItem};

    #[tokio::test]
    async fn it_loads_embedded_menu_data() {
        let loader = MenuLoader::inline(r#"[{"id": "1", "label": "Tops", "url": "/tops"}]"#);
        let tree = loader.load().await.unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("1").unwrap().label, "Tops");
    }

    #[tokio::test]
    async fn it_defaults_to_an_empty_tree() {
        let loader = MenuLoader::new(MenuSource::None);
        let tree = loader.load().await.unwrap();
        assert!(tree.is_empty());
    }

    #[tokio::test]
    async fn it_passes_prebuilt_trees_through() {
        let loader = MenuLoader::tree(vec![MenuItem::new("sale", "Sale", "/sale")]);
        let tree = loader.load().await.unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("sale").unwrap().url, "/sale");
    }

    #[tokio::test]
    async fn it_reports_malformed_embedded_data() {
        let loader = MenuLoader::inline("not json");
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, NavError::MalformedData(_)));
    }

    #[tokio::test]
    async fn it_degrades_to_an_empty_tree_on_failure() {
        let loader = MenuLoader::inline("not json");
        assert!(loader.load_or_default().await.is_empty());
    }

    #[tokio::test]
    async fn it_rejects_blank_endpoints() {
        let loader = MenuLoader::remote("");
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, NavError::MissingElements(_)));
    }

    #[test]
    fn it_decodes_both_payload_shapes() {
        let payload = json!({"menu": [{"id": "1", "label": "Tops", "url": "/tops"}]});
        assert_eq!(MenuLoader::decode_payload(payload).unwrap().len(), 1);

        let payload = json!({"items": [{"id": "1", "label": "Tops", "url": "/tops"}]});
        assert_eq!(MenuLoader::decode_payload(payload).unwrap().len(), 1);
    }

    #[test]
    fn it_rejects_unexpected_payload_shapes() {
        let err = MenuLoader::decode_payload(json!([{"id": "1"}])).unwrap_err();
        assert!(matches!(err, NavError::FetchFailed(_)));

        let err = MenuLoader::decode_payload(json!({"data": []})).unwrap_err();
        assert!(matches!(err, NavError::FetchFailed(_)));

        let err = MenuLoader::decode_payload(json!({"menu": {"id": "1"}})).unwrap_err();
        assert!(matches!(err, NavError::FetchFailed(_)));
    }

    #[test]
    fn it_classifies_remote_duplicate_ids_as_fetch_failures() {
        let payload = json!({"menu": [
            {"id": "1", "label": "Tops", "url": "/tops"},
            {"id": "1", "label": "Sale", "url": "/sale"}
        ]});
        let err = MenuLoader::decode_payload(payload).unwrap_err();
        assert!(matches!(err, NavError::FetchFailed(_)));
    }
}
