//! Navigation error types.

use thiserror::Error;

/// An error encountered while loading or wiring the navigation menu.
///
/// Every variant is recoverable: the widget logs the error, renders an
/// empty shell, and leaves the rest of the page functional.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The embedded menu payload could not be parsed into a menu tree.
    #[error("malformed menu data: {0}")]
    MalformedData(String),
    /// The menu endpoint could not be reached or returned an unusable
    /// response.
    #[error("menu fetch failed: {0}")]
    FetchFailed(String),
    /// A structural element the widget relies on is absent.
    #[error("missing element: {0}")]
    MissingElements(&'static str),
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedData(err.to_string())
    }
}

impl From<reqwest::Error> for NavError {
    fn from(err: reqwest::Error) -> Self {
        Self::FetchFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::NavError;

    #[test]
    fn it_formats_error_messages() {
        let err = NavError::MalformedData("unexpected token".to_owned());
        assert_eq!(err.to_string(), "malformed menu data: unexpected token");

        let err = NavError::MissingElements("menu endpoint");
        assert_eq!(err.to_string(), "missing element: menu endpoint");
    }

    #[test]
    fn it_converts_json_errors() {
        let err = serde_json::from_str::<crate::JsonValue>("not json").unwrap_err();
        assert!(matches!(NavError::from(err), NavError::MalformedData(_)));
    }
}
