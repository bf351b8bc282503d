//! Error types shared by the document layer, controllers, and config.
//!
//! ERROR MODEL
//! ===========
//! Missing elements are not errors: discovery returns `None` and the feature
//! stays off. These types cover the remaining cases, a browser call that
//! failed, a page that violates its markup contract, or a config block that
//! does not parse. Callers log them and keep the page running.

use crate::dom::NodeId;

/// Failure while reading or mutating the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// A browser API call returned an exception.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The handle does not refer to an element known to this document.
    #[error("unknown node handle: {0:?}")]
    UnknownNode(NodeId),
    /// The selector could not be parsed.
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// The page markup does not satisfy a controller's contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The menu trigger icon must contain exactly three bars.
    #[error("menu trigger must contain exactly 3 bars, found {found}")]
    MenuBars { found: usize },
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Error returned by [`crate::config::UiConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse ui config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while reading or writing the persistent key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No store is available (private browsing, disabled storage).
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Backend(String),
}

/// Error surfaced by [`crate::page::Page::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
