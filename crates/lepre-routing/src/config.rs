//! Route declarations loaded from configuration.
//!
//! A [`RouteConfig`] is the serializable half of a [`Route`]: everything
//! except the handler. Applications keep route tables in JSON and attach
//! handlers when building the router:
//!
//! ```
//! use lepre_routing::RouteConfig;
//!
//! let config = RouteConfig::from_json(
//!     r#"{"path": "/users/{id}", "methods": ["GET"], "name": "user.show"}"#,
//! )?;
//! let route = config.into_route("show_user")?;
//!
//! assert_eq!(route.path(), "/users/{id}");
//! assert_eq!(route.resolved_name(), "user.show");
//! # Ok::<(), lepre_routing::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::route::Route;

/// Declarative form of a route, without its handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Path pattern.
    pub path: String,
    /// Allowed methods. Empty means all supported methods.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    /// Explicit route name. Defaults to the path when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteConfig {
    /// Creates a config for `path` with no restrictions and no name.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Adds a method token.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.methods.push(method.into());
        self
    }

    /// Sets the route name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parses a single route declaration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON array of route declarations.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a route with `handler`.
    ///
    /// Methods go through [`Route::allow_methods`], so an unsupported token
    /// fails here even though [`Route::with_parts`] would accept it.
    pub fn into_route<H>(self, handler: H) -> Result<Route<H>, ConfigError> {
        let mut route = Route::new(self.path, handler);
        route.allow_methods(&self.methods)?;
        if let Some(name) = self.name {
            route.bind_name(name);
        }
        tracing::debug!(
            route = %route.path(),
            methods = %route.allowed_methods().header_value(),
            "loaded route from config"
        );
        Ok(route)
    }
}

/// Error loading a route from configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    Json(serde_json::Error),
    /// The declaration names an unsupported method.
    Route(RouteError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid route config: {e}"),
            Self::Route(e) => write!(f, "invalid route: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Route(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<RouteError> for ConfigError {
    fn from(e: RouteError) -> Self {
        Self::Route(e)
    }
}
