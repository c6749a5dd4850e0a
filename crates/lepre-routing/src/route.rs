//! Route descriptor.
//!
//! A [`Route`] binds a path pattern to a handler, records which HTTP
//! methods it accepts and carries a symbolic name. The descriptor never
//! parses the pattern nor calls the handler; both are passed through to
//! whatever router consumes it.
//!
//! # Example
//!
//! ```
//! use lepre_routing::Route;
//!
//! let mut route = Route::new("/users/{id}", "show_user");
//! route
//!     .allow_methods(["GET", "HEAD"])?
//!     .bind_name("user.show");
//!
//! assert_eq!(route.allowed_methods().to_vec(), vec!["GET", "HEAD"]);
//! assert_eq!(route.name(), "user.show");
//! # Ok::<(), lepre_routing::RouteError>(())
//! ```

use crate::allowed::AllowedMethods;
use crate::config::RouteConfig;
use crate::error::RouteError;
use crate::method::{Method, is_supported};

/// Name state of a route.
///
/// A route starts `Unbound` unless constructed with a name. The first call
/// to [`Route::name`] binds it to the path; from then on the value only
/// changes through [`Route::bind_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteName {
    /// No name yet.
    #[default]
    Unbound,
    /// Resolved name.
    Bound(String),
}

impl RouteName {
    /// The bound value, if any.
    #[must_use]
    pub fn as_bound(&self) -> Option<&str> {
        match self {
            Self::Unbound => None,
            Self::Bound(name) => Some(name),
        }
    }
}

/// A route descriptor.
///
/// Mutators take `&mut self` and return the same receiver, so calls can be
/// chained without copying the descriptor.
#[derive(Clone)]
pub struct Route<H> {
    path: String,
    handler: H,
    methods: Vec<String>,
    name: RouteName,
}

impl<H> Route<H> {
    /// Create an unrestricted, unnamed route.
    #[must_use]
    pub fn new(path: impl Into<String>, handler: H) -> Self {
        Self::with_parts(path, handler, Vec::new(), None)
    }

    /// Create a route from all of its parts.
    ///
    /// `methods` is stored as given and is not validated; only
    /// [`allow_method`](Self::allow_method) and
    /// [`allow_methods`](Self::allow_methods) check tokens.
    #[must_use]
    pub fn with_parts(
        path: impl Into<String>,
        handler: H,
        methods: Vec<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            path: path.into(),
            handler,
            methods,
            name: name.map_or(RouteName::Unbound, RouteName::Bound),
        }
    }

    /// The path pattern.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The handler.
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Consume the route, returning its handler.
    #[must_use]
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Append a method to the allow list.
    ///
    /// Duplicates are kept. An unsupported token leaves the list untouched.
    pub fn allow_method(&mut self, method: &str) -> Result<&mut Self, RouteError> {
        if !is_supported(method) {
            tracing::debug!(route = %self.path, method, "rejected unsupported method");
            return Err(RouteError::UnsupportedMethod(method.to_string()));
        }
        tracing::trace!(route = %self.path, method, "allowed method");
        self.methods.push(method.to_string());
        Ok(self)
    }

    /// Append a typed method to the allow list.
    pub fn allow(&mut self, method: Method) -> &mut Self {
        tracing::trace!(route = %self.path, method = method.as_str(), "allowed method");
        self.methods.push(method.as_str().to_string());
        self
    }

    /// Replace the allow list.
    ///
    /// The list is cleared, then each entry is applied in order with
    /// [`allow_method`](Self::allow_method). The first unsupported entry
    /// aborts the call; entries before it stay in the list.
    pub fn allow_methods<I, S>(&mut self, methods: I) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.methods.clear();
        for method in methods {
            self.allow_method(method.as_ref())?;
        }
        Ok(self)
    }

    /// The stored method list, without defaulting.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// The effective allowed methods.
    ///
    /// An empty list means every supported method is allowed.
    #[must_use]
    pub fn allowed_methods(&self) -> AllowedMethods<'_> {
        AllowedMethods::new(&self.methods)
    }

    /// Overwrite the route name.
    pub fn bind_name(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        tracing::trace!(route = %self.path, name = %name, "bound route name");
        self.name = RouteName::Bound(name);
        self
    }

    /// The route name, defaulting to (and caching) the path.
    pub fn name(&mut self) -> &str {
        if matches!(self.name, RouteName::Unbound) {
            self.name = RouteName::Bound(self.path.clone());
        }
        match &self.name {
            RouteName::Bound(name) => name,
            RouteName::Unbound => &self.path,
        }
    }

    /// The route name without resolving it.
    ///
    /// Returns the same value [`name`](Self::name) would, but leaves an
    /// unbound name unbound.
    #[must_use]
    pub fn resolved_name(&self) -> &str {
        self.name.as_bound().unwrap_or(&self.path)
    }

    /// Current name state.
    #[must_use]
    pub fn name_state(&self) -> &RouteName {
        &self.name
    }

    /// Snapshot of path, stored methods and bound name.
    #[must_use]
    pub fn to_config(&self) -> RouteConfig {
        RouteConfig {
            path: self.path.clone(),
            methods: self.methods.clone(),
            name: self.name.as_bound().map(ToString::to_string),
        }
    }
}

impl<H> std::fmt::Debug for Route<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("methods", &self.methods)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
