//! Route errors.

use crate::method::SUPPORTED_METHODS;

/// Error raised while restricting a route's methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The method token is not in the supported set.
    UnsupportedMethod(String),
}

impl RouteError {
    /// The offending method token.
    #[must_use]
    pub fn method(&self) -> &str {
        match self {
            Self::UnsupportedMethod(method) => method,
        }
    }
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedMethod(method) => write!(
                f,
                "unsupported HTTP method '{method}', supported: {}",
                SUPPORTED_METHODS.join(", ")
            ),
        }
    }
}

impl std::error::Error for RouteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_supported_methods() {
        let err = RouteError::UnsupportedMethod("TRACE".into());
        assert_eq!(
            err.to_string(),
            "unsupported HTTP method 'TRACE', supported: GET, POST, PUT, PATCH, DELETE, OPTIONS, HEAD"
        );
    }

    #[test]
    fn test_method_accessor() {
        assert_eq!(RouteError::UnsupportedMethod("get".into()).method(), "get");
    }
}
