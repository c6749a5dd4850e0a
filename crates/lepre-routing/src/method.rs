//! Supported HTTP method vocabulary.
//!
//! Routes only accept the methods listed here. Matching is case-sensitive:
//! `"get"` is not a supported method.

use std::str::FromStr;

use crate::error::RouteError;

/// Method tokens a route may allow, in canonical order.
///
/// This is also the effective allow list of a route that was never
/// restricted.
pub const SUPPORTED_METHODS: [&str; 7] =
    ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "HEAD"];

/// An HTTP method a route can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
}

impl Method {
    /// All supported methods, in the same order as [`SUPPORTED_METHODS`].
    pub const ALL: [Method; 7] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
        Self::Options,
        Self::Head,
    ];

    /// Parse an exact, uppercase method token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            "OPTIONS" => Some(Self::Options),
            "HEAD" => Some(Self::Head),
            _ => None,
        }
    }

    /// The method token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RouteError::UnsupportedMethod(s.to_string()))
    }
}

/// Returns true if `token` is one of [`SUPPORTED_METHODS`].
#[must_use]
pub fn is_supported(token: &str) -> bool {
    SUPPORTED_METHODS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_supported_table() {
        let tokens: Vec<&str> = Method::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(tokens, SUPPORTED_METHODS);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Method::parse("GET"), Some(Method::Get));
        assert_eq!(Method::parse("get"), None);
        assert_eq!(Method::parse("Get"), None);
        assert_eq!(Method::parse(" GET"), None);
    }

    #[test]
    fn test_trace_and_connect_not_supported() {
        assert!(!is_supported("TRACE"));
        assert!(!is_supported("CONNECT"));
        assert!(is_supported("OPTIONS"));
    }

    #[test]
    fn test_from_str_error_carries_token() {
        let err = "BOGUS".parse::<Method>().unwrap_err();
        assert_eq!(err.method(), "BOGUS");
        assert_eq!("PATCH".parse::<Method>().unwrap(), Method::Patch);
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
