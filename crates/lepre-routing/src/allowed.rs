//! Effective allowed methods of a route.

use crate::method::SUPPORTED_METHODS;

/// Allowed methods of a route, as seen by a router.
///
/// A route with an empty method list accepts every supported method, so
/// this view never reports "nothing allowed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedMethods<'a> {
    /// No restriction: all of [`SUPPORTED_METHODS`], in canonical order.
    Any,
    /// The route's own list, in insertion order, duplicates included.
    Only(&'a [String]),
}

impl<'a> AllowedMethods<'a> {
    /// Build the view for a stored method list.
    #[must_use]
    pub fn new(methods: &'a [String]) -> Self {
        if methods.is_empty() {
            Self::Any
        } else {
            Self::Only(methods)
        }
    }

    /// Returns true if the route was explicitly restricted.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Only(_))
    }

    /// Iterate over the method tokens in order.
    #[must_use]
    pub fn iter(&self) -> Iter<'a> {
        let inner = match *self {
            Self::Any => IterInner::Any(SUPPORTED_METHODS.iter()),
            Self::Only(methods) => IterInner::Only(methods.iter()),
        };
        Iter { inner }
    }

    /// Number of entries, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Any => SUPPORTED_METHODS.len(),
            Self::Only(methods) => methods.len(),
        }
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a method token is allowed (case-sensitive).
    #[must_use]
    pub fn contains(&self, method: &str) -> bool {
        self.iter().any(|m| m == method)
    }

    /// Collect the tokens.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&'a str> {
        self.iter().collect()
    }

    /// Format as an HTTP Allow header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        let mut out = String::new();
        for (idx, method) in self.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(method);
        }
        out
    }
}

impl<'a> IntoIterator for AllowedMethods<'a> {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &AllowedMethods<'a> {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`AllowedMethods`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

#[derive(Debug, Clone)]
enum IterInner<'a> {
    Any(std::slice::Iter<'static, &'static str>),
    Only(std::slice::Iter<'a, String>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Any(it) => it.next().copied(),
            IterInner::Only(it) => it.next().map(String::as_str),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Any(it) => it.size_hint(),
            IterInner::Only(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}
