use crate::constants::WILDCARD;

/// One entry of the origin allow-list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OriginMatcher {
    /// Matches the request origin by exact, case-sensitive comparison.
    Exact(String),
    /// The `*` entry: every non-empty origin matches.
    Any,
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == candidate,
            OriginMatcher::Any => true,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OriginMatcher::Exact(value) => value,
            OriginMatcher::Any => WILDCARD,
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        if value == WILDCARD {
            OriginMatcher::Any
        } else {
            OriginMatcher::Exact(value)
        }
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::from(value.to_owned())
    }
}

/// Origins a response may be shared with.
///
/// Matching is exact-string or full wildcard; there is no prefix, suffix or
/// pattern matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    matchers: Vec<OriginMatcher>,
}

impl AllowedOrigins {
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self {
            matchers: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn any() -> Self {
        Self {
            matchers: vec![OriginMatcher::Any],
        }
    }

    pub(crate) fn extend<I, T>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        self.matchers.extend(values.into_iter().map(Into::into));
    }

    /// Returns `true` when `origin` is non-empty and listed, or the list holds `*`.
    pub fn allows(&self, origin: &str) -> bool {
        if origin.is_empty() {
            return false;
        }
        self.matchers.iter().any(|matcher| matcher.matches(origin))
    }

    /// Returns `true` when the list holds the `*` entry.
    pub fn allows_any(&self) -> bool {
        self.matchers
            .iter()
            .any(|matcher| matches!(matcher, OriginMatcher::Any))
    }

    pub fn matchers(&self) -> &[OriginMatcher] {
        &self.matchers
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
