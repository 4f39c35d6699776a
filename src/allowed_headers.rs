use crate::util::{equals_ignore_case, normalize_lower, split_header_list};
use std::collections::HashSet;

/// Request headers a cross-origin request may carry.
///
/// Entries are trimmed and de-duplicated case-insensitively on construction,
/// keeping the first spelling seen; that spelling is what gets echoed back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedHeaders {
    values: Vec<String>,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut headers = Self::default();
        headers.extend(values);
        headers
    }

    pub(crate) fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = self.values.iter().map(|v| normalize_lower(v)).collect();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if seen.insert(normalize_lower(&trimmed)) {
                self.values.push(trimmed);
            }
        }
    }

    /// Intersects a raw `Access-Control-Request-Headers` value with the list.
    ///
    /// Returns the policy spelling of every requested header that is allowed,
    /// in request order, each at most once.
    pub fn intersect<'a>(&'a self, request_headers: &str) -> Vec<&'a str> {
        let mut matched: Vec<&'a str> = Vec::new();
        for requested in split_header_list(request_headers) {
            if let Some(allowed) = self
                .values
                .iter()
                .find(|allowed| equals_ignore_case(allowed, requested))
                && !matched.contains(&allowed.as_str())
            {
                matched.push(allowed.as_str());
            }
        }
        matched
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
