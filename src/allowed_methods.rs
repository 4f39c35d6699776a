use crate::constants::WILDCARD;

/// Methods a cross-origin request may use.
///
/// Matching is case-sensitive to preserve caller intent; a `*` entry matches
/// every method.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
    }

    /// Returns `true` when `method` is non-empty and listed, or `*` is listed.
    pub fn allows_method(&self, method: &str) -> bool {
        if method.is_empty() {
            return false;
        }
        self.values
            .iter()
            .any(|allowed| allowed == method || allowed == WILDCARD)
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(", "))
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
