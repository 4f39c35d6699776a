use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::WILDCARD;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::{AllowedOrigins, OriginMatcher};
use crate::util::is_http_token;
use thiserror::Error;

/// CORS policy, built once at startup.
///
/// The builder methods append, so repeated calls accumulate entries. Turn the
/// finished options into a [`Cors`](crate::Cors) before accepting traffic; the
/// engine owns them immutably from then on.
#[derive(Clone, Debug, Default)]
pub struct CorsOptions {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    /// Credentials are disallowed unless switched on.
    pub credentials: bool,
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds origins to the allow-list. `"*"` allows every origin.
    pub fn allow_origins<I, T>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        self.origins.extend(origins);
        self
    }

    /// Adds methods to the allow-list. `"*"` allows every method.
    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods.extend(methods);
        self
    }

    /// Adds request headers the actual request may carry.
    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers.extend(headers);
        self
    }

    /// Adds response headers browsers may expose to scripts.
    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers.extend(headers);
        self
    }

    pub fn support_credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for matcher in self.origins.matchers() {
            if let OriginMatcher::Exact(origin) = matcher
                && origin.trim().is_empty()
            {
                return Err(ValidationError::EmptyOrigin);
            }
        }

        for method in self.methods.values() {
            if method != WILDCARD && !is_http_token(method) {
                return Err(ValidationError::InvalidMethod(method.clone()));
            }
        }

        for header in self
            .allowed_headers
            .values()
            .iter()
            .chain(self.exposed_headers.iter())
        {
            if !is_http_token(header) {
                return Err(ValidationError::InvalidHeaderName(header.clone()));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("origin allow-list contains an empty entry")]
    EmptyOrigin,
    #[error("`{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("`{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
