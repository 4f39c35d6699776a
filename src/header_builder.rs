use crate::constants::{PREFLIGHT_MAX_AGE, header};
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Echoes the literal request origin, never `*`.
    pub(crate) fn build_origin_header(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
            origin.to_string(),
        );
        headers
    }

    pub(crate) fn build_methods_header(&self, requested_method: Option<&str>) -> HeaderCollection {
        if !requested_method.is_some_and(|method| self.options.methods.allows_method(method)) {
            return HeaderCollection::new();
        }

        match self.options.methods.header_value() {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_METHODS.to_string(), value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE.to_string(),
            PREFLIGHT_MAX_AGE.to_string(),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self, requested_headers: Option<&str>) -> HeaderCollection {
        let matched = self
            .options
            .allowed_headers
            .intersect(requested_headers.unwrap_or_default());
        if matched.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
            matched.join(", "),
        );
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        match self.options.exposed_headers.header_value() {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS.to_string(), value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    /// `Access-Control-Allow-Credentials: true` when credentials are supported,
    /// otherwise `Vary: Origin` when the allow-list holds `*`.
    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if !self.options.credentials && !self.options.origins.allows_any() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.credentials {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                "true".to_string(),
            );
        } else {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
