//! Interceptors that publish request credentials into the [`RequestContext`].
//!
//! Both fail open: when extraction fails they write a warning line to their
//! [`Output`] and call the downstream handler with the context unchanged.
//! Authorization decisions belong to the handlers further down.

use crate::constants::header;
use crate::context::RequestContext;
use crate::credentials::{extract_basic, extract_bearer};
use crate::handler::Handler;
use crate::output::{Output, output};
use crate::request::Request;
use crate::response::ResponseWriter;

pub struct BasicAuthHandler<H> {
    inner: H,
    output: Output,
}

impl<H> BasicAuthHandler<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            output: output(),
        }
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }
}

impl<H: Handler> Handler for BasicAuthHandler<H> {
    fn serve(&self, request: &Request, context: &RequestContext, response: &mut dyn ResponseWriter) {
        match extract_basic(request.headers()) {
            Ok(credentials) => {
                let context = context.clone().with_basic(credentials);
                self.inner.serve(request, &context, response);
            }
            Err(err) => {
                tracing::warn!(error = %err, "basic credentials unavailable");
                self.output.warn(&err);
                self.inner.serve(request, context, response);
            }
        }
    }
}

/// Publishes a bearer token read from the `Authentication` header, or from
/// the header set with [`TokenHandler::with_header`].
pub struct TokenHandler<H> {
    inner: H,
    header: String,
    output: Output,
}

impl<H> TokenHandler<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            header: header::AUTHENTICATION.to_string(),
            output: output(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>) -> Self {
        self.header = name.into();
        self
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }
}

impl<H: Handler> Handler for TokenHandler<H> {
    fn serve(&self, request: &Request, context: &RequestContext, response: &mut dyn ResponseWriter) {
        match extract_bearer(request.headers(), &self.header) {
            Ok(token) => {
                let context = context.clone().with_token(token);
                self.inner.serve(request, &context, response);
            }
            Err(err) => {
                tracing::warn!(error = %err, header = %self.header, "bearer token unavailable");
                self.output.warn(&err);
                self.inner.serve(request, context, response);
            }
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
