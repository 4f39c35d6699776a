use crate::constants::method;
use crate::context::RequestContext;
use crate::cors_request::CorsRequest;
use crate::handler::Handler;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::request::Request;
use crate::response::ResponseWriter;
use crate::result::{CorsDecision, CorsResult};
use std::sync::Arc;

pub type SharedCors = Arc<Cors>;

/// Core CORS negotiation engine that evaluates requests using [`CorsOptions`].
///
/// The options are frozen on construction, so one `Cors` can be shared by
/// every in-flight request.
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Decides which CORS headers the response to `request` carries.
    ///
    /// Never rejects: a missing or disallowed origin yields
    /// [`CorsDecision::NotApplicable`].
    pub fn check(&self, request: &CorsRequest<'_>) -> CorsDecision {
        let origin = match request.origin {
            None | Some("") => return CorsDecision::NotApplicable,
            Some(origin) if self.options.origins.allows(origin) => origin,
            Some(origin) => {
                tracing::debug!(origin, "origin not allowed, skipping CORS headers");
                return CorsDecision::NotApplicable;
            }
        };

        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_header(origin));

        let preflight = request.method == method::OPTIONS;
        if preflight {
            headers.extend(builder.build_methods_header(request.access_control_request_method));
            headers.extend(builder.build_max_age_header());
            headers.extend(builder.build_allowed_headers(request.access_control_request_headers));
            headers.extend(builder.build_exposed_headers());
        }
        headers.extend(builder.build_credentials_header());

        let result = CorsResult {
            headers: headers.into_headers(),
        };
        if preflight {
            tracing::debug!(origin, "preflight negotiated");
            CorsDecision::Preflight(result)
        } else {
            CorsDecision::Simple(result)
        }
    }
}

/// Interceptor that adds CORS headers before handing the request on.
///
/// Headers are set on the response before the downstream handler runs, so they
/// are present whatever that handler writes.
pub struct CorsHandler<H> {
    inner: H,
    cors: SharedCors,
}

impl<H> CorsHandler<H> {
    pub fn new(cors: SharedCors, inner: H) -> Self {
        Self { inner, cors }
    }
}

impl<H: Handler> Handler for CorsHandler<H> {
    fn serve(&self, request: &Request, context: &RequestContext, response: &mut dyn ResponseWriter) {
        let decision = self.cors.check(&CorsRequest::from_request(request));
        decision.apply(response.headers_mut());
        self.inner.serve(request, context, response);
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
