//! The handler contract every link of the chain implements.

use crate::access_log::LoggingHandler;
use crate::auth::{BasicAuthHandler, TokenHandler};
use crate::context::RequestContext;
use crate::cors::{CorsHandler, SharedCors};
use crate::error_page::ErrorPageHandler;
use crate::recorder::ResponseRecorder;
use crate::request::Request;
use crate::response::ResponseWriter;
use std::sync::Arc;

/// Serves one request, writing the response into `response`.
///
/// Interceptors implement this too, wrapping the handler they forward to.
pub trait Handler: Send + Sync {
    fn serve(&self, request: &Request, context: &RequestContext, response: &mut dyn ResponseWriter);
}

/// A [`Handler`] built from a closure. See [`handler_fn`].
#[derive(Clone, Copy)]
pub struct HandlerFn<F>(F);

pub fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&Request, &RequestContext, &mut dyn ResponseWriter) + Send + Sync,
{
    HandlerFn(f)
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Request, &RequestContext, &mut dyn ResponseWriter) + Send + Sync,
{
    fn serve(&self, request: &Request, context: &RequestContext, response: &mut dyn ResponseWriter) {
        (self.0)(request, context, response)
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn serve(&self, request: &Request, context: &RequestContext, response: &mut dyn ResponseWriter) {
        (**self).serve(request, context, response)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn serve(&self, request: &Request, context: &RequestContext, response: &mut dyn ResponseWriter) {
        (**self).serve(request, context, response)
    }
}

/// Wraps a handler in the chain's interceptors. The last call is outermost.
pub trait HandlerExt: Handler + Sized {
    fn with_cors(self, cors: SharedCors) -> CorsHandler<Self> {
        CorsHandler::new(cors, self)
    }

    fn with_error_pages(self) -> ErrorPageHandler<Self> {
        ErrorPageHandler::new(self)
    }

    fn with_logging(self) -> LoggingHandler<Self> {
        LoggingHandler::new(self)
    }

    fn with_basic_auth(self) -> BasicAuthHandler<Self> {
        BasicAuthHandler::new(self)
    }

    fn with_bearer_token(self) -> TokenHandler<Self> {
        TokenHandler::new(self)
    }
}

impl<H: Handler> HandlerExt for H {}

/// Runs `handler` against `request` with an empty context and collects the
/// response.
pub fn respond<H: Handler + ?Sized>(handler: &H, request: &Request) -> http::Response<Vec<u8>> {
    let mut recorder = ResponseRecorder::new();
    handler.serve(request, &RequestContext::new(), &mut recorder);
    recorder.into_response()
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;
