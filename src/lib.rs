//! A small HTTP interceptor chain.
//!
//! Interceptors wrap a downstream [`Handler`] and call it exactly once:
//! [`CorsHandler`] negotiates CORS, [`ErrorPageHandler`] renders HTML error
//! pages, [`LoggingHandler`] writes Combined Log Format lines, and
//! [`BasicAuthHandler`] / [`TokenHandler`] publish credentials into the
//! [`RequestContext`].
//!
//! Credential extraction never rejects a request. Handlers that need
//! authentication must check [`basic_credentials`] or [`bearer_token`]
//! themselves.

mod access_log;
mod allowed_headers;
mod allowed_methods;
mod auth;
pub mod constants;
mod context;
mod cors;
mod cors_request;
mod credentials;
mod error_page;
mod exposed_headers;
mod handler;
mod header_builder;
mod headers;
mod options;
mod origin;
mod output;
mod recorder;
mod request;
mod response;
mod result;
mod util;

pub use access_log::{AccessLogEntry, LoggingHandler};
pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use auth::{BasicAuthHandler, TokenHandler};
pub use context::RequestContext;
pub use cors::{Cors, CorsHandler, SharedCors};
pub use cors_request::CorsRequest;
pub use credentials::{
    BasicCredentials, BearerToken, CredentialError, Scheme, basic_auth_hash, basic_credentials,
    bearer_token, decode_basic, extract_basic, extract_bearer, parse_basic,
};
pub use error_page::{ErrorPageHandler, render_error_page};
pub use exposed_headers::ExposedHeaders;
pub use handler::{Handler, HandlerExt, HandlerFn, handler_fn, respond};
pub use headers::{Headers, apply_headers};
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginMatcher};
pub use output::{Output, OutputBuffer, output, set_output};
pub use recorder::ResponseRecorder;
pub use request::Request;
pub use response::{
    Phase, ResponseInterceptor, ResponseState, ResponseWriter, WritePolicy, is_error_status,
};
pub use result::{CorsDecision, CorsResult};
