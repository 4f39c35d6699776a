use bunner_chain_rs::constants::{header, method};
use bunner_chain_rs::{Cors, CorsDecision, CorsOptions, CorsRequest, OriginMatcher, Request};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, T>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        self.options = self.options.allow_origins(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allow_methods(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allow_headers(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.expose_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options = self.options.support_credentials(enabled);
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options).expect("valid CORS configuration")
    }

    pub fn shared(self) -> Arc<Cors> {
        Arc::new(self.build())
    }
}

/// The policy used throughout the README: `http://a.com`, GET/POST,
/// `X-Real-IP`/`Content-Type` allowed and `X-Exposed-Header` exposed.
pub fn reference_cors() -> CorsBuilder {
    cors()
        .origins(["http://a.com"])
        .methods([method::GET, method::POST])
        .allowed_headers(["X-Real-IP", "Content-Type"])
        .exposed_headers(["X-Exposed-Header"])
}

pub struct RequestBuilder {
    builder: http::request::Builder,
    remote_addr: Option<SocketAddr>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new(method: &str, uri: &str) -> Self {
        Self {
            builder: http::Request::builder().method(method).uri(uri),
            remote_addr: None,
            body: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    pub fn origin(self, origin: &str) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_method(self, method: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
    }

    pub fn request_headers(self, headers: &str) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers)
    }

    pub fn remote_addr(mut self, addr: &str) -> Self {
        self.remote_addr = Some(addr.parse().expect("socket address"));
        self
    }

    pub fn body(mut self, body: &[u8]) -> Self {
        self.body = body.to_vec();
        self
    }

    pub fn build(self) -> Request {
        let request = Request::new(self.builder.body(self.body).expect("valid request"));
        match self.remote_addr {
            Some(addr) => request.with_remote_addr(addr),
            None => request,
        }
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let request = self.build();
        cors.check(&CorsRequest::from_request(&request))
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET, "/")
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS, "/")
}

pub fn get(uri: &str) -> RequestBuilder {
    RequestBuilder::new(method::GET, uri)
}
