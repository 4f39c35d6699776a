//! Incoming HTTP request as seen by the interceptor chain.

use http::request::Parts;
use http::{HeaderMap, Method, Uri, Version};
use std::net::SocketAddr;

/// An incoming HTTP request.
///
/// The chain never mutates a request; request-scoped values travel in the
/// [`RequestContext`](crate::RequestContext) passed alongside it.
#[derive(Debug)]
pub struct Request {
    head: Parts,
    body: Vec<u8>,
    remote_addr: Option<SocketAddr>,
}

impl Request {
    pub fn new(request: http::Request<Vec<u8>>) -> Self {
        let (head, body) = request.into_parts();
        Self {
            head,
            body,
            remote_addr: None,
        }
    }

    /// Records the peer address the transport accepted the request from.
    pub fn with_remote_addr(mut self, addr: SocketAddr) -> Self {
        self.remote_addr = Some(addr);
        self
    }

    pub fn method(&self) -> &Method {
        &self.head.method
    }

    pub fn uri(&self) -> &Uri {
        &self.head.uri
    }

    pub fn version(&self) -> Version {
        self.head.version
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.head.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn remote_addr(&self) -> Option<SocketAddr> {
        self.remote_addr
    }

    /// First value of header `name`, case-insensitive.
    ///
    /// Values that are not visible ASCII are treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.head
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }
}

impl From<http::Request<Vec<u8>>> for Request {
    fn from(request: http::Request<Vec<u8>>) -> Self {
        Self::new(request)
    }
}
