use crate::headers::{Headers, apply_headers};
use http::HeaderMap;

/// Headers decided for either a preflight or a simple request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
}

/// Overall decision returned by the negotiator.
///
/// No variant blocks the request; the downstream handler always runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(CorsResult),
    Simple(CorsResult),
    /// No origin, or an origin outside the allow-list: add nothing.
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::Preflight(result) | CorsDecision::Simple(result) => Some(&result.headers),
            CorsDecision::NotApplicable => None,
        }
    }

    /// Sets the decided headers on a response header map.
    pub fn apply(&self, map: &mut HeaderMap) {
        if let Some(headers) = self.headers() {
            apply_headers(map, headers);
        }
    }
}
