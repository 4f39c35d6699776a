pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";

    pub const AUTHORIZATION: &str = "Authorization";
    /// Header the bearer extractor reads by default. Note the name: it is
    /// `Authentication`, not the conventional `Authorization`.
    pub const AUTHENTICATION: &str = "Authentication";

    pub const REFERER: &str = "Referer";
    pub const USER_AGENT: &str = "User-Agent";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod scheme {
    pub const BASIC_PREFIX: &str = "Basic ";
    pub const BEARER_PREFIX: &str = "Bearer ";
}

/// Matches every origin or every method when present in a policy list.
pub const WILDCARD: &str = "*";

/// `Access-Control-Max-Age` sent on every preflight: browsers must not cache.
pub const PREFLIGHT_MAX_AGE: &str = "0";

/// First and last status code (inclusive) treated as an error response.
pub const ERROR_STATUS_MIN: u16 = 400;
pub const ERROR_STATUS_MAX: u16 = 509;
