use crate::credentials::{BasicCredentials, BearerToken};

/// Request-scoped values published by interceptors for downstream handlers.
///
/// Slots are private to the crate. Read them with
/// [`basic_credentials`](crate::basic_credentials) and
/// [`bearer_token`](crate::bearer_token).
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    basic: Option<BasicCredentials>,
    token: Option<BearerToken>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_basic(mut self, credentials: BasicCredentials) -> Self {
        self.basic = Some(credentials);
        self
    }

    pub(crate) fn with_token(mut self, token: BearerToken) -> Self {
        self.token = Some(token);
        self
    }

    pub(crate) fn basic(&self) -> Option<&BasicCredentials> {
        self.basic.as_ref()
    }

    pub(crate) fn token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }
}
