//! Basic and Bearer credential extraction.

use crate::constants::{header, scheme};
use crate::context::RequestContext;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use http::HeaderMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Basic,
    Bearer,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Basic => f.write_str("basic"),
            Scheme::Bearer => f.write_str("bearer"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("no {scheme} credentials found in the {header} header")]
    MissingHeader { scheme: Scheme, header: String },
    #[error("empty basic authorization hash")]
    EmptyHash,
    #[error("malformed basic authorization hash: {0}")]
    MalformedEncoding(#[from] base64::DecodeError),
    #[error("empty bearer token")]
    EmptyToken,
    #[error("no {scheme} credentials found in request context")]
    NotFound { scheme: Scheme },
}

/// User name and password decoded from a Basic `Authorization` header.
///
/// A header that decodes to anything other than `user:pass` with both parts
/// non-empty yields the empty pair.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BasicCredentials {
    user: String,
    pass: String,
}

impl BasicCredentials {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pass: pass.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pass(&self) -> &str {
        &self.pass
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_empty() && self.pass.is_empty()
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Returns the encoded part of a `Basic` `Authorization` header.
pub fn basic_auth_hash(headers: &HeaderMap) -> Result<&str, CredentialError> {
    let value = header_str(headers, header::AUTHORIZATION);
    let hash = value
        .strip_prefix(scheme::BASIC_PREFIX)
        .ok_or_else(|| CredentialError::MissingHeader {
            scheme: Scheme::Basic,
            header: header::AUTHORIZATION.to_string(),
        })?;
    if hash.is_empty() {
        return Err(CredentialError::EmptyHash);
    }
    Ok(hash)
}

/// Decodes a padded URL-safe base64 hash.
pub fn decode_basic(hash: &str) -> Result<String, CredentialError> {
    let bytes = URL_SAFE.decode(hash)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Splits `user:pass`, yielding the empty pair unless there is exactly one
/// colon with text on both sides.
pub fn parse_basic(plain: &str) -> BasicCredentials {
    let parts: Vec<&str> = plain.split(':').collect();
    match parts.as_slice() {
        [user, pass] if !user.is_empty() && !pass.is_empty() => BasicCredentials::new(*user, *pass),
        _ => BasicCredentials::default(),
    }
}

pub fn extract_basic(headers: &HeaderMap) -> Result<BasicCredentials, CredentialError> {
    let hash = basic_auth_hash(headers)?;
    let plain = decode_basic(hash)?;
    Ok(parse_basic(&plain))
}

/// Reads a `Bearer` token from `header_name`.
pub fn extract_bearer(headers: &HeaderMap, header_name: &str) -> Result<BearerToken, CredentialError> {
    let value = header_str(headers, header_name);
    let token = value
        .strip_prefix(scheme::BEARER_PREFIX)
        .ok_or_else(|| CredentialError::MissingHeader {
            scheme: Scheme::Bearer,
            header: header_name.to_string(),
        })?;
    if token.is_empty() {
        return Err(CredentialError::EmptyToken);
    }
    Ok(BearerToken::new(token))
}

/// Basic credentials published by [`BasicAuthHandler`](crate::BasicAuthHandler).
pub fn basic_credentials(context: &RequestContext) -> Result<(&str, &str), CredentialError> {
    context
        .basic()
        .map(|credentials| (credentials.user(), credentials.pass()))
        .ok_or(CredentialError::NotFound {
            scheme: Scheme::Basic,
        })
}

/// Bearer token published by [`TokenHandler`](crate::TokenHandler).
pub fn bearer_token(context: &RequestContext) -> Result<&str, CredentialError> {
    context
        .token()
        .map(BearerToken::as_str)
        .ok_or(CredentialError::NotFound {
            scheme: Scheme::Bearer,
        })
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;
