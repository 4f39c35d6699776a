//! Response sink abstraction and the recording interceptor layered over it.

use crate::constants::{ERROR_STATUS_MAX, ERROR_STATUS_MIN};
use http::{HeaderMap, StatusCode};
use std::io;

/// Destination of a handler's response: headers, one status and body bytes.
pub trait ResponseWriter {
    fn headers(&self) -> &HeaderMap;

    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn write_status(&mut self, status: StatusCode);

    /// Writes body bytes, returning how many were accepted.
    ///
    /// A write before any status implies `200 OK`.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    fn write_all(&mut self, mut buf: &[u8]) -> io::Result<()> {
        while !buf.is_empty() {
            match self.write(buf)? {
                0 => return Err(io::ErrorKind::WriteZero.into()),
                written => buf = &buf[written..],
            }
        }
        Ok(())
    }
}

/// Returns `true` for the statuses that get an error page (400 through 509).
pub fn is_error_status(status: StatusCode) -> bool {
    (ERROR_STATUS_MIN..=ERROR_STATUS_MAX).contains(&status.as_u16())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Unwritten,
    StatusSet,
    Forwarding,
    Buffering,
    Closed,
}

/// How a [`ResponseInterceptor`] treats writes from the handler below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Pass body bytes through, counting them. The status goes out once, with
    /// the first body byte or on [`ResponseInterceptor::release_status`].
    ForwardAndCount,
    /// Hold the status and buffer the body while the status is an error.
    BufferErrors,
}

/// What an interceptor observed about one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseState {
    status: StatusCode,
    body: Vec<u8>,
    bytes_written: usize,
    status_forwarded: bool,
    phase: Phase,
}

impl Default for ResponseState {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            body: Vec::new(),
            bytes_written: 0,
            status_forwarded: false,
            phase: Phase::Unwritten,
        }
    }
}

impl ResponseState {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Bytes held back instead of forwarded.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Bytes the underlying sink accepted.
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    pub fn status_forwarded(&self) -> bool {
        self.status_forwarded
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_error(&self) -> bool {
        is_error_status(self.status)
    }
}

/// A [`ResponseWriter`] wrapping another one for the duration of one request.
///
/// Records the final status and either counts forwarded bytes or buffers an
/// error body, depending on its [`WritePolicy`]. Header access always goes
/// straight to the wrapped sink.
pub struct ResponseInterceptor<'w> {
    inner: &'w mut dyn ResponseWriter,
    state: ResponseState,
    policy: WritePolicy,
}

impl<'w> ResponseInterceptor<'w> {
    pub fn new(inner: &'w mut dyn ResponseWriter, policy: WritePolicy) -> Self {
        Self {
            inner,
            state: ResponseState::default(),
            policy,
        }
    }

    pub fn state(&self) -> &ResponseState {
        &self.state
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Forwards a status the handler set but never followed with a body.
    pub fn release_status(&mut self) {
        if self.state.phase == Phase::StatusSet {
            self.forward_status();
        }
    }

    /// Closes the interceptor and hands back what it recorded.
    pub fn finish(mut self) -> ResponseState {
        self.state.phase = Phase::Closed;
        self.state
    }

    fn forward_status(&mut self) {
        if !self.state.status_forwarded {
            self.inner.write_status(self.state.status);
            self.state.status_forwarded = true;
        }
    }

    fn flush_buffered(&mut self) -> io::Result<()> {
        if self.state.body.is_empty() {
            return Ok(());
        }
        let pending = std::mem::take(&mut self.state.body);
        self.inner.write_all(&pending)?;
        self.state.bytes_written += pending.len();
        Ok(())
    }
}

impl ResponseWriter for ResponseInterceptor<'_> {
    fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    fn write_status(&mut self, status: StatusCode) {
        if self.state.phase == Phase::Forwarding {
            tracing::warn!(
                status = status.as_u16(),
                current = self.state.status.as_u16(),
                "body already started, ignoring status change"
            );
            return;
        }

        self.state.status = status;
        if self.state.phase == Phase::Unwritten {
            self.state.phase = Phase::StatusSet;
        }
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.state.phase == Phase::Unwritten {
            self.state.phase = Phase::StatusSet;
        }

        if self.policy == WritePolicy::BufferErrors && self.state.is_error() {
            self.state.body.extend_from_slice(buf);
            self.state.phase = Phase::Buffering;
            return Ok(buf.len());
        }

        self.forward_status();
        self.flush_buffered()?;
        let written = self.inner.write(buf)?;
        self.state.bytes_written += written;
        self.state.phase = Phase::Forwarding;
        Ok(written)
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
