use crate::constants::header;
use crate::context::RequestContext;
use crate::handler::Handler;
use crate::output::{Output, output};
use crate::request::Request;
use crate::response::{ResponseInterceptor, ResponseState, ResponseWriter, WritePolicy};
use chrono::{DateTime, FixedOffset, Local};
use http::StatusCode;
use std::fmt;

const TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";
const MISSING: &str = "-";

/// One Combined Log Format line.
///
/// `remote - - [time] method uri protocol status bytes referer user-agent`
pub struct AccessLogEntry<'a> {
    request: &'a Request,
    status: StatusCode,
    bytes_written: usize,
    timestamp: DateTime<FixedOffset>,
}

impl<'a> AccessLogEntry<'a> {
    pub fn new(request: &'a Request, state: &ResponseState, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            request,
            status: state.status(),
            bytes_written: state.bytes_written(),
            timestamp,
        }
    }

    fn header_or_dash(&self, name: &str) -> &str {
        match self.request.header(name) {
            Some(value) if !value.is_empty() => value,
            _ => MISSING,
        }
    }
}

impl fmt::Display for AccessLogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.request.remote_addr() {
            Some(addr) => write!(f, "{addr}")?,
            None => f.write_str(MISSING)?,
        }
        write!(
            f,
            " - - [{}] {} {} {:?} {} {} {} {}",
            self.timestamp.format(TIME_FORMAT),
            self.request.method(),
            self.request.uri(),
            self.request.version(),
            self.status.as_u16(),
            self.bytes_written,
            self.header_or_dash(header::REFERER),
            self.header_or_dash(header::USER_AGENT),
        )
    }
}

/// Writes one access-log line per request after the downstream handler
/// returns.
pub struct LoggingHandler<H> {
    inner: H,
    output: Output,
}

impl<H> LoggingHandler<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            output: output(),
        }
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }
}

impl<H: Handler> Handler for LoggingHandler<H> {
    fn serve(&self, request: &Request, context: &RequestContext, response: &mut dyn ResponseWriter) {
        let mut interceptor = ResponseInterceptor::new(response, WritePolicy::ForwardAndCount);
        self.inner.serve(request, context, &mut interceptor);
        interceptor.release_status();
        let state = interceptor.finish();

        let entry = AccessLogEntry::new(request, &state, Local::now().into());
        self.output.write_line(format_args!("{entry}"));
    }
}

#[cfg(test)]
#[path = "access_log_test.rs"]
mod access_log_test;
