use crate::context::RequestContext;
use crate::handler::Handler;
use crate::request::Request;
use crate::response::{ResponseInterceptor, ResponseState, ResponseWriter, WritePolicy};
use crate::util::escape_html;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderValue, StatusCode};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Renders the HTML page sent for an error status.
///
/// `message` is whatever the handler wrote as its body; it is HTML-escaped.
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let text = escape_html(status.canonical_reason().unwrap_or_default());
    let message = escape_html(message);
    format!(
        r#"<!doctype HTML>
<html>
<head>
	<meta charset="utf-8"/>
	<meta name="viewport" content="width=device-width, initial-scale=1.0">
	<title>{code} - {text}</title>
	<style type="text/css">
	h1 {{
		color:#666;
	}}
	.content {{
		text-align:center;
		margin-left: auto;
		margin-right: auto;
		max-width: 75%;
		font-size: 1.5rem;
	}}
	.error-text {{
		color:#666;
	}}
	</style>
</head>
<body>

	<div class="content">
		<h1>{code}</h1>
		<p class="error-text">
			{message}
		</p>
	</div>

</body>
</html>
"#
    )
}

/// Replaces the body of any 400..=509 response with an HTML error page.
///
/// The downstream body becomes the page's message. Successful responses pass
/// through unchanged.
pub struct ErrorPageHandler<H> {
    inner: H,
}

impl<H> ErrorPageHandler<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for ErrorPageHandler<H> {
    fn serve(&self, request: &Request, context: &RequestContext, response: &mut dyn ResponseWriter) {
        let state = {
            let mut interceptor = ResponseInterceptor::new(response, WritePolicy::BufferErrors);
            self.inner.serve(request, context, &mut interceptor);
            interceptor.finish()
        };

        if state.is_error() {
            write_error_page(response, &state);
        } else {
            release(response, &state);
        }
    }
}

fn write_error_page(response: &mut dyn ResponseWriter, state: &ResponseState) {
    let message = String::from_utf8_lossy(state.body());
    let page = render_error_page(state.status(), &message);

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
    headers.remove(CONTENT_LENGTH);

    response.write_status(state.status());
    if let Err(err) = response.write_all(page.as_bytes()) {
        tracing::warn!(error = %err, status = state.status().as_u16(), "failed to write error page");
    }
}

/// Forwards whatever the interceptor still holds for a non-error response.
fn release(response: &mut dyn ResponseWriter, state: &ResponseState) {
    if !state.status_forwarded() {
        response.write_status(state.status());
    }
    if !state.body().is_empty()
        && let Err(err) = response.write_all(state.body())
    {
        tracing::warn!(error = %err, "failed to forward buffered body");
    }
}

#[cfg(test)]
#[path = "error_page_test.rs"]
mod error_page_test;
