mod common;

use bunner_chain_rs::{
    ErrorPageHandler, HandlerExt, Request, RequestContext, ResponseWriter, handler_fn, respond,
};
use common::builders::get;
use common::headers::{body_text, response_header};
use http::StatusCode;

#[test]
fn not_found_message_is_rendered_into_page() {
    let handler = handler_fn(|_: &Request, _: &RequestContext, response: &mut dyn ResponseWriter| {
        response.write_status(StatusCode::NOT_FOUND);
        let _ = response.write_all(b"the page could not be found");
    })
    .with_error_pages();

    let response = respond(&handler, &get("/missing").build());

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(&response);
    assert!(body.contains("the page could not be found"));
    assert!(body.contains("<title>404 - Not Found</title>"));
    assert_ne!(body, "the page could not be found");
    assert_eq!(
        response_header(&response, "content-type"),
        Some("text/html; charset=utf-8")
    );
}

#[test]
fn every_status_in_error_range_gets_a_page() {
    for code in [400u16, 401, 403, 418, 429, 500, 503, 509] {
        let status = StatusCode::from_u16(code).expect("status");
        let handler = ErrorPageHandler::new(handler_fn(
            move |_: &Request, _: &RequestContext, response: &mut dyn ResponseWriter| {
                response.write_status(status);
            },
        ));

        let response = respond(&handler, &get("/").build());

        assert_eq!(response.status(), status);
        assert!(
            body_text(&response).contains(&format!("<h1>{code}</h1>")),
            "status {code} should render a page"
        );
    }
}

#[test]
fn statuses_outside_error_range_pass_through() {
    for code in [200u16, 201, 302, 399, 510, 511] {
        let status = StatusCode::from_u16(code).expect("status");
        let handler = ErrorPageHandler::new(handler_fn(
            move |_: &Request, _: &RequestContext, response: &mut dyn ResponseWriter| {
                response.write_status(status);
                let _ = response.write_all(b"raw");
            },
        ));

        let response = respond(&handler, &get("/").build());

        assert_eq!(response.status(), status);
        assert_eq!(response.body(), b"raw", "status {code} should pass through");
    }
}

#[test]
fn markup_in_message_is_escaped() {
    let handler = handler_fn(|_: &Request, _: &RequestContext, response: &mut dyn ResponseWriter| {
        response.write_status(StatusCode::BAD_REQUEST);
        let _ = response.write_all(b"<b>bad</b> & worse");
    })
    .with_error_pages();

    let body = body_text(&respond(&handler, &get("/").build()));

    assert!(body.contains("&lt;b&gt;bad&lt;/b&gt; &amp; worse"));
}
