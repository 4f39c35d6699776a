mod common;

use bunner_chain_rs::{
    LoggingHandler, Output, Request, RequestContext, ResponseWriter, handler_fn, respond,
};
use common::builders::get;
use http::StatusCode;

fn writes_chunks(chunks: &'static [&'static [u8]]) -> impl bunner_chain_rs::Handler {
    handler_fn(move |_: &Request, _: &RequestContext, response: &mut dyn ResponseWriter| {
        for chunk in chunks {
            let _ = response.write_all(chunk);
        }
    })
}

#[test]
fn line_reports_total_bytes_across_writes() {
    let (output, buffer) = Output::buffer();
    let handler = LoggingHandler::new(writes_chunks(&[b"empty", b" ", b"response"])).with_output(output);

    respond(&handler, &get("/index").build());

    assert!(buffer.contents().contains("GET /index HTTP/1.1 200 14"));
}

#[test]
fn line_reports_not_found_with_zero_bytes() {
    let (output, buffer) = Output::buffer();
    let handler = LoggingHandler::new(handler_fn(
        |_: &Request, _: &RequestContext, response: &mut dyn ResponseWriter| {
            response.write_status(StatusCode::NOT_FOUND);
        },
    ))
    .with_output(output);

    respond(&handler, &get("/index").build());

    assert!(buffer.contents().contains("GET /index HTTP/1.1 404 0"));
}

#[test]
fn logged_status_matches_sent_status_when_handler_changes_it_before_body() {
    let (output, buffer) = Output::buffer();
    let handler = LoggingHandler::new(handler_fn(
        |_: &Request, _: &RequestContext, response: &mut dyn ResponseWriter| {
            response.write_status(StatusCode::NOT_FOUND);
            response.write_status(StatusCode::INTERNAL_SERVER_ERROR);
            let _ = response.write_all(b"oops");
        },
    ))
    .with_output(output);

    let response = respond(&handler, &get("/x").build());

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(buffer.contents().contains("GET /x HTTP/1.1 500 4"));
}

#[test]
fn status_without_body_reaches_client() {
    let (output, buffer) = Output::buffer();
    let handler = LoggingHandler::new(handler_fn(
        |_: &Request, _: &RequestContext, response: &mut dyn ResponseWriter| {
            response.write_status(StatusCode::NO_CONTENT);
        },
    ))
    .with_output(output);

    let response = respond(&handler, &get("/empty").build());

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(buffer.contents().contains("GET /empty HTTP/1.1 204 0"));
}

#[test]
fn line_carries_remote_address_referer_and_user_agent() {
    let (output, buffer) = Output::buffer();
    let handler = LoggingHandler::new(writes_chunks(&[b"ok"])).with_output(output);

    respond(
        &handler,
        &get("/index.html")
            .remote_addr("10.1.2.3:4567")
            .header("Referer", "testing")
            .header("User-Agent", "MWTests")
            .build(),
    );

    let line = buffer.contents();
    assert!(line.starts_with("10.1.2.3:4567 - - ["));
    assert!(line.ends_with("GET /index.html HTTP/1.1 200 2 testing MWTests\n"));
}

#[test]
fn one_line_is_written_per_request() {
    let (output, buffer) = Output::buffer();
    let handler = LoggingHandler::new(writes_chunks(&[b"x"])).with_output(output);

    for _ in 0..3 {
        respond(&handler, &get("/").build());
    }

    assert_eq!(buffer.lines().len(), 3);
}
