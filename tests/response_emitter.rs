use bridle_dispatch_rs::{EmitError, Response, StatusSignal};

#[test]
fn response_when_terminated_then_writes_status_headers_and_body() {
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    response
        .write_head(200, [("Content-Type", "text/html"), ("X-Request", "1")])
        .expect("head should be writable");
    response.write(b"<p>hi</p>").expect("body should be writable");
    response.terminate().expect("first termination succeeds");

    assert_eq!(
        sink,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nX-Request: 1\r\n\r\n<p>hi</p>"
    );
}

#[test]
fn response_when_headers_written_then_insertion_order_preserved() {
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    response
        .write_head(204, [("B-Second", "2"), ("A-First", "1")])
        .expect("head should be writable");
    response.terminate().expect("first termination succeeds");

    let text = String::from_utf8(sink).expect("ascii output");
    let b_index = text.find("B-Second").expect("header present");
    let a_index = text.find("A-First").expect("header present");
    assert!(b_index < a_index, "headers must keep insertion order");
}

#[test]
fn response_when_write_head_repeated_then_replaces_code_and_headers() {
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    response
        .write_head(200, [("Content-Type", "text/html")])
        .expect("head should be writable");
    response
        .write_head(404, [("X-Only", "yes")])
        .expect("head is replaceable before termination");

    assert_eq!(response.code(), 404);
    assert_eq!(
        response.headers(),
        [("X-Only".to_string(), "yes".to_string())]
    );

    response.terminate().expect("first termination succeeds");
    let text = String::from_utf8(sink).expect("ascii output");
    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(!text.contains("Content-Type"));
}

#[test]
fn response_when_body_written_in_chunks_then_appended() {
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    response.write(b"one,").expect("body should be writable");
    response.write(b"two").expect("body should be writable");
    assert_eq!(response.body(), b"one,two");
    response.terminate().expect("first termination succeeds");

    assert_eq!(sink, b"HTTP/1.1 200 OK\r\n\r\none,two");
}

#[test]
fn response_when_terminate_called_twice_then_fails_already_terminated() {
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    response.terminate().expect("first termination succeeds");
    let err = response.terminate().expect_err("second termination fails");

    assert!(matches!(err, EmitError::AlreadyTerminated));
}

#[test]
fn response_when_write_after_terminate_then_fails_already_terminated() {
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    response.terminate().expect("first termination succeeds");
    let err = response.write(b"late").expect_err("body is sealed");

    assert!(matches!(err, EmitError::AlreadyTerminated));
}

#[test]
fn response_when_write_head_after_terminate_then_fails_already_terminated() {
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    response.terminate().expect("first termination succeeds");
    let err = response
        .write_head(200, [("Content-Type", "text/plain")])
        .expect_err("head is sealed");

    assert!(matches!(err, EmitError::AlreadyTerminated));
}

#[test]
fn response_when_signal_emitted_then_marks_terminated() {
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    response
        .emit_signal(&StatusSignal::see_other("/next"))
        .expect("signal emission succeeds");

    assert!(response.is_terminated());
    assert_eq!(response.code(), 303);

    let err = response
        .emit_signal(&StatusSignal::not_found())
        .expect_err("signal path is single-use too");
    assert!(matches!(err, EmitError::AlreadyTerminated));

    assert_eq!(sink, b"HTTP/1.1 303 See Other\r\nLocation: /next\r\n");
}
