use std::sync::Arc;

use bridle_dispatch_rs::{
    Controller, DispatchMode, Dispatcher, DispatcherOptions, EmitError, Exchange, Handler,
    HandlerReply, HttpMethod, Outcome, RequestContext, Resolution, Response, RoutingTable,
    StatusSignal,
};

/// Raises a redirect for every verb.
struct RedirectController;

impl Handler for RedirectController {
    fn invoke(&self, _exchange: &mut Exchange<'_, '_>, _params: &[String]) -> HandlerReply {
        Err(StatusSignal::see_other("/elsewhere"))
    }
}

impl Controller for RedirectController {
    fn resolve(&self, _verb: HttpMethod) -> Resolution<'_> {
        Resolution::Handler(self)
    }
}

/// Raises 403 for every verb.
struct ForbiddenController;

impl Handler for ForbiddenController {
    fn invoke(&self, _exchange: &mut Exchange<'_, '_>, _params: &[String]) -> HandlerReply {
        Err(StatusSignal::forbidden())
    }
}

impl Controller for ForbiddenController {
    fn resolve(&self, _verb: HttpMethod) -> Resolution<'_> {
        Resolution::Handler(self)
    }
}

/// Writes a page through the response builder and completes normally.
struct PageController;

impl Handler for PageController {
    fn invoke(&self, exchange: &mut Exchange<'_, '_>, _params: &[String]) -> HandlerReply {
        exchange
            .response
            .write_head(200, [("Content-Type", "text/html")])
            .expect("response is still open");
        exchange
            .response
            .write(b"<p>hello</p>")
            .expect("response is still open");
        exchange
            .response
            .terminate()
            .expect("first termination succeeds");
        Ok(None)
    }
}

impl Controller for PageController {
    fn resolve(&self, _verb: HttpMethod) -> Resolution<'_> {
        Resolution::Handler(self)
    }
}

fn dispatcher(mode: DispatchMode) -> Dispatcher {
    let options = DispatcherOptions::builder()
        .mode(mode)
        .build()
        .expect("options should build");
    Dispatcher::new(Some(options))
}

#[test]
fn dispatch_when_handler_raises_redirect_then_emit_mode_writes_location() {
    let dispatcher = dispatcher(DispatchMode::Emit);
    let table = RoutingTable::new().route("/", Arc::new(RedirectController));
    let request = RequestContext::new("GET", "/");
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    let outcome = dispatcher
        .dispatch(&table, &request, &mut response)
        .expect("dispatch should not fault");

    assert_eq!(outcome, Outcome::Emitted(StatusSignal::see_other("/elsewhere")));
    assert_eq!(outcome.code(), Some(303));
    assert_eq!(sink, b"HTTP/1.1 303 See Other\r\nLocation: /elsewhere\r\n");
}

#[test]
fn dispatch_when_handler_reads_request_context_then_values_available() {
    struct IntrospectController;

    impl Handler for IntrospectController {
        fn invoke(&self, exchange: &mut Exchange<'_, '_>, _params: &[String]) -> HandlerReply {
            Ok(Some(format!(
                "{} {}",
                exchange.request.method(),
                exchange.request.path()
            )))
        }
    }

    impl Controller for IntrospectController {
        fn resolve(&self, _verb: HttpMethod) -> Resolution<'_> {
            Resolution::Handler(self)
        }
    }

    let dispatcher = dispatcher(DispatchMode::Signal);
    let table = RoutingTable::new().route("/info", Arc::new(IntrospectController));
    let request = RequestContext::new("GET", "/info");
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    let outcome = dispatcher
        .dispatch(&table, &request, &mut response)
        .expect("dispatch should not fault");

    assert_eq!(outcome.value(), Some("GET /info"));
}

#[test]
fn dispatch_when_handler_raises_forbidden_then_signal_mode_returns_value() {
    let dispatcher = dispatcher(DispatchMode::Signal);
    let table = RoutingTable::new().route("/", Arc::new(ForbiddenController));
    let request = RequestContext::new("GET", "/");
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    let outcome = dispatcher
        .dispatch(&table, &request, &mut response)
        .expect("dispatch should not fault");

    assert_eq!(outcome, Outcome::Signal(StatusSignal::forbidden()));
    assert!(sink.is_empty(), "signal mode must not touch the sink");
}

#[test]
fn dispatch_when_not_found_in_emit_mode_then_status_line_written() {
    let dispatcher = dispatcher(DispatchMode::Emit);
    let table = RoutingTable::new();
    let request = RequestContext::new("GET", "/missing");
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    let outcome = dispatcher
        .dispatch(&table, &request, &mut response)
        .expect("dispatch should not fault");

    assert_eq!(outcome, Outcome::Emitted(StatusSignal::not_found()));
    assert_eq!(sink, b"HTTP/1.1 404 Not Found\r\n");
}

#[test]
fn dispatch_when_not_implemented_in_emit_mode_then_status_line_written() {
    struct Bare;
    impl Controller for Bare {
        fn resolve(&self, _verb: HttpMethod) -> Resolution<'_> {
            Resolution::Unsupported
        }
    }

    let dispatcher = dispatcher(DispatchMode::Emit);
    let table = RoutingTable::new().route("/", Arc::new(Bare));
    let request = RequestContext::new("GET", "/");
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    dispatcher
        .dispatch(&table, &request, &mut response)
        .expect("dispatch should not fault");

    assert_eq!(sink, b"HTTP/1.1 501 Not Implemented\r\n");
}

#[test]
fn dispatch_when_not_found_in_signal_mode_then_sink_untouched() {
    let dispatcher = dispatcher(DispatchMode::Signal);
    let table = RoutingTable::new();
    let request = RequestContext::new("GET", "/missing");
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    let outcome = dispatcher
        .dispatch(&table, &request, &mut response)
        .expect("dispatch should not fault");

    assert_eq!(outcome, Outcome::Signal(StatusSignal::not_found()));
    assert!(!response.is_terminated());
    assert!(sink.is_empty());
}

#[test]
fn dispatch_when_signal_emitted_then_response_rejects_further_writes() {
    let dispatcher = dispatcher(DispatchMode::Emit);
    let table = RoutingTable::new();
    let request = RequestContext::new("GET", "/missing");
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    dispatcher
        .dispatch(&table, &request, &mut response)
        .expect("dispatch should not fault");

    assert!(response.is_terminated());
    let err = response.terminate().expect_err("response is sealed");
    assert!(matches!(err, EmitError::AlreadyTerminated));
}

#[test]
fn dispatch_when_handler_completes_then_nothing_extra_emitted() {
    let dispatcher = dispatcher(DispatchMode::Emit);
    let table = RoutingTable::new().route("/", Arc::new(PageController));
    let request = RequestContext::new("GET", "/");
    let mut sink = Vec::new();
    let mut response = Response::new(&mut sink);

    let outcome = dispatcher
        .dispatch(&table, &request, &mut response)
        .expect("dispatch should not fault");

    assert_eq!(outcome, Outcome::Completed(None));
    assert_eq!(
        sink,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<p>hello</p>"
    );
}
