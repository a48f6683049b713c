use super::*;

#[test]
fn decode_response_parses_success_body() {
    let resp: ChatResponse = decode_response(200, r#"{"answer":"Engineer"}"#).unwrap();
    assert_eq!(resp.answer_text(), "Engineer");
}

#[test]
fn decode_response_uses_json_body_of_error_status() {
    let resp: MailResponse = decode_response(500, r#"{"ok":false,"error":"SMTP not configured in environment"}"#).unwrap();
    assert_eq!(resp.notice_text(), "Failed: SMTP not configured in environment");
}

#[test]
fn decode_response_non_json_success_is_decode_error() {
    let err = decode_response::<ChatResponse>(200, "<html>oops</html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_response_non_json_error_status_reports_status() {
    let err = decode_response::<MailResponse>(502, "Bad Gateway").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502 });
    assert_eq!(err.to_string(), "server responded with status 502");
}

#[test]
fn decode_response_empty_body_is_decode_error() {
    assert!(matches!(decode_response::<ChatResponse>(204, ""), Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let config = ApiConfig::new(Some("http://localhost:8000"), None).unwrap();
    let ask_result = block_on_ready(ask(&config, &ChatRequest { question: "q".to_owned() }));
    assert_eq!(ask_result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
/// Minimal single-poll executor; the SSR stubs resolve on first poll.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}
