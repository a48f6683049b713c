use super::*;
use serde_json::json;

// =============================================================
// Requests
// =============================================================

#[test]
fn chat_request_serializes_question_only() {
    let req = ChatRequest { question: "What role did I have?".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "question": "What role did I have?" }));
}

#[test]
fn chat_request_keeps_empty_question() {
    let req = ChatRequest { question: String::new() };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "question": "" }));
}

#[test]
fn mail_request_serializes_three_fields() {
    let req = MailRequest {
        recipient: "a@example.test".to_owned(),
        subject: "Hi".to_owned(),
        body: "line 1\nline 2".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({ "recipient": "a@example.test", "subject": "Hi", "body": "line 1\nline 2" })
    );
}

// =============================================================
// ChatResponse
// =============================================================

#[test]
fn chat_response_uses_returned_answer() {
    let resp: ChatResponse = serde_json::from_value(json!({ "answer": "Engineer" })).unwrap();
    assert_eq!(resp.answer_text(), "Engineer");
}

#[test]
fn chat_response_without_answer_falls_back() {
    let resp: ChatResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(resp.answer_text(), "No answer");
}

#[test]
fn chat_response_null_or_empty_answer_falls_back() {
    let resp: ChatResponse = serde_json::from_value(json!({ "answer": null })).unwrap();
    assert_eq!(resp.answer_text(), NO_ANSWER);
    let resp: ChatResponse = serde_json::from_value(json!({ "answer": "" })).unwrap();
    assert_eq!(resp.answer_text(), NO_ANSWER);
}

#[test]
fn chat_response_falsy_answer_falls_back() {
    for answer in [json!(false), json!(0)] {
        let resp: ChatResponse = serde_json::from_value(json!({ "answer": answer })).unwrap();
        assert_eq!(resp.answer_text(), NO_ANSWER, "answer {answer}");
    }
}

#[test]
fn chat_response_non_string_answer_is_shown() {
    let resp: ChatResponse = serde_json::from_value(json!({ "answer": 42 })).unwrap();
    assert_eq!(resp.answer_text(), "42");
    let resp: ChatResponse = serde_json::from_value(json!({ "answer": ["a", "b"] })).unwrap();
    assert_eq!(resp.answer_text(), "[\"a\",\"b\"]");
}

#[test]
fn chat_response_with_answer_builds_text_answer() {
    assert_eq!(ChatResponse::with_answer("Engineer").answer_text(), "Engineer");
}

#[test]
fn chat_response_preserves_multiline_answer() {
    let text = "Experience:\n  - Engineer at Acme (2020 – 2024)";
    let resp: ChatResponse = serde_json::from_value(json!({ "answer": text, "extra": 1 })).unwrap();
    assert_eq!(resp.answer_text(), text);
}

// =============================================================
// MailResponse
// =============================================================

#[test]
fn mail_response_ok_true_is_sent() {
    let resp: MailResponse = serde_json::from_value(json!({ "ok": true })).unwrap();
    assert!(resp.accepted());
    assert_eq!(resp.notice_text(), "Email sent!");
}

#[test]
fn mail_response_error_is_interpolated() {
    let resp: MailResponse = serde_json::from_value(json!({ "ok": false, "error": "bad recipient" })).unwrap();
    assert!(!resp.accepted());
    assert_eq!(resp.notice_text(), "Failed: bad recipient");
}

#[test]
fn mail_response_missing_fields_is_failure_with_unknown_error() {
    let resp: MailResponse = serde_json::from_value(json!({})).unwrap();
    assert!(!resp.accepted());
    assert_eq!(resp.notice_text(), "Failed: unknown error");
}

#[test]
fn mail_response_ok_follows_truthiness() {
    let cases = [
        (json!({ "ok": true }), true),
        (json!({ "ok": 1 }), true),
        (json!({ "ok": -0.5 }), true),
        (json!({ "ok": "yes" }), true),
        (json!({ "ok": "false" }), true),
        (json!({ "ok": [] }), true),
        (json!({ "ok": {} }), true),
        (json!({ "ok": false }), false),
        (json!({ "ok": 0 }), false),
        (json!({ "ok": 0.0 }), false),
        (json!({ "ok": "" }), false),
        (json!({ "ok": null }), false),
        (json!({}), false),
    ];
    for (body, accepted) in cases {
        let resp: MailResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(resp.accepted(), accepted, "body {body}");
        let expected = if accepted { "Email sent!" } else { "Failed: unknown error" };
        assert_eq!(resp.notice_text(), expected, "body {body}");
    }
}

#[test]
fn mail_response_structured_error_renders_as_json() {
    let resp: MailResponse =
        serde_json::from_value(json!({ "detail": "x", "error": { "code": 422 } })).unwrap();
    assert_eq!(resp.notice_text(), "Failed: {\"code\":422}");
}
