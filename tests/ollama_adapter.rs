//! End-to-end tests of the Ollama adapter against a mocked `/api/chat`.

mod common;

use common::{MockServerFixture, CHAT_PATH};
use element_agent::transport::TransportError;
use element_agent::types::{ArgValue, Arguments, LlmRequest, Part, Role, ToolDescriptor, Turn};
use element_agent::{AdapterConfig, Error, Llm, OllamaLlm};
use futures::StreamExt;
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

async fn collect(llm: &OllamaLlm, request: LlmRequest, stream: bool) -> Vec<element_agent::Result<element_agent::LlmResponse>> {
    llm.generate(request, stream).collect().await
}

#[tokio::test]
async fn test_plain_question_and_text_answer() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_chat_reply(
            Matcher::Json(json!({
                "model": "qwen2.5",
                "messages": [{"role": "user", "content": "What is the atomic weight of Au?"}],
                "tools": [],
                "stream": false,
                "temperature": 0.7
            })),
            json!({"role": "assistant", "content": "196.97"}),
        )
        .await;

    let llm = fixture.adapter();
    let items = collect(
        &llm,
        LlmRequest::new(vec![Turn::user("What is the atomic weight of Au?")]),
        false,
    )
    .await;

    mock.assert_async().await;
    assert_eq!(items.len(), 1);
    let resp = items.into_iter().next().unwrap().unwrap();
    assert_eq!(resp.content.role, Role::Assistant);
    assert_eq!(resp.content.parts, vec![Part::text("196.97")]);
    assert!(resp.turn_complete);
    assert!(!resp.partial);
    assert_eq!(resp.finish_reason.as_deref(), Some("stop"));
    assert_eq!(resp.usage.unwrap().total_tokens, 49);
}

#[tokio::test]
async fn test_tool_call_reply() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_chat_reply(
            Matcher::AllOf(vec![
                Matcher::Regex(r#""tools":\[\{"type":"function","function":\{"name":"get_element_info""#.to_string()),
                Matcher::Regex(r#""required":\["symbol"\]"#.to_string()),
            ]),
            json!({
                "role": "assistant",
                "content": "",
                "tool_calls": [{"id": "x", "function": {"name": "get_element_info", "arguments": {"symbol": "Fe"}}}]
            }),
        )
        .await;

    let request = LlmRequest::new(vec![Turn::user("Tell me about iron")])
        .with_tools(vec![ToolDescriptor::new("get_element_info")]);
    let items = collect(&fixture.adapter(), request, false).await;

    mock.assert_async().await;
    let resp = items.into_iter().next().unwrap().unwrap();
    assert_eq!(resp.content.parts.len(), 1);
    let call = resp.content.function_calls().next().unwrap();
    assert_eq!(call.name, "get_element_info");
    assert_eq!(call.args.get("symbol"), Some(&ArgValue::from("Fe")));
    assert!(resp.content.text().is_none());
}

#[tokio::test]
async fn test_nil_tool_result_sent_as_empty_object() {
    let mut fixture = MockServerFixture::new().await;
    let mut args = Arguments::new();
    args.insert("symbol".into(), ArgValue::from("Fe"));

    let mock = fixture
        .mock_chat_reply(
            Matcher::Regex(r#""role":"tool","content":"\{\}""#.to_string()),
            json!({"role": "assistant", "content": "No data."}),
        )
        .await;

    let request = LlmRequest::new(vec![
        Turn::user("Fe?"),
        Turn::model(vec![Part::function_call("get_element_info", args)]),
        Turn::tool_response("get_element_info", ArgValue::Null),
    ]);
    let items = collect(&fixture.adapter(), request, false).await;

    mock.assert_async().await;
    assert_eq!(items[0].as_ref().unwrap().content.text(), Some("No data."));
}

#[tokio::test]
async fn test_server_error_is_single_transport_error() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_raw_response(500, "server error").await;

    let items = collect(&fixture.adapter(), LlmRequest::new(vec![Turn::user("hi")]), false).await;

    mock.assert_async().await;
    assert_eq!(items.len(), 1);
    let err = items.into_iter().next().unwrap().unwrap_err();
    assert!(err.is_transport());
    match &err {
        Error::Transport(TransportError::Status { status, body }) => {
            assert!(status.starts_with("500"));
            assert_eq!(body, "server error");
        }
        other => panic!("Expected status error, got {:?}", other),
    }
    let msg = err.to_string();
    assert!(msg.contains("500"));
    assert!(msg.contains("server error"));
}

#[tokio::test]
async fn test_non_200_success_status_is_rejected() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_raw_response(202, "{}").await;

    let items = collect(&fixture.adapter(), LlmRequest::new(vec![Turn::user("hi")]), false).await;
    assert!(matches!(
        items[0],
        Err(Error::Transport(TransportError::Status { .. }))
    ));
}

#[tokio::test]
async fn test_undecodable_body() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_raw_response(200, "<html>oops</html>").await;

    let items = collect(&fixture.adapter(), LlmRequest::new(vec![Turn::user("hi")]), false).await;
    match &items[0] {
        Err(Error::Transport(TransportError::Decode { body, .. })) => {
            assert_eq!(body, "<html>oops</html>");
        }
        other => panic!("Expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_stream_request_still_single_complete_reply() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_chat_reply(
            Matcher::PartialJson(json!({"stream": false})),
            json!({"role": "assistant", "content": "ok"}),
        )
        .await;

    let items = collect(&fixture.adapter(), LlmRequest::new(vec![Turn::user("hi")]), true).await;

    mock.assert_async().await;
    assert_eq!(items.len(), 1);
    let resp = items[0].as_ref().unwrap();
    assert!(resp.turn_complete);
    assert!(!resp.partial);
}

#[tokio::test]
async fn test_translation_failure_never_reaches_server() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", CHAT_PATH)
        .expect(0)
        .create_async()
        .await;

    let mut args = Arguments::new();
    args.insert("weight".into(), ArgValue::Float(f64::NAN));
    let request = LlmRequest::new(vec![Turn::model(vec![Part::function_call("scale", args)])]);
    let items = collect(&fixture.adapter(), request, false).await;

    mock.assert_async().await;
    assert_eq!(items.len(), 1);
    assert!(items[0].as_ref().unwrap_err().is_translation());
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", CHAT_PATH)
        .with_status(200)
        .with_body(common::chat_reply(json!({"role": "assistant", "content": "pong"})).to_string())
        .expect(2)
        .create_async()
        .await;

    let llm = fixture.adapter();
    let (a, b) = tokio::join!(
        collect(&llm, LlmRequest::new(vec![Turn::user("ping 1")]), false),
        collect(&llm, LlmRequest::new(vec![Turn::user("ping 2")]), false),
    );

    mock.assert_async().await;
    assert_eq!(a[0].as_ref().unwrap().content.text(), Some("pong"));
    assert_eq!(b[0].as_ref().unwrap().content.text(), Some("pong"));
}

#[tokio::test]
async fn test_connection_refused() {
    let llm = OllamaLlm::new(AdapterConfig::default().with_base_url("http://127.0.0.1:1")).unwrap();
    let items = collect(&llm, LlmRequest::new(vec![Turn::user("hi")]), false).await;
    assert_eq!(items.len(), 1);
    assert!(matches!(
        items[0],
        Err(Error::Transport(TransportError::Http(_)))
    ));
}

#[tokio::test]
async fn test_cancellation_aborts_hanging_call() {
    // Accepts connections but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let llm = OllamaLlm::new(AdapterConfig::default().with_base_url(format!("http://{}", addr))).unwrap();
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let items: Vec<_> = tokio::time::timeout(
        Duration::from_secs(5),
        llm.generate_with_cancel(LlmRequest::new(vec![Turn::user("hi")]), false, token)
            .collect::<Vec<_>>(),
    )
    .await
    .expect("cancellation should end the call promptly");

    server.abort();
    assert_eq!(items.len(), 1);
    assert!(matches!(
        items[0],
        Err(Error::Transport(TransportError::Cancelled))
    ));
}

#[tokio::test]
async fn test_timeout_from_config() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = AdapterConfig::default()
        .with_base_url(format!("http://{}", addr))
        .with_timeout(Duration::from_millis(200));
    let llm = OllamaLlm::new(config).unwrap();
    let items = collect(&llm, LlmRequest::new(vec![Turn::user("hi")]), false).await;

    server.abort();
    match &items[0] {
        Err(Error::Transport(TransportError::Http(e))) => assert!(e.is_timeout()),
        other => panic!("Expected timeout, got {:?}", other),
    }
}
