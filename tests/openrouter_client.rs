use confab::backends::OpenRouter;
use confab::chat::{ChatMessage, CompletionClient, CompletionRequest, GenerationParams};
use confab::LLMError;
use mockito::Matcher;
use secrecy::SecretString;
use serde_json::json;

fn payload() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system().content("Kamu adalah asisten.").build(),
        ChatMessage::user().content("Halo").build(),
    ]
}

fn request<'a>(messages: &'a [ChatMessage], key: &'a SecretString) -> CompletionRequest<'a> {
    CompletionRequest {
        messages,
        model: "x-ai/grok-3-mini",
        api_key: key,
        params: GenerationParams::new(512, 0.5).unwrap(),
    }
}

#[tokio::test]
async fn posts_chat_completion_and_reads_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/chat/completions")
        .match_header("authorization", "Bearer sk-or-test")
        .match_body(Matcher::Json(json!({
            "model": "x-ai/grok-3-mini",
            "messages": [
                {"role": "system", "content": "Kamu adalah asisten."},
                {"role": "user", "content": "Halo"}
            ],
            "max_tokens": 512,
            "temperature": 0.5
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"Halo juga!"}},{"message":{"content":"ignored"}}]}"#)
        .create_async()
        .await;

    let client = OpenRouter::new(Some(format!("{}/api/v1", server.url())), None).unwrap();
    let key = SecretString::new("sk-or-test".to_string());
    let messages = payload();
    let reply = client.complete(&request(&messages, &key)).await.unwrap();

    assert_eq!(reply, "Halo juga!");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_carries_code_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"No auth credentials found"}}"#)
        .create_async()
        .await;

    let client = OpenRouter::new(Some(server.url()), None).unwrap();
    let key = SecretString::new("sk-or-bad".to_string());
    let messages = payload();
    let err = client.complete(&request(&messages, &key)).await.unwrap_err();

    match err {
        LLMError::EndpointStatus { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("No auth credentials"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let client = OpenRouter::new(Some(server.url()), None).unwrap();
    let key = SecretString::new("   ".to_string());
    let messages = payload();
    let err = client.complete(&request(&messages, &key)).await.unwrap_err();

    assert!(matches!(err, LLMError::MissingCredential));
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_choices_is_a_format_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let client = OpenRouter::new(Some(server.url()), None).unwrap();
    let key = SecretString::new("sk-or-test".to_string());
    let messages = payload();
    let err = client.complete(&request(&messages, &key)).await.unwrap_err();

    assert!(matches!(err, LLMError::ResponseFormatError { .. }));
}

#[tokio::test]
async fn silent_endpoint_times_out() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client = OpenRouter::new(Some(format!("http://{addr}")), Some(1)).unwrap();
    let key = SecretString::new("sk-or-test".to_string());
    let messages = payload();
    let err = client.complete(&request(&messages, &key)).await.unwrap_err();

    assert!(matches!(err, LLMError::Timeout(1)), "got {err:?}");
}
