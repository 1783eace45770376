use powertips::ai::openai::OpenAiGenerator;
use powertips::ai::{GenerationParams, TextGenerator};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_openai_generate_reads_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer k"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"choices":[{"message":{"content":"1. Use LEDs 2. Unplug 3. Insulate"}}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let url = format!("{}/v1/chat/completions", server.uri());
    let generator = OpenAiGenerator::new("k", "gpt-4.1", Some(&url));
    let text = generator
        .generate("tips please", &GenerationParams::default())
        .await
        .unwrap();
    assert_eq!(text, "1. Use LEDs 2. Unplug 3. Insulate");
}

#[tokio::test]
async fn test_openai_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let url = format!("{}/v1/chat/completions", server.uri());
    let generator = OpenAiGenerator::new("wrong", "gpt-4.1", Some(&url));
    let err = generator
        .generate("tips please", &GenerationParams::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("401"));
}
