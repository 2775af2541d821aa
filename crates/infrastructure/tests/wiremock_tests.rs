//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Chat completions adapter against a mock Groq endpoint
//! - Resend adapter against a mock Resend endpoint
//! - The services wired to the real adapters and templates
//! - Configuration loading from a file

use std::sync::Arc;

use ai_core::InferenceConfig;
use application::{
    ApplicationError, CompletionOptions, DeliveryOutcome, DistributionService, EmailDeliveryPort,
    InferencePort, OutboundEmail, SummarizationService,
};
use chrono::{TimeZone, Utc};
use infrastructure::{
    AppConfig, ChatCompletionsInferenceAdapter, ResendEmailAdapter, TemplateEngine,
};
use integration_resend::ResendConfig;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn inference_adapter(server: &MockServer) -> ChatCompletionsInferenceAdapter {
    let config = InferenceConfig {
        base_url: server.uri(),
        timeout_ms: 5000,
        ..InferenceConfig::default()
    };
    ChatCompletionsInferenceAdapter::new(config, SecretString::from("gsk_test")).unwrap()
}

fn email_adapter(server: &MockServer) -> ResendEmailAdapter {
    let config = ResendConfig {
        base_url: server.uri(),
        timeout_ms: 5000,
    };
    ResendEmailAdapter::new(config, SecretString::from("re_test")).unwrap()
}

fn completion_body(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 40, "completion_tokens": 9, "total_tokens": 49}
    })
}

// ============================================================================
// Chat Completions Adapter Tests
// ============================================================================

mod inference_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn forwards_prompt_and_options() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer gsk_test"))
            .and(body_partial_json(json!({
                "model": "llama-3.3-70b-versatile",
                "temperature": 0.3,
                "max_tokens": 2048,
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!("Hi."))))
            .expect(1)
            .mount(&server)
            .await;

        let result = inference_adapter(&server)
            .generate_with_system("be brief", "hello", CompletionOptions::default())
            .await
            .unwrap();

        assert_eq!(result.content.as_deref(), Some("Hi."));
        assert_eq!(result.model, "llama-3.3-70b-versatile");
        assert_eq!(result.tokens_used, Some(49));
    }

    #[tokio::test]
    async fn provider_error_message_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Invalid API Key", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let err = inference_adapter(&server)
            .generate_with_system("s", "m", CompletionOptions::default())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to generate summary: Invalid API Key"
        );
    }
}

// ============================================================================
// Resend Adapter Tests
// ============================================================================

mod email_adapter_tests {
    use super::*;

    fn outbound() -> OutboundEmail {
        OutboundEmail {
            from: "notes@example.com".to_string(),
            to: vec!["a@example.com".to_string(), "b@example.com".to_string()],
            subject: "Meeting Summary - October 19, 2026".to_string(),
            html: "<pre>ok</pre>".to_string(),
            text: "ok".to_string(),
        }
    }

    #[tokio::test]
    async fn accepted_email_carries_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "em_1"})))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = email_adapter(&server).send(&outbound()).await.unwrap();

        assert_eq!(
            outcome,
            DeliveryOutcome::Accepted {
                message_id: Some("em_1".to_string())
            }
        );
    }

    #[tokio::test]
    async fn rejection_detail_is_passed_through() {
        let server = MockServer::start().await;
        let detail = json!({"statusCode": 403, "name": "validation_error", "message": "verify a domain"});

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(403).set_body_json(detail.clone()))
            .mount(&server)
            .await;

        let outcome = email_adapter(&server).send(&outbound()).await.unwrap();

        assert_eq!(outcome, DeliveryOutcome::Rejected { detail });
    }

    #[tokio::test]
    async fn unreachable_provider_is_delivery_error() {
        let config = ResendConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_ms: 2000,
        };
        let adapter = ResendEmailAdapter::new(config, SecretString::from("re_test")).unwrap();

        let err = adapter.send(&outbound()).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Delivery(_)));
        assert!(err.to_string().starts_with("Failed to send email: "));
    }
}

// ============================================================================
// Service Wiring Tests
// ============================================================================

mod service_wiring_tests {
    use super::*;

    #[tokio::test]
    async fn summarization_uses_fixed_system_prompt() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "messages": [
                    {
                        "role": "system",
                        "content": "You are an expert meeting notes summarizer. Your task is to create clear, concise, and actionable summaries."
                    },
                    {
                        "role": "user",
                        "content": "Summarize in one sentence.\n\nTranscript:\nAlice and Bob discussed Q3 budget."
                    }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!(
                "Alice and Bob reviewed the Q3 budget."
            ))))
            .expect(1)
            .mount(&server)
            .await;

        let service = SummarizationService::new(Some(Arc::new(inference_adapter(&server))));
        let result = service
            .summarize_record(&json!({
                "transcript": "Alice and Bob discussed Q3 budget.",
                "instruction": "Summarize in one sentence."
            }))
            .await
            .unwrap();

        assert_eq!(result.summary, "Alice and Bob reviewed the Q3 budget.");
    }

    #[tokio::test]
    async fn null_completion_falls_back() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!(null))))
            .mount(&server)
            .await;

        let service = SummarizationService::new(Some(Arc::new(inference_adapter(&server))));
        let result = service
            .summarize_record(&json!({"transcript": "t", "instruction": "i"}))
            .await
            .unwrap();

        assert_eq!(result.summary, "No summary generated");
    }

    #[tokio::test]
    async fn distribution_sends_rendered_email_once() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(body_partial_json(json!({
                "from": "notes@example.com",
                "to": ["a@example.com", "b@example.com"],
                "subject": "Meeting Summary - October 19, 2026",
                "text": "Meeting Summary - October 19, 2026\n\nShip <Friday>\n\n---\nThis summary was generated automatically using AI-powered meeting notes summarizer."
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "em_42"})))
            .expect(1)
            .mount(&server)
            .await;

        let service = DistributionService::new(
            Some(Arc::new(email_adapter(&server))),
            Some("notes@example.com".to_string()),
            Arc::new(TemplateEngine::new().unwrap()),
        );
        let request = domain::DistributionRequest::from_record(&json!({
            "summary": "Ship <Friday>",
            "emails": ["a@example.com", "b@example.com"]
        }))
        .unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();

        let result = service.distribute_at(&request, now).await.unwrap();

        assert!(result.delivered);
        assert_eq!(result.provider_message_id.as_deref(), Some("em_42"));
        assert_eq!(result.confirmation(), "Summary sent to 2 recipient(s)");

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = requests[0].body_json().unwrap();
        let html = body["html"].as_str().unwrap();
        assert!(html.contains("Ship &lt;Friday&gt;"));
        assert!(html.contains("Generated on October 19, 2026"));
    }

    #[tokio::test]
    async fn embedded_rejection_is_provider_rejected() {
        let server = MockServer::start().await;
        let error = json!({"name": "validation_error", "message": "domain is not verified"});

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": null, "error": error})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = DistributionService::new(
            Some(Arc::new(email_adapter(&server))),
            Some("notes@example.com".to_string()),
            Arc::new(TemplateEngine::new().unwrap()),
        );

        let err = service
            .distribute_record(&json!({"summary": "s", "emails": ["a@example.com"]}))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ProviderRejected { detail } if detail == error));
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod config_tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn file_values_are_layered_under_environment() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 4000
log_format = "json"

[email]
timezone = "America/New_York"

[credentials]
email_from = "file@example.com"
"#
        )
        .unwrap();

        let env = [
            ("MINUTES_SERVER__PORT".to_string(), "5000".to_string()),
            ("EMAIL_FROM".to_string(), "env@example.com".to_string()),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::load_from(Some(file.path()), env).unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.log_format, "json");
        assert_eq!(config.timezone().unwrap(), chrono_tz::America::New_York);
        assert_eq!(config.credentials.email_from(), Some("env@example.com"));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let result = AppConfig::load_from(Some(&missing), config::Map::new());

        assert!(result.is_err());
    }
}
