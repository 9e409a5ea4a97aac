    use super::*;
    use parking_lot::Mutex;
    use troupe_protocols::error::HookError;

    fn provider(responses: &[&str]) -> MockProvider {
        MockProvider::new(
            responses.iter().map(|s| s.to_string()).collect(),
            None,
            false,
            false,
        )
    }

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest::new("mock-model", vec![Message::user(text)])
    }

    struct RecordingEmitter {
        events: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl RecordingEmitter {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<(String, serde_json::Value)> {
            self.events.lock().clone()
        }
    }

    #[async_trait]
    impl HookEmitter for RecordingEmitter {
        async fn emit(&self, event: &str, payload: serde_json::Value) -> Result<(), HookError> {
            self.events.lock().push((event.to_string(), payload));
            Ok(())
        }
    }

    struct FailingEmitter;

    #[async_trait]
    impl HookEmitter for FailingEmitter {
        async fn emit(&self, event: &str, _payload: serde_json::Value) -> Result<(), HookError> {
            Err(HookError::Handler {
                event: event.to_string(),
                message: "sink unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(provider(&[]).id(), "mock");
    }

    #[test]
    fn test_provider_capabilities() {
        let caps = provider(&[]).capabilities().clone();
        assert!(!caps.streaming);
        assert!(caps.tool_calling);
        assert!(!caps.vision);
        assert!(!caps.json_mode);
    }

    #[test]
    fn test_models() {
        let provider = provider(&[]);
        assert_eq!(provider.models().len(), 1);
        assert_eq!(provider.models()[0].id, "mock-model");
    }

    #[test]
    fn test_empty_responses_fall_back_to_defaults() {
        let provider = provider(&[]);
        assert_eq!(provider.responses, default_responses());
        assert_eq!(provider.responses.len(), 3);
    }

    #[tokio::test]
    async fn test_round_robin_two_responses() {
        let provider = provider(&["A", "B"]);

        // Counter increments before selection: call n selects index n % 2.
        let first = provider.complete(request("Hello")).await.unwrap();
        assert_eq!(first.message.content.first_text(), Some("B"));

        let second = provider.complete(request("Hello again")).await.unwrap();
        assert_eq!(second.message.content.first_text(), Some("A"));

        let third = provider.complete(request("And again")).await.unwrap();
        assert_eq!(third.message.content.first_text(), Some("B"));
    }

    #[tokio::test]
    async fn test_first_default_response() {
        let provider = provider(&[]);
        let response = provider.complete(request("Hello")).await.unwrap();
        assert_eq!(
            response.message.content.first_text(),
            Some("Task completed successfully.")
        );
    }

    #[tokio::test]
    async fn test_canned_response_shape() {
        let provider = provider(&["A"]);
        let response = provider.complete(request("Hello")).await.unwrap();

        assert_eq!(response.message.role, MessageRole::Assistant);
        assert!(response.tool_calls().is_empty());
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage, Usage::new(10, 20));
        assert_eq!(response.usage.total_tokens, 30);
        assert_eq!(response.model, "mock-model");
        assert_eq!(response.id, "mock_completion_1");
    }

    #[tokio::test]
    async fn test_read_trigger_produces_tool_call() {
        let provider = provider(&["A"]);
        let response = provider
            .complete(request("Please read the file"))
            .await
            .unwrap();

        assert_eq!(response.tool_calls().len(), 1);
        let call = &response.tool_calls()[0];
        assert_eq!(call.id, "mock_tool_1");
        assert_eq!(call.name, "read");
        assert_eq!(call.arguments, serde_json::json!({"path": "test.txt"}));

        assert_eq!(
            response.message.content.first_text(),
            Some("I'll read that file for you.")
        );
        assert_eq!(response.stop_reason, StopReason::ToolUse);
        assert_eq!(response.usage, Usage::new(10, 5));
        assert_eq!(response.usage.total_tokens, 15);
    }

    #[tokio::test]
    async fn test_read_trigger_is_case_insensitive() {
        let provider = provider(&["A"]);
        let response = provider.complete(request("READ this please")).await.unwrap();
        assert_eq!(response.tool_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_read_trigger_anywhere_in_text() {
        let provider = provider(&["A"]);
        let response = provider
            .complete(request("update the readme"))
            .await
            .unwrap();
        assert_eq!(response.tool_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_trigger_checks_only_last_message() {
        let provider = provider(&["A"]);
        let request = CompletionRequest::new(
            "mock-model",
            vec![Message::user("read the file"), Message::user("thanks")],
        );
        let response = provider.complete(request).await.unwrap();
        assert!(response.tool_calls().is_empty());
    }

    #[tokio::test]
    async fn test_trigger_in_block_content() {
        let provider = provider(&["A"]);
        let message = Message::user_parts(vec![
            ContentPart::ToolResult {
                tool_use_id: "tool_0".to_string(),
                content: "previous result".to_string(),
                is_error: false,
            },
            ContentPart::Text {
                text: "now read the next one".to_string(),
            },
        ]);
        let request = CompletionRequest::new("mock-model", vec![message]);
        let response = provider.complete(request).await.unwrap();
        assert_eq!(response.tool_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_only_first_text_block_is_checked() {
        let provider = provider(&["A"]);
        let message = Message::user_parts(vec![
            ContentPart::Text {
                text: "nothing interesting".to_string(),
            },
            ContentPart::Text {
                text: "please read the file".to_string(),
            },
        ]);
        let request = CompletionRequest::new("mock-model", vec![message]);
        let response = provider.complete(request).await.unwrap();
        assert!(response.tool_calls().is_empty());
    }

    #[tokio::test]
    async fn test_textless_content_falls_through_to_canned() {
        let provider = provider(&["A"]);
        let message = Message::user_parts(vec![ContentPart::ToolResult {
            tool_use_id: "tool_0".to_string(),
            content: "read result".to_string(),
            is_error: false,
        }]);
        let request = CompletionRequest::new("mock-model", vec![message]);
        let response = provider.complete(request).await.unwrap();
        assert!(response.tool_calls().is_empty());
        assert_eq!(response.message.content.first_text(), Some("A"));
    }

    #[tokio::test]
    async fn test_empty_history() {
        let provider = provider(&["A", "B"]);
        let request = CompletionRequest::new("mock-model", Vec::new());
        let response = provider.complete(request).await.unwrap();
        assert!(response.tool_calls().is_empty());
        assert_eq!(response.message.content.first_text(), Some("B"));
    }

    #[tokio::test]
    async fn test_counter_advances_on_trigger_calls() {
        let provider = provider(&["A", "B"]);

        provider.complete(request("read it")).await.unwrap();
        assert_eq!(provider.call_count(), 1);

        // Call 2 selects index 2 % 2 = 0.
        let response = provider.complete(request("Hello")).await.unwrap();
        assert_eq!(response.message.content.first_text(), Some("A"));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_parse_tool_calls_matches_response() {
        let provider = provider(&["A"]);

        let with_tool = provider.complete(request("read it")).await.unwrap();
        assert_eq!(
            provider.parse_tool_calls(&with_tool),
            with_tool.message.tool_calls
        );

        let without_tool = provider.complete(request("Hello")).await.unwrap();
        assert!(provider.parse_tool_calls(&without_tool).is_empty());
    }

    #[tokio::test]
    async fn test_raw_debug_emits_request_and_response_events() {
        let emitter = Arc::new(RecordingEmitter::new());
        let provider = MockProvider::new(
            vec!["A".to_string()],
            Some(emitter.clone() as Arc<dyn HookEmitter>),
            true,
            true,
        );

        provider.complete(request("read it")).await.unwrap();

        let events = emitter.events();
        assert_eq!(events.len(), 2);

        let (request_event, request_payload) = &events[0];
        assert_eq!(request_event, LLM_REQUEST_RAW);
        assert_eq!(request_payload["lvl"], "DEBUG");
        assert_eq!(request_payload["provider"], "mock");
        assert_eq!(request_payload["message_count"], 1);
        assert_eq!(request_payload["call_count"], 1);

        let (response_event, response_payload) = &events[1];
        assert_eq!(response_event, LLM_RESPONSE_RAW);
        assert_eq!(response_payload["provider"], "mock");
        assert_eq!(response_payload["has_tool_calls"], true);
        assert_eq!(response_payload["tool_count"], 1);
    }

    #[tokio::test]
    async fn test_no_events_without_raw_debug() {
        let emitter = Arc::new(RecordingEmitter::new());
        let provider = MockProvider::new(
            vec!["A".to_string()],
            Some(emitter.clone() as Arc<dyn HookEmitter>),
            true,
            false,
        );

        provider.complete(request("Hello")).await.unwrap();
        assert!(emitter.events().is_empty());
    }

    #[tokio::test]
    async fn test_no_events_without_debug() {
        let emitter = Arc::new(RecordingEmitter::new());
        let provider = MockProvider::new(
            vec!["A".to_string()],
            Some(emitter.clone() as Arc<dyn HookEmitter>),
            false,
            true,
        );

        provider.complete(request("Hello")).await.unwrap();
        assert!(emitter.events().is_empty());
    }

    #[tokio::test]
    async fn test_flags_without_sink_are_harmless() {
        let provider = MockProvider::new(vec!["A".to_string()], None, true, true);
        let response = provider.complete(request("Hello")).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_sink_failure_surfaces() {
        let provider = MockProvider::new(
            vec!["A".to_string()],
            Some(Arc::new(FailingEmitter) as Arc<dyn HookEmitter>),
            true,
            true,
        );

        let result = provider.complete(request("Hello")).await;
        assert!(matches!(result, Err(ProviderError::Hook(_))));
    }
