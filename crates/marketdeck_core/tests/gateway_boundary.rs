use async_trait::async_trait;
use marketdeck_core::config::GatewayConfig;
use marketdeck_core::gateway::chat::ChatRole;
use marketdeck_core::gateway::types::{AdCreativeRequest, AspectRatio};
use marketdeck_core::gateway::{fallback, ResponseFormat};
use marketdeck_core::model::rule::{RuleAction, RuleStatus, TriggerMetric};
use marketdeck_core::model::Platform;
use marketdeck_core::{
    AiGateway, GatewayError, GatewayResult, GenerativeModel, ModelRequest, SeedData,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays canned replies in order and records every request.
#[derive(Default)]
struct ScriptedModel {
    replies: Mutex<VecDeque<GatewayResult<String>>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedModel {
    fn with_replies<I>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = GatewayResult<String>>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::default(),
        })
    }

    fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, _model: &str, request: &ModelRequest) -> GatewayResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GatewayError::Transport("no scripted reply".to_string())))
    }
}

fn gateway_with(model: Arc<ScriptedModel>) -> AiGateway {
    AiGateway::new("test-model", Some(model))
}

#[tokio::test]
async fn offline_gateway_reports_unavailable() {
    let mut gateway = AiGateway::offline();
    assert!(!gateway.is_available());

    let err = gateway.generate_image_tags("beach.png").await.unwrap_err();
    assert_eq!(err, GatewayError::Unavailable);
    assert_eq!(
        gateway.analyze_ad_performance("{}").await,
        Err(GatewayError::Unavailable)
    );
    assert_eq!(
        gateway.create_chat_session("ctx").unwrap_err(),
        GatewayError::Unavailable
    );
    assert_eq!(
        gateway.send_chat_message("hi").await,
        Err(GatewayError::Unavailable)
    );

    let tags = gateway
        .generate_image_tags("beach.png")
        .await
        .unwrap_or_else(|_| fallback::image_tags());
    assert_eq!(tags, vec!["Asset", "Marketing"]);
}

#[tokio::test]
async fn missing_api_key_drops_the_model() {
    let model = ScriptedModel::with_replies([Ok("[\"a\"]".to_string())]);
    let config = GatewayConfig::default();

    let gateway = AiGateway::from_config(&config, Some(model.clone()));

    assert!(!gateway.is_available());
    assert_eq!(
        gateway.generate_image_tags("x.png").await,
        Err(GatewayError::Unavailable)
    );
    assert!(model.requests().is_empty());
}

#[tokio::test]
async fn fenced_json_is_decoded() {
    let reply = "```json\n{\"headline\":\"Run Further\",\"body\":\"Light shoes.\",\"callToAction\":\"Shop Now\"}\n```";
    let model = ScriptedModel::with_replies([Ok(reply.to_string())]);
    let gateway = gateway_with(model.clone());

    let request = AdCreativeRequest::new("Trail Shoes", "Runners 25-40", Platform::Instagram);
    let content = gateway.generate_ad_creative(&request).await.unwrap();

    assert_eq!(content.headline, "Run Further");
    assert_eq!(content.call_to_action, "Shop Now");
    let sent = model.requests();
    assert_eq!(sent.len(), 1);
    assert!(matches!(sent[0].format, ResponseFormat::Json { .. }));
    assert!(sent[0].prompt.contains("Trail Shoes"));
}

#[tokio::test]
async fn malformed_json_is_an_error_not_a_fallback() {
    let model = ScriptedModel::with_replies([Ok("Sure! Here are some tags.".to_string())]);
    let gateway = gateway_with(model);

    let err = gateway.generate_image_tags("beach.png").await.unwrap_err();

    assert!(matches!(err, GatewayError::MalformedJson { .. }));
}

#[tokio::test]
async fn blank_reply_is_empty_response() {
    let model = ScriptedModel::with_replies([Ok("   ".to_string())]);
    let gateway = gateway_with(model);

    assert_eq!(
        gateway.schedule_recommendation("Conversions").await,
        Err(GatewayError::EmptyResponse)
    );
}

#[tokio::test]
async fn out_of_range_percentages_are_schema_errors() {
    let model = ScriptedModel::with_replies([
        Ok(r#"{"percentage": 140, "insight": "Too much"}"#.to_string()),
        Ok(r#"[{"name":"Acme","marketShare":-3,"strength":"s","weakness":"w","adStrategy":"a"}]"#
            .to_string()),
    ]);
    let gateway = gateway_with(model);

    assert!(matches!(
        gateway.analyze_audience_overlap("A", "B").await,
        Err(GatewayError::Schema(_))
    ));
    assert!(matches!(
        gateway.analyze_competitors("Fitness").await,
        Err(GatewayError::Schema(_))
    ));
}

#[tokio::test]
async fn transport_errors_pass_through() {
    let model = ScriptedModel::with_replies([Err(GatewayError::Transport("timeout".to_string()))]);
    let gateway = gateway_with(model);

    assert_eq!(
        gateway.audit_brand_profile(&SeedData::empty().brand_profile).await,
        Err(GatewayError::Transport("timeout".to_string()))
    );
}

#[tokio::test]
async fn image_reply_must_be_a_data_url() {
    let model = ScriptedModel::with_replies([
        Ok("data:image/png;base64,AAAA".to_string()),
        Ok("https://example.com/x.png".to_string()),
    ]);
    let gateway = gateway_with(model.clone());

    let url = gateway
        .generate_ad_image("a red shoe", AspectRatio::Portrait)
        .await
        .unwrap();
    assert!(url.starts_with("data:image/png"));
    assert!(matches!(
        model.requests()[0].format,
        ResponseFormat::Image {
            aspect_ratio: AspectRatio::Portrait
        }
    ));

    assert!(matches!(
        gateway.generate_ad_image("a red shoe", AspectRatio::Square).await,
        Err(GatewayError::Schema(_))
    ));
}

#[tokio::test]
async fn automation_rule_draft_becomes_an_active_rule() {
    let reply = r#"{"name":"Stop bleeding","triggerMetric":"ROAS","triggerOperator":"<","triggerValue":1.5,"timeframe":"Last 3 days","action":"Pause Campaign"}"#;
    let model = ScriptedModel::with_replies([Ok(reply.to_string())]);
    let gateway = gateway_with(model);

    let rule = gateway
        .generate_automation_rule("pause campaigns with poor ROAS")
        .await
        .unwrap()
        .into_rule("r_new");

    assert_eq!(rule.id, "r_new");
    assert_eq!(rule.status, RuleStatus::Active);
    assert_eq!(rule.trigger_metric, TriggerMetric::Roas);
    assert_eq!(rule.action, RuleAction::PauseCampaign);
    assert_eq!(rule.action_value, None);
    assert_eq!(rule.last_run, None);
}

#[tokio::test]
async fn lead_score_request_carries_the_lead() {
    let reply = r#"{"score": 81, "reason": "Corporate email"}"#;
    let model = ScriptedModel::with_replies([Ok(reply.to_string())]);
    let gateway = gateway_with(model.clone());
    let lead = SeedData::current().leads.remove(0);

    let score = gateway.score_lead(&lead).await.unwrap();

    assert_eq!(score.score, 81.0);
    assert!(model.requests()[0].prompt.contains(&lead.email));
}

#[tokio::test]
async fn chat_keeps_history_and_new_session_replaces_it() {
    let model = ScriptedModel::with_replies([
        Ok("ROAS is 3.2".to_string()),
        Err(GatewayError::Transport("reset".to_string())),
        Ok("Hello again".to_string()),
    ]);
    let mut gateway = gateway_with(model.clone());

    let first_id = gateway.create_chat_session("campaigns: c1").unwrap().id;
    assert_eq!(gateway.send_chat_message("What is ROAS?").await.unwrap(), "ROAS is 3.2");

    let transcript = &gateway.chat_session().unwrap().transcript;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].role, ChatRole::User);
    assert_eq!(transcript[1].role, ChatRole::Assistant);

    assert!(gateway.send_chat_message("And CTR?").await.is_err());
    assert_eq!(gateway.chat_session().unwrap().transcript.len(), 2);

    let second_id = gateway.create_chat_session("leads: ld1").unwrap().id;
    assert_ne!(first_id, second_id);
    assert!(gateway.chat_session().unwrap().transcript.is_empty());

    gateway.send_chat_message("Hi").await.unwrap();
    let requests = model.requests();
    let last = requests.last().unwrap();
    assert!(last.history.is_empty());
    assert!(last
        .system_instruction
        .as_deref()
        .unwrap()
        .contains("leads: ld1"));
    assert_eq!(requests[1].history.len(), 2);
}
