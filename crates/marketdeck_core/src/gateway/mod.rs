//! AI gateway boundary.
//!
//! # Responsibility
//! - Build prompts and response schemas for each marketing helper.
//! - Send one request per call through a host-supplied [`GenerativeModel`].
//! - Decode replies into typed values, reporting failure as [`GatewayError`].
//! - Hold the single assistant chat session.
//!
//! # Invariants
//! - No retries, backoff, streaming or request dedup.
//! - Fallback values are never substituted here; see [`fallback`].
//! - Without a configured model every call returns `GatewayError::Unavailable`.

pub mod chat;
pub mod fallback;
pub mod parse;
pub mod prompt;
pub mod types;

use crate::config::GatewayConfig;
use crate::model::lead::Lead;
use crate::model::profile::BrandProfile;
use crate::model::saved_ad::GeneratedContent;
use crate::model::AdFormat;
use async_trait::async_trait;
use chat::{ChatMessage, ChatRole, ChatSession};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use types::{
    AdCreativeRequest, AspectRatio, AudienceOverlap, AudienceSegment, CompetitorInsight,
    LeadScore, PerformanceReport, RuleDraft,
};

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No model configured, or no chat session open.
    Unavailable,
    /// The model call itself failed.
    Transport(String),
    /// The model replied with nothing usable.
    EmptyResponse,
    /// The reply was not valid JSON for the expected shape.
    MalformedJson { message: String },
    /// The reply decoded but violates a value constraint.
    Schema(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "ai service unavailable"),
            Self::Transport(message) => write!(f, "model request failed: {message}"),
            Self::EmptyResponse => write!(f, "model returned an empty response"),
            Self::MalformedJson { message } => {
                write!(f, "model returned malformed json: {message}")
            }
            Self::Schema(message) => write!(f, "model response violates schema: {message}"),
        }
    }
}

impl Error for GatewayError {}

/// Shape the model is asked to produce.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFormat {
    Text,
    /// JSON constrained by a JSON-schema document.
    Json { schema: Value },
    /// An image returned as a data URL.
    Image { aspect_ratio: AspectRatio },
}

/// One round trip to the hosted model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub system_instruction: Option<String>,
    pub prompt: String,
    pub format: ResponseFormat,
    /// Prior chat turns, oldest first; empty for one-shot calls.
    pub history: Vec<ChatMessage>,
}

impl ModelRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: None,
            prompt: prompt.into(),
            format: ResponseFormat::Text,
            history: Vec::new(),
        }
    }

    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            system_instruction: None,
            prompt: prompt.into(),
            format: ResponseFormat::Json { schema },
            history: Vec::new(),
        }
    }

    pub fn with_system(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }
}

/// Transport to a hosted generative model, supplied by the host application.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Returns the raw reply text (or data URL for image requests).
    async fn generate(&self, model: &str, request: &ModelRequest) -> GatewayResult<String>;
}

pub struct AiGateway {
    model: Option<Arc<dyn GenerativeModel>>,
    model_name: String,
    chat: Option<ChatSession>,
}

impl AiGateway {
    pub fn new(model_name: impl Into<String>, model: Option<Arc<dyn GenerativeModel>>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
            chat: None,
        }
    }

    /// Drops `model` when no API key is configured.
    pub fn from_config(config: &GatewayConfig, model: Option<Arc<dyn GenerativeModel>>) -> Self {
        let model = if config.is_configured() { model } else { None };
        if model.is_none() {
            warn!("event=gateway_init module=gateway status=noop reason=not_configured");
        }
        Self::new(config.model.clone(), model)
    }

    /// Gateway with no model; every call reports `Unavailable`.
    pub fn offline() -> Self {
        Self::new(crate::config::DEFAULT_MODEL, None)
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn call(&self, op: &'static str, request: &ModelRequest) -> GatewayResult<String> {
        let Some(model) = &self.model else {
            debug!("event=gateway_call module=gateway status=noop op={op} reason=unavailable");
            return Err(GatewayError::Unavailable);
        };
        match model.generate(&self.model_name, request).await {
            Ok(text) => {
                debug!(
                    "event=gateway_call module=gateway status=ok op={op} chars={}",
                    text.len()
                );
                Ok(text)
            }
            Err(err) => {
                warn!("event=gateway_call module=gateway status=error op={op} reason={err}");
                Err(err)
            }
        }
    }

    async fn call_json<T: DeserializeOwned>(
        &self,
        op: &'static str,
        request: &ModelRequest,
    ) -> GatewayResult<T> {
        let text = self.call(op, request).await?;
        parse::parse_json(&text).inspect_err(|err| {
            warn!("event=gateway_decode module=gateway status=error op={op} reason={err}");
        })
    }

    async fn call_text(&self, op: &'static str, request: &ModelRequest) -> GatewayResult<String> {
        parse::non_empty_text(self.call(op, request).await?)
    }

    pub async fn generate_ad_creative(
        &self,
        request: &AdCreativeRequest,
    ) -> GatewayResult<GeneratedContent> {
        let content: GeneratedContent = self
            .call_json("ad_creative", &prompt::ad_creative(request))
            .await?;
        if content.headline.trim().is_empty() || content.body.trim().is_empty() {
            return Err(GatewayError::Schema(
                "headline and body are required".to_string(),
            ));
        }
        Ok(content)
    }

    /// Returns the image as a `data:` URL.
    pub async fn generate_ad_image(
        &self,
        image_prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> GatewayResult<String> {
        let url = self
            .call_text("ad_image", &prompt::ad_image(image_prompt, aspect_ratio))
            .await?;
        if !url.starts_with("data:") {
            return Err(GatewayError::Schema("image reply is not a data url".to_string()));
        }
        Ok(url)
    }

    pub async fn generate_image_ideas(
        &self,
        product_name: &str,
        target_audience: &str,
        platform: &str,
        format: Option<AdFormat>,
    ) -> GatewayResult<Vec<String>> {
        let request = prompt::image_ideas(
            product_name,
            target_audience,
            platform,
            format.unwrap_or_default(),
        );
        self.call_json("image_ideas", &request).await
    }

    pub async fn analyze_ad_performance(&self, campaign_data: &str) -> GatewayResult<String> {
        self.call_text("ad_performance", &prompt::ad_performance(campaign_data))
            .await
    }

    pub async fn generate_performance_report(
        &self,
        metrics: &Value,
    ) -> GatewayResult<PerformanceReport> {
        self.call_json("performance_report", &prompt::performance_report(metrics))
            .await
    }

    pub async fn generate_audience_segment(
        &self,
        description: &str,
    ) -> GatewayResult<AudienceSegment> {
        self.call_json("audience_segment", &prompt::audience_segment(description))
            .await
    }

    pub async fn analyze_competitors(
        &self,
        industry: &str,
    ) -> GatewayResult<Vec<CompetitorInsight>> {
        let insights: Vec<CompetitorInsight> = self
            .call_json("competitors", &prompt::competitors(industry))
            .await?;
        if let Some(bad) = insights
            .iter()
            .find(|insight| !(0.0..=100.0).contains(&insight.market_share))
        {
            return Err(GatewayError::Schema(format!(
                "market share {} for `{}` is outside 0..=100",
                bad.market_share, bad.name
            )));
        }
        Ok(insights)
    }

    pub async fn schedule_recommendation(&self, campaign_goal: &str) -> GatewayResult<String> {
        self.call_text("schedule", &prompt::schedule_recommendation(campaign_goal))
            .await
    }

    /// Writes a short brand manifesto for `profile`.
    pub async fn audit_brand_profile(&self, profile: &BrandProfile) -> GatewayResult<String> {
        self.call_text("brand_audit", &prompt::brand_audit(profile))
            .await
    }

    pub async fn generate_smart_replies(
        &self,
        message_context: &str,
        tone: &str,
    ) -> GatewayResult<Vec<String>> {
        self.call_json("smart_replies", &prompt::smart_replies(message_context, tone))
            .await
    }

    pub async fn generate_image_tags(&self, image_name: &str) -> GatewayResult<Vec<String>> {
        self.call_json("image_tags", &prompt::image_tags(image_name))
            .await
    }

    pub async fn analyze_audience_overlap(
        &self,
        audience_a: &str,
        audience_b: &str,
    ) -> GatewayResult<AudienceOverlap> {
        let overlap: AudienceOverlap = self
            .call_json(
                "audience_overlap",
                &prompt::audience_overlap(audience_a, audience_b),
            )
            .await?;
        if !(0.0..=100.0).contains(&overlap.percentage) {
            return Err(GatewayError::Schema(format!(
                "overlap {} is outside 0..=100",
                overlap.percentage
            )));
        }
        Ok(overlap)
    }

    pub async fn generate_automation_rule(&self, goal: &str) -> GatewayResult<RuleDraft> {
        self.call_json("automation_rule", &prompt::automation_rule(goal))
            .await
    }

    pub async fn score_lead(&self, lead: &Lead) -> GatewayResult<LeadScore> {
        let lead_json = serde_json::to_string(lead).map_err(|err| {
            GatewayError::Transport(format!("failed to encode lead: {err}"))
        })?;
        self.call_json("lead_score", &prompt::lead_score(&lead_json))
            .await
    }

    /// Replaces the current assistant session with one primed on `context`.
    pub fn create_chat_session(&mut self, context: &str) -> GatewayResult<&ChatSession> {
        if self.model.is_none() {
            self.chat = None;
            return Err(GatewayError::Unavailable);
        }
        let session = ChatSession::new(prompt::assistant_instruction(context));
        debug!(
            "event=chat_session module=gateway status=ok session={} replaced={}",
            session.id,
            self.chat.is_some()
        );
        Ok(self.chat.insert(session))
    }

    pub fn chat_session(&self) -> Option<&ChatSession> {
        self.chat.as_ref()
    }

    /// Sends `message` in the current session and records both turns.
    ///
    /// The transcript is left untouched when the call fails.
    pub async fn send_chat_message(&mut self, message: &str) -> GatewayResult<String> {
        let Some(session) = &self.chat else {
            return Err(GatewayError::Unavailable);
        };
        let request = ModelRequest {
            system_instruction: Some(session.system_instruction.clone()),
            prompt: message.to_string(),
            format: ResponseFormat::Text,
            history: session.transcript.clone(),
        };
        let reply = self.call_text("chat", &request).await?;
        if let Some(session) = self.chat.as_mut() {
            session
                .transcript
                .push(ChatMessage::new(ChatRole::User, message));
            session
                .transcript
                .push(ChatMessage::new(ChatRole::Assistant, reply.clone()));
        }
        Ok(reply)
    }
}
