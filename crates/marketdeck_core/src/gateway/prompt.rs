//! Prompt and response-schema construction for each gateway operation.

use crate::gateway::types::{AdCreativeRequest, AspectRatio};
use crate::gateway::{ModelRequest, ResponseFormat};
use crate::model::profile::BrandProfile;
use crate::model::AdFormat;
use serde_json::{json, Value};

const COPYWRITER_ROLE: &str = "You are a world-class copywriter for social media ads.";

fn string_array_schema() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

pub fn ad_creative(request: &AdCreativeRequest) -> ModelRequest {
    let mut system = COPYWRITER_ROLE.to_string();
    if let Some(brand) = &request.brand {
        system.push_str(&format!(
            "\nAdhere strictly to the following Brand Identity:\nBrand Name: {}\nVoice/Tone: {}\nKeywords to use: {}",
            brand.name,
            brand.voice,
            brand.keywords.join(", ")
        ));
    }

    let mut lines = vec![
        "Create an ad for the following:".to_string(),
        format!("Product: {}", request.product_name),
        format!("Target Audience: {}", request.target_audience),
        format!("Platform: {}", request.platform),
        format!("Format: {}", request.format),
    ];
    if let Some(signal) = &request.trust_signal {
        lines.push(format!("Key Trust Signal to highlight: {signal}"));
    }
    if let Some(brand) = &request.brand {
        lines.push(format!(
            "Note: Ensure the copy aligns with the brand voice: {}",
            brand.voice
        ));
    }
    if request.format.is_vertical() {
        lines.push(
            "IMPORTANT: For Story/Reel, the headline should be short punchy overlay text (max 5 words) and the body should be a concise caption."
                .to_string(),
        );
    }
    let color_hint = request
        .brand
        .as_ref()
        .map(|brand| format!(", using brand color {}", brand.primary_color))
        .unwrap_or_default();
    lines.push(format!(
        "Return a JSON object with:\n\
         - headline (short, punchy, max 40 chars)\n\
         - body (engaging main text, max 280 chars)\n\
         - callToAction (e.g., Shop Now, Learn More)\n\
         - socialProof (a very short trust signal, max 4-5 words, e.g. \"Join 10k+ Users\")\n\
         - imagePrompt (a detailed visual description of an image that would go well with this ad text{color_hint})"
    ));

    ModelRequest::json(
        lines.join("\n"),
        json!({
            "type": "object",
            "properties": {
                "headline": { "type": "string" },
                "body": { "type": "string" },
                "callToAction": { "type": "string" },
                "socialProof": { "type": "string" },
                "imagePrompt": { "type": "string" }
            },
            "required": ["headline", "body", "callToAction", "socialProof", "imagePrompt"]
        }),
    )
    .with_system(system)
}

pub fn ad_image(prompt: &str, aspect_ratio: AspectRatio) -> ModelRequest {
    ModelRequest {
        system_instruction: None,
        prompt: prompt.to_string(),
        format: ResponseFormat::Image { aspect_ratio },
        history: Vec::new(),
    }
}

pub fn image_ideas(
    product_name: &str,
    target_audience: &str,
    platform: &str,
    format: AdFormat,
) -> ModelRequest {
    ModelRequest::json(
        format!(
            "Suggest 3 distinct, creative visual concepts for a {format} ad on {platform}.\n\
             Product: {product_name}\n\
             Audience: {target_audience}\n\
             Return a JSON array of 3 strings. Each string should be a concise visual description \
             (e.g. \"Split screen showing before/after results\")."
        ),
        string_array_schema(),
    )
}

pub fn ad_performance(campaign_data: &str) -> ModelRequest {
    ModelRequest::text(format!(
        "Analyze this ad performance data and give 3 bullet points of strategic advice: {campaign_data}"
    ))
}

pub fn performance_report(metrics: &Value) -> ModelRequest {
    ModelRequest::json(
        format!(
            "Act as a Senior Marketing Data Analyst. Analyze the following campaign metrics and \
             generate a concise executive summary report.\n\
             Data: {metrics}\n\
             Return valid JSON with:\n\
             - summary: A 2-3 sentence overview of general health and performance.\n\
             - wins: An array of 3 strings highlighting top performing areas.\n\
             - improvements: An array of 3 strings highlighting risk areas or things to fix."
        ),
        json!({
            "type": "object",
            "properties": {
                "summary": { "type": "string" },
                "wins": string_array_schema(),
                "improvements": string_array_schema()
            },
            "required": ["summary", "wins", "improvements"]
        }),
    )
}

pub fn audience_segment(description: &str) -> ModelRequest {
    ModelRequest::json(
        format!(
            "Based on this description of an ideal customer: \"{description}\"\n\
             Generate a professional audience segment name and a list of 5 key targeting interests for Meta Ads."
        ),
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "A catchy marketing name for this audience" },
                "interests": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "5 specific interests available in Meta Ads Manager"
                }
            },
            "required": ["name", "interests"]
        }),
    )
}

pub fn competitors(industry: &str) -> ModelRequest {
    ModelRequest::json(
        format!(
            "Analyze the top 3 theoretical competitors in the \"{industry}\" market.\n\
             For each competitor, provide:\n\
             - Name\n\
             - Estimated Market Share (0-100 number)\n\
             - Key Strength\n\
             - Key Weakness\n\
             - Ad Strategy (a sentence describing their likely ad approach)\n\
             Return as a JSON array."
        ),
        json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "marketShare": { "type": "number" },
                    "strength": { "type": "string" },
                    "weakness": { "type": "string" },
                    "adStrategy": { "type": "string" }
                },
                "required": ["name", "marketShare", "strength", "weakness", "adStrategy"]
            }
        }),
    )
}

pub fn schedule_recommendation(goal: &str) -> ModelRequest {
    ModelRequest::text(format!(
        "For a Facebook/Instagram ad campaign with the goal of \"{goal}\", suggest the 3 best days \
         of the week and times of day to post/run ads for maximum conversion. Keep it concise."
    ))
}

pub fn brand_audit(profile: &BrandProfile) -> ModelRequest {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    ModelRequest::text(format!(
        "Act as a Brand Strategist. Review this brand profile and write a short, inspiring \
         \"Brand Manifesto\" (max 100 words).\nProfile: {profile_json}"
    ))
}

pub fn smart_replies(message_context: &str, tone: &str) -> ModelRequest {
    ModelRequest::json(
        format!(
            "You are a customer support agent. Generate 3 short, distinct, and helpful quick \
             replies to the following user message.\n\
             Context/Last Message: \"{message_context}\"\n\
             Tone: {tone}\n\
             Return a JSON array of 3 strings."
        ),
        string_array_schema(),
    )
}

pub fn image_tags(image_name: &str) -> ModelRequest {
    ModelRequest::json(
        format!(
            "Generate 4 single-word SEO tags for an image file named \"{image_name}\". \
             Return a JSON array of strings."
        ),
        string_array_schema(),
    )
}

pub fn audience_overlap(audience_a: &str, audience_b: &str) -> ModelRequest {
    ModelRequest::json(
        format!(
            "Analyze the potential demographic and interest overlap between these two audience segments:\n\
             Audience A: \"{audience_a}\"\n\
             Audience B: \"{audience_b}\"\n\
             Return JSON with:\n\
             - percentage: A number between 0 and 100 representing estimated overlap.\n\
             - insight: A single sentence explaining the commonality."
        ),
        json!({
            "type": "object",
            "properties": {
                "percentage": { "type": "number" },
                "insight": { "type": "string" }
            },
            "required": ["percentage", "insight"]
        }),
    )
}

pub fn automation_rule(goal: &str) -> ModelRequest {
    ModelRequest::json(
        format!(
            "Create a logical advertising automation rule based on this user goal: \"{goal}\".\n\
             Determine the Metric, Operator, Value, Timeframe and Action.\n\
             Return JSON:\n\
             - name: Short descriptive name\n\
             - triggerMetric: \"ROAS\", \"Spend\", \"CTR\", or \"CPM\"\n\
             - triggerOperator: \">\", \"<\", or \">=\"\n\
             - triggerValue: number\n\
             - timeframe: string (e.g. \"Last 7 Days\")\n\
             - action: \"Pause Campaign\", \"Increase Budget\", \"Decrease Budget\", or \"Notify\"\n\
             - actionValue: number (optional, e.g. 10 for 10% increase)"
        ),
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "triggerMetric": { "type": "string", "enum": ["ROAS", "Spend", "CTR", "CPM"] },
                "triggerOperator": { "type": "string", "enum": [">", "<", ">="] },
                "triggerValue": { "type": "number" },
                "timeframe": { "type": "string" },
                "action": {
                    "type": "string",
                    "enum": ["Pause Campaign", "Increase Budget", "Decrease Budget", "Notify"]
                },
                "actionValue": { "type": "number" }
            },
            "required": ["name", "triggerMetric", "triggerOperator", "triggerValue", "timeframe", "action"]
        }),
    )
}

pub fn lead_score(lead_json: &str) -> ModelRequest {
    ModelRequest::json(
        format!(
            "Analyze this lead and assign a Quality Score (0-100) and a short reason.\n\
             Lead Data: {lead_json}\n\
             Return JSON with:\n\
             - score: number (0-100)\n\
             - reason: string"
        ),
        json!({
            "type": "object",
            "properties": {
                "score": { "type": "number" },
                "reason": { "type": "string" }
            },
            "required": ["score", "reason"]
        }),
    )
}

pub fn assistant_instruction(context: &str) -> String {
    format!(
        "You are SarAI, a highly intelligent and professional AI assistant for Sar Industries \
         Enterprise Command Center.\n\
         You have access to the user's dashboard data provided in the context.\n\n\
         Your capabilities:\n\
         1. Answer questions about campaign performance, budgets, and audiences.\n\
         2. Suggest optimization strategies for Facebook and Instagram ads.\n\
         3. Help the user navigate the dashboard features.\n\n\
         Tone: Professional, concise, data-driven, yet helpful and friendly.\n\n\
         Current Context Data:\n{context}"
    )
}
