//! Static values shown when the model is unavailable or fails.
//!
//! Gateway operations never substitute these on their own; callers opt in
//! with `unwrap_or_else`.

use crate::gateway::types::{AudienceOverlap, LeadScore};

pub const ANALYSIS_UNAVAILABLE: &str = "AI Service Unavailable";
pub const AUDIT_UNAVAILABLE: &str = "Service unavailable";
pub const ASSISTANT_DISCONNECTED: &str = "SarAI is not connected. Please refresh.";
pub const ASSISTANT_ERROR: &str = "I encountered an error processing your request.";
pub const ASSISTANT_EMPTY: &str = "I didn't quite catch that.";

pub fn image_ideas() -> Vec<String> {
    to_strings(&[
        "High-quality product shot on a clean background.",
        "Lifestyle image of someone using the product happily.",
        "Minimalistic flat lay with vibrant colors.",
    ])
}

pub fn smart_replies() -> Vec<String> {
    to_strings(&[
        "Thank you for your message, we will get back to you shortly.",
        "Could you please provide more details?",
        "Yes, that is available.",
    ])
}

pub fn image_tags() -> Vec<String> {
    to_strings(&["Asset", "Marketing"])
}

pub fn audience_overlap() -> AudienceOverlap {
    AudienceOverlap {
        percentage: 35.0,
        insight: "These audiences likely share key interests in Technology and Startups, but diverge on spending power.".to_string(),
    }
}

pub fn lead_score() -> LeadScore {
    LeadScore {
        score: 50.0,
        reason: "Moderate potential based on available data.".to_string(),
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
