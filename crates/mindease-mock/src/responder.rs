//! Keyword-trigger chat responder.
//!
//! Scans an ordered rule table and returns the response of the first rule
//! whose keyword occurs in the lower-cased message. There is no scoring and
//! no negation handling: list order is the only precedence.

use std::path::Path;

use mindease_common::error::{MindEaseError, Result};
use mindease_common::{ChatContext, TriggerRule};
use serde::Serialize;

/// Trigger value marking the fallback rule.
pub const DEFAULT_TRIGGER: &str = "default";

/// Used when the rule table carries no `"default"` rule.
pub const FALLBACK_RESPONSE: &str =
    "Thank you for sharing that with me. I'm here to listen and support you.";

/// Sentiment reported when the caller supplies no detected emotion.
pub const NEUTRAL_SENTIMENT: &str = "neutral";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub sentiment: String,
}

#[derive(Debug, Clone)]
pub struct TriggerResponder {
    rules: Vec<TriggerRule>,
}

impl TriggerResponder {
    /// Build a responder from an ordered rule list.
    /// Keywords are lower-cased here so matching ignores case on both sides.
    pub fn new(rules: Vec<TriggerRule>) -> Self {
        let rules = rules
            .into_iter()
            .filter_map(|rule| {
                let trigger = rule.trigger.trim().to_lowercase();
                if trigger.is_empty() {
                    tracing::warn!(response = %rule.response, "Dropping trigger rule with blank keyword");
                    return None;
                }
                Some(TriggerRule { trigger, response: rule.response })
            })
            .collect();
        Self { rules }
    }

    /// The rule table shipped with the demo.
    pub fn builtin() -> Self {
        Self::new(builtin_rules())
    }

    /// Load an ordered JSON array of `{trigger, response}` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let rules: Vec<TriggerRule> = serde_json::from_str(content)?;
        if rules.is_empty() {
            return Err(MindEaseError::InvalidRule("rule table is empty".to_string()));
        }
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Canned response for `message`: first keyword hit, else the default rule,
    /// else [`FALLBACK_RESPONSE`].
    pub fn respond(&self, message: &str) -> &str {
        let lowered = message.to_lowercase();

        self.rules
            .iter()
            .filter(|rule| rule.trigger != DEFAULT_TRIGGER)
            .find(|rule| lowered.contains(rule.trigger.as_str()))
            .or_else(|| self.rules.iter().find(|rule| rule.trigger == DEFAULT_TRIGGER))
            .map(|rule| rule.response.as_str())
            .unwrap_or(FALLBACK_RESPONSE)
    }

    /// Response plus the sentiment echoed from the caller's context.
    pub fn reply(&self, message: &str, context: Option<&ChatContext>) -> ChatReply {
        let sentiment = context
            .and_then(|ctx| ctx.emotion.as_deref())
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(NEUTRAL_SENTIMENT);

        ChatReply {
            response: self.respond(message).to_string(),
            sentiment: sentiment.to_string(),
        }
    }
}

impl Default for TriggerResponder {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_rules() -> Vec<TriggerRule> {
    vec![
        TriggerRule::new(
            "anxious",
            "I hear you. Anxiety can feel overwhelming. Let's try a simple breathing exercise: breathe in for 4 counts, hold for 4, and out for 4. Would you like to talk about what's making you anxious?",
        ),
        TriggerRule::new(
            "stress",
            "It sounds like you're carrying a lot right now. Stress is a natural response, but you don't have to handle it alone. What's weighing on you the most?",
        ),
        TriggerRule::new(
            "sad",
            "I'm sorry you're feeling sad. Your feelings are valid. Would you like to share what's been on your mind?",
        ),
        TriggerRule::new(
            "lonely",
            "Feeling lonely can be really hard. I'm here with you right now. Is there someone you trust that you could reach out to today?",
        ),
        TriggerRule::new(
            "angry",
            "It's okay to feel angry. Taking a short pause or a walk can help the intensity settle. What happened?",
        ),
        TriggerRule::new(
            "overwhelmed",
            "When everything feels like too much, it can help to pick one small thing to focus on. What's one thing we could break down together?",
        ),
        TriggerRule::new(
            "sleep",
            "Sleep has a big effect on how we feel. A consistent bedtime and less screen time before bed can help. How have you been sleeping lately?",
        ),
        TriggerRule::new(
            "tired",
            "Feeling tired can affect everything. Be gentle with yourself, and rest if you can. Has something been draining your energy?",
        ),
        TriggerRule::new(
            "happy",
            "That's wonderful to hear! What's been bringing you joy today?",
        ),
        TriggerRule::new(
            "grateful",
            "Gratitude is a powerful feeling. Thank you for sharing it. What are you grateful for today?",
        ),
        TriggerRule::new(DEFAULT_TRIGGER, FALLBACK_RESPONSE),
    ]
}
