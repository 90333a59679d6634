//! Intent classifier over an ordered rule table.

use std::fmt;

use regex::Regex;

use super::rules;

/// Intents the rule table can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Questions about who built the assistant. Always answered by rule.
    Creator,
    Name,
    Greeting,
    Status,
    Gratitude,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Creator => write!(f, "creator"),
            Intent::Name => write!(f, "name"),
            Intent::Greeting => write!(f, "greeting"),
            Intent::Status => write!(f, "status"),
            Intent::Gratitude => write!(f, "gratitude"),
        }
    }
}

/// One (intent, predicate, reply) entry.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub intent: Intent,
    pattern: Regex,
    reply: String,
}

impl IntentRule {
    /// Compile a rule. The pattern is matched against the lowercased message.
    pub fn new(
        intent: Intent,
        pattern: &str,
        reply: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            intent,
            pattern: Regex::new(pattern)?,
            reply: reply.into(),
        })
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }

    fn is_match(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}

/// Outcome of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// `None` when no rule matched and the default reply was used.
    pub intent: Option<Intent>,
    pub reply: &'a str,
}

/// First-match-wins classifier.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    default_reply: String,
}

impl IntentClassifier {
    pub fn new(rules: Vec<IntentRule>, default_reply: impl Into<String>) -> Self {
        Self {
            rules,
            default_reply: default_reply.into(),
        }
    }

    /// The built-in YAAYA rule table.
    pub fn standard() -> Self {
        let rules = rules::STANDARD_RULES
            .iter()
            .map(|(intent, pattern, reply)| {
                IntentRule::new(*intent, pattern, *reply)
                    .expect("built-in intent pattern must compile")
            })
            .collect();
        Self::new(rules, rules::DEFAULT_REPLY)
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn default_reply(&self) -> &str {
        &self.default_reply
    }

    /// Run the rules in priority order against `message`.
    pub fn classify(&self, message: &str) -> Classification<'_> {
        let lowered = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.is_match(&lowered))
            .map(|rule| Classification {
                intent: Some(rule.intent),
                reply: rule.reply(),
            })
            .unwrap_or(Classification {
                intent: None,
                reply: &self.default_reply,
            })
    }

    /// Whether the rule for `intent` matches, regardless of priority.
    pub fn matches(&self, intent: Intent, message: &str) -> bool {
        let lowered = message.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.intent == intent)
            .any(|rule| rule.is_match(&lowered))
    }

    /// Shorthand for `classify(message).reply`.
    pub fn reply_for(&self, message: &str) -> &str {
        self.classify(message).reply
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::standard()
    }
}
