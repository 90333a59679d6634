//! Built-in YAAYA rule table, highest priority first.

use super::classifier::Intent;

pub const CREATOR_REPLY: &str = "I was created by YAAYA, sponsored by UNI ABUJA.";

pub const DEFAULT_REPLY: &str =
    "I’m running in lightweight mode right now — but I can still chat with you smoothly 🙂.";

/// (intent, pattern over the lowercased message, reply).
pub const STANDARD_RULES: &[(Intent, &str, &str)] = &[
    (
        Intent::Creator,
        r"who (made|built|created|developed) you|who is your maker|your creator",
        CREATOR_REPLY,
    ),
    (
        Intent::Name,
        r"your name",
        "My name is YAAYA AI — your digital assistant, sponsored by UNI ABUJA.",
    ),
    (
        Intent::Greeting,
        // Whole words only: "this" and "they" are not greetings.
        r"\b(hi|hello|hey)\b",
        "Hello there! I’m YAAYA AI — how may I assist you today?",
    ),
    (
        Intent::Status,
        r"how are you",
        "I’m doing great and fully operational! Thanks for asking 🙂",
    ),
    (Intent::Gratitude, r"thank", "You’re always welcome 💫"),
];
