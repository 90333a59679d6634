//! Rule-based intent detection.
//!
//! An ordered list of (intent, pattern, reply) rules. The first rule whose
//! pattern matches the lowercased message wins; otherwise the classifier
//! answers with its default reply. Used both to preempt generation for
//! fixed questions and as the fallback when generation is unavailable.

pub mod classifier;
pub mod rules;

pub use classifier::{Classification, Intent, IntentClassifier, IntentRule};
