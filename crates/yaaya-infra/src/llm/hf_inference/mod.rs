//! Hugging Face inference text-generation backend.
//!
//! This module provides the [`HfInferenceGenerator`] which implements the
//! [`TextGenerator`](yaaya_core::llm::TextGenerator) trait for the
//! text-generation task of the Hugging Face inference protocol (hosted API
//! or any self-hosted server speaking the same JSON shape).

pub mod client;
pub mod types;

pub use client::HfInferenceGenerator;
