//! Shared domain types for the YAAYA chat backend.
//!
//! This crate contains the types used across the workspace: conversation
//! turns and session identifiers, text-generation requests and responses,
//! tuning configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
