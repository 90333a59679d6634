//! Infrastructure layer for YAAYA.
//!
//! Contains the implementations of the capability traits defined in
//! `yaaya-core`: the HTTP text-generation client and its factory, plus the
//! loader for the optional TOML tuning file.

pub mod config;
pub mod llm;
