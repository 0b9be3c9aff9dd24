//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the console layer decoupled from storage details.

pub mod coin_service;
