//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the assembled skill
//! and everything needed to verify incoming envelopes.

use crate::{config::Config, verify::RequestVerifier};
use std::sync::Arc;
use study_buddy_core::Skill;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub skill: Arc<Skill>,
    pub verifier: RequestVerifier,
}

impl AppState {
    pub fn new(skill: Skill, config: &Config) -> Self {
        Self {
            skill: Arc::new(skill),
            verifier: RequestVerifier::from_config(config),
        }
    }
}
