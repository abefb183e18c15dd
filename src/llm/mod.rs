// ABOUTME: Generative-AI plan support: chat message types, plan prompts, and response parsing
// ABOUTME: The AI client itself is external; this module builds its input and validates its output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # AI Plan Support
//!
//! Plans can come from the rule-based generators or from a generative-AI
//! service. For the latter, this module provides:
//!
//! - **Prompts**: system and user messages describing the request and the exact
//!   JSON shape expected back
//! - **Parsing**: tolerant JSON extraction from free-form responses, followed by
//!   normalization into the same plan types the generators produce
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitplan::llm::{parse_workout_plan, prompts::workout_messages};
//! use fitplan::models::{FitnessLevel, Goal, PlanRequest};
//!
//! let request = PlanRequest::new(80.0, Goal::MuscleGain, FitnessLevel::Intermediate, 4);
//! let messages = workout_messages(&request);
//! // send `messages` to the AI service, then:
//! let plan = parse_workout_plan(r#"{"workoutDays": [{"focus": "Upper Body"}]}"#);
//! assert!(plan.is_ok());
//! ```

mod plan_parser;
pub mod prompts;

pub use plan_parser::{extract_json, parse_meal_plan, parse_workout_plan};
pub use prompts::{meal_messages, meal_prompt, workout_messages, workout_prompt};

use serde::{Deserialize, Serialize};

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
}

/// A single message in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}
