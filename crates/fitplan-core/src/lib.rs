// ABOUTME: Core types and constants for the fitplan planning engine
// ABOUTME: Foundation crate with error handling, plan models, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for the fitplan
//! engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Category tags, focus labels, and weekday names
//! - **models**: Plan requests and generated workout, meal, and progress data

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (goals, fitness levels, generated plans, progress records)
pub mod models;
