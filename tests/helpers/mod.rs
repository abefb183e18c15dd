// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports small deterministic catalogs, seeded random sources, and record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod fixtures;
