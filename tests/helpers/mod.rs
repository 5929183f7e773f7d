// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the seeded synthetic meal generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod synthetic_meals;
