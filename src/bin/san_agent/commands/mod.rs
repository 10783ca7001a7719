// ABOUTME: Re-exports command modules for san-agent
// ABOUTME: Provides access to the chat loop and the one-shot metrics and nutrition commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod chat;
pub mod metrics;
pub mod nutrition;
