// ABOUTME: Configuration module grouping environment-based settings
// ABOUTME: Exposes the server configuration loaded at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management

/// Environment-based server configuration
pub mod environment;
