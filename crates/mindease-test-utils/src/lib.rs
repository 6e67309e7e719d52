//! Shared testing utilities for the MindEase workspace.

pub mod fixtures;
pub mod http;
