//! Command implementations for diffbase CLI

pub mod completions;
pub mod resolve;
pub mod version;
