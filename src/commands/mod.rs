//! Command implementations for honu-saas-cli

pub mod add;
pub mod completions;
pub mod list;
pub mod version;
