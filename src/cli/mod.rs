//! CLI command implementations

pub mod board;
pub mod profile;
pub mod session;
