//! CLI commands for altpath

pub mod dispatch;
pub mod render;
pub mod solve;
