//! I/O helpers for patcher commands.

pub mod manifest;
pub mod target;
