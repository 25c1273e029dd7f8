//! Literal, fail-fast text patching for project source files.
//!
//! A manifest lists named patches. Each patch reads one target file, checks
//! that every literal it needs is present, and only then rewrites the file:
//!
//! - **insert_after**: insert text right after the first occurrence of an
//!   anchor.
//! - **replace**: apply ordered `old -> new` substitutions, all-or-nothing.
//!
//! The crate keeps a strict split:
//!
//! - **[`core`]**: Pure text transforms and the [`core::error::PatchError`]
//!   precondition type. No I/O.
//! - **[`io`]**: Manifest loading and whole-file target reads/writes.
//!
//! Orchestration modules ([`apply`], [`check`], [`select`]) combine the two to
//! implement CLI commands.

pub mod apply;
pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod select;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
