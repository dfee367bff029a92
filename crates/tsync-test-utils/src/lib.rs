//! Shared test utilities for the template-sync workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] temp project builder
//! - [`text`]: numbered-line text generators for diff and threshold tests

pub mod project;
pub mod text;

pub use project::TestProject;
pub use text::{numbered_lines, replace_line};
