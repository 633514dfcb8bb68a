//! Sunvale Greeter — a tiny story that says hello.
//!
//! Renders a fixed four-sentence narrative with a caller-supplied name
//! substituted into its greeting.

pub mod core;

pub use crate::core::greeter::{greet, Greeter, DEFAULT_NAME};
pub use crate::core::template::{StoryTemplate, TemplateError};
