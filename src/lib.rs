//! telar - conversational maturity assessment engine
//!
//! A guided, block-structured questionnaire for artisan businesses: answers
//! build a profile, the profile drives question visibility and category
//! scores, and progress is persisted locally with best-effort remote sync.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod profile;
pub mod progress;
pub mod scoring;
pub mod session;

pub use error::{Result, TelarError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
