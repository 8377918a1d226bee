//! Core types and shared functionality for tagbot.
//!
//! This crate provides:
//! - The keyword extraction pipeline (tokenize, tag, rank, compose)
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod keywords;
pub mod link;
pub mod page;

pub use config::{AppConfig, ConfigError};
pub use error::{Error, ErrorCategory, NetworkErrorKind};
pub use keywords::{LexiconTagger, PosTagger, TagList, tags_for_page};
pub use link::find_link;
pub use page::PageContent;
