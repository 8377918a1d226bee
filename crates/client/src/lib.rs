//! Client code for tagbot.
//!
//! This crate provides the HTTP fetch step, page text extraction and the
//! end-to-end tag pipeline shared by the server and CLI.

pub mod extract;
pub mod fetch;
pub mod pipeline;

pub use extract::{Extractor, HtmlExtractor, extract_page};
pub use fetch::{FetchClient, FetchConfig, FetchResponse, HeaderProfile, HeaderRotation, canonicalize};
pub use pipeline::TagPipeline;
