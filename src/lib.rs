//! Pillarkit - SEO Content Package Generation
//!
//! This crate turns a keyword set into a complete SEO content package: a
//! pillar article, three supporting page ideas, meta tags and three LinkedIn
//! posts.
//!
//! # Features
//!
//! - **Content Extraction**: heuristic parsing of free-form completion text
//!   into a fixed package structure, with templated fallbacks for anything
//!   missing
//! - **Completion Client**: OpenAI-compatible chat completions over HTTP
//! - **Fallback Content**: deterministic packages when no API key is given or
//!   the call fails
//! - **Keyword Tables**: search, sort and CSV export over keyword metrics
//!
//! # Architecture
//!
//! ```text
//! GenerationRequest ──▶ ContentService ──▶ CompletionClient (HTTP)
//!                            │                    │
//!                            │ no key / failure   │ raw text
//!                            ▼                    ▼
//!                     ┌─────────────┐     ┌──────────────────┐
//!                     │  Fallback   │     │ ContentExtractor │
//!                     └──────┬──────┘     └────────┬─────────┘
//!                            └──────────┬──────────┘
//!                                       ▼
//!                                ContentPackage
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pillarkit::{ContentService, GenerationRequest, GeneratorConfig, OpenAiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = GenerationRequest::new("content marketing, SEO", "B2B SaaS founders")?
//!         .with_credential(std::env::var("OPENAI_API_KEY").unwrap_or_default());
//!
//!     let service = ContentService::new(OpenAiClient::new(GeneratorConfig::default())?);
//!     let outcome = service.generate(&request).await;
//!
//!     println!("{}", outcome.package.to_markdown());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod completion;
pub mod config;
pub mod error;
pub mod extraction;
pub mod fallback;
pub mod keywords;
pub mod package;
pub mod prompt;
pub mod request;
pub mod service;

// Re-exports for convenience
pub use completion::{CompletionClient, OpenAiClient, RawCompletion};
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use extraction::{extract, ContentExtractor, ExtractOptions};
pub use keywords::{KeywordDataset, KeywordRecord, KeywordTable};
pub use package::{Category, ContentPackage, MetaTags, PillarContent, SupportingPage};
pub use prompt::{Prompt, PromptBuilder};
pub use request::{Credential, GenerationRequest};
pub use service::{ContentService, ContentSource, GenerationOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
