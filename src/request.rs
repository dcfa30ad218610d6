//! Generation requests
//!
//! A [`GenerationRequest`] is validated on construction, so every value the
//! engine sees carries at least one keyword and a non-blank context.

use crate::error::RequestError;
use serde::Serialize;
use std::fmt;

/// Opaque API credential for the text-generation service
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key, returning `None` when it is blank
    pub fn new<S: Into<String>>(key: S) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw key, for building the authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Parameters for one content generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    keywords: Vec<String>,
    context: String,
    author: Option<String>,
    #[serde(skip_serializing)]
    credential: Option<Credential>,
}

impl GenerationRequest {
    /// Build a request from a comma-separated keyword list and a context
    pub fn new(keywords: &str, context: &str) -> Result<Self, RequestError> {
        let keywords = split_keywords(keywords);
        if keywords.is_empty() {
            return Err(RequestError::EmptyKeywords);
        }
        let context = context.trim();
        if context.is_empty() {
            return Err(RequestError::MissingField("context"));
        }

        Ok(Self {
            keywords,
            context: context.to_string(),
            author: None,
            credential: None,
        })
    }

    /// Set the author; blank values are ignored
    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        let author = author.into();
        let author = author.trim();
        self.author = (!author.is_empty()).then(|| author.to_string());
        self
    }

    /// Set the credential; blank values are ignored
    pub fn with_credential<S: Into<String>>(mut self, key: S) -> Self {
        self.credential = Credential::new(key);
        self
    }

    /// Ordered, trimmed, non-empty keywords
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The first keyword
    pub fn main_keyword(&self) -> &str {
        // Construction guarantees at least one keyword.
        &self.keywords[0]
    }

    /// Keywords joined back with `", "`
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }

    /// Content context
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Optional author
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Optional credential
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
