//! Text-generation call
//!
//! A single request/response exchange with a chat-completion endpoint. The
//! response text is handed to extraction untouched.

pub mod openai;

pub use openai::OpenAiClient;

use crate::error::CompletionError;
use crate::prompt::Prompt;
use crate::request::Credential;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Opaque text returned by the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCompletion(String);

impl RawCompletion {
    /// Wrap completion text
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    /// Completion text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the completion text
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A backend that turns a prompt into completion text
pub trait CompletionClient: Send + Sync {
    /// Run one completion
    fn complete(
        &self,
        credential: &Credential,
        prompt: &Prompt,
    ) -> impl Future<Output = Result<RawCompletion, CompletionError>> + Send;
}
