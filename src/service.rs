//! Generation service
//!
//! Runs one generation per call: no credential returns the
//! credential-required package, a successful completion is extracted, and a
//! failed completion falls back to the templated mock package. The service
//! never returns an error.

use crate::completion::CompletionClient;
use crate::extraction::ContentExtractor;
use crate::fallback;
use crate::package::ContentPackage;
use crate::prompt::PromptBuilder;
use crate::request::GenerationRequest;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Where a package came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// No credential was supplied
    CredentialRequired,
    /// Extracted from a completion
    Completion,
    /// The completion call failed; templated content was used
    Fallback,
}

/// Result of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// Generation id
    pub id: Uuid,
    /// Package origin
    pub source: ContentSource,
    /// The package itself
    pub package: ContentPackage,
    /// Error message when the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Orchestrates prompt, completion call, extraction and fallback
pub struct ContentService<C> {
    client: C,
    extractor: ContentExtractor,
}

impl<C: CompletionClient> ContentService<C> {
    /// Create a service using the current calendar year for padding
    pub fn new(client: C) -> Self {
        Self {
            client,
            extractor: ContentExtractor::new(),
        }
    }

    /// Replace the extractor
    pub fn with_extractor(mut self, extractor: ContentExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Completion backend
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generate a content package
    #[instrument(skip_all, fields(id = tracing::field::Empty, main_keyword = %request.main_keyword()))]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let id = Uuid::new_v4();
        tracing::Span::current().record("id", tracing::field::display(id));

        let Some(credential) = request.credential() else {
            info!("No API key provided; returning credential-required package");
            return GenerationOutcome {
                id,
                source: ContentSource::CredentialRequired,
                package: self.extractor.extract(request, None),
                notice: None,
            };
        };

        let prompt = PromptBuilder::build(request);
        info!("Generating content with completion endpoint");

        match self.client.complete(credential, &prompt).await {
            Ok(raw) => GenerationOutcome {
                id,
                source: ContentSource::Completion,
                package: self.extractor.extract(request, Some(raw.as_str())),
                notice: None,
            },
            Err(err) => {
                warn!(error = %err, "Content generation failed, falling back to template content");
                GenerationOutcome {
                    id,
                    source: ContentSource::Fallback,
                    package: fallback::mock_package(request),
                    notice: Some(format!("Content generation failed, using template content: {}", err)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::RawCompletion;
    use crate::error::CompletionError;
    use crate::extraction::ExtractOptions;
    use crate::prompt::Prompt;
    use crate::request::Credential;

    struct EchoClient;

    impl CompletionClient for EchoClient {
        async fn complete(
            &self,
            _credential: &Credential,
            prompt: &Prompt,
        ) -> Result<RawCompletion, CompletionError> {
            Ok(RawCompletion::new(format!("Title: Echo\n\n# Echo\n\n{}", prompt.user)))
        }
    }

    fn service() -> ContentService<EchoClient> {
        ContentService::new(EchoClient)
            .with_extractor(ContentExtractor::with_options(ExtractOptions::with_year(2026)))
    }

    #[test]
    fn test_without_credential() {
        let req = GenerationRequest::new("seo", "ctx").unwrap();
        let outcome = tokio_test::block_on(service().generate(&req));
        assert_eq!(outcome.source, ContentSource::CredentialRequired);
        assert_eq!(outcome.package, fallback::credential_required());
    }

    #[test]
    fn test_with_credential() {
        let req = GenerationRequest::new("seo", "ctx")
            .unwrap()
            .with_credential("sk-test");
        let outcome = tokio_test::block_on(service().generate(&req));
        assert_eq!(outcome.source, ContentSource::Completion);
        assert_eq!(outcome.package.pillar_content.title, "Echo");
        assert!(outcome.package.pillar_content.body.contains("Keywords: seo"));
    }

    #[test]
    fn test_outcome_serialization() {
        let req = GenerationRequest::new("seo", "ctx").unwrap();
        let outcome = tokio_test::block_on(service().generate(&req));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["source"], "credential_required");
        assert!(json.get("notice").is_none());
    }
}
