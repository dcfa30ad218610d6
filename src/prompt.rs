//! Prompt construction for the text-generation call

use crate::request::GenerationRequest;
use serde::{Deserialize, Serialize};

/// Fixed system instruction
pub const SYSTEM_INSTRUCTION: &str = "You are a content strategy assistant that creates comprehensive content packages including pillar content, supporting page ideas, meta tags, and social media posts. Respond with well-structured content in the format requested.";

/// System instruction plus user prompt for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// System message
    pub system: String,
    /// User message
    pub user: String,
}

/// Builds prompts from generation requests
pub struct PromptBuilder;

impl PromptBuilder {
    /// Interpolate the request into the instructional template
    pub fn build(request: &GenerationRequest) -> Prompt {
        let author_line = request
            .author()
            .map(|author| format!("Author: {}\n", author))
            .unwrap_or_default();

        let user = format!(
            "Create a comprehensive content package for the following:\n\n\
Keywords: {keywords}\n\
Content Context: {context}\n\
{author_line}\n\
Please generate:\n\n\
1. A pillar content piece with:\n\
   - An engaging title\n\
   - Comprehensive content in markdown format with sections including introduction, importance, strategies, best practices, and conclusion\n\n\
2. Three supporting page ideas with:\n\
   - Compelling titles\n\
   - Brief summaries (2-3 sentences each) that complement the pillar content\n\n\
3. Meta tags:\n\
   - SEO-optimized title (under 60 characters)\n\
   - Meta description (under 160 characters)\n\
   - Keywords list\n\n\
4. Three LinkedIn posts to promote the content (under 1200 characters each)\n",
            keywords = request.keywords_joined(),
            context = request.context(),
        );

        Prompt {
            system: SYSTEM_INSTRUCTION.to_string(),
            user,
        }
    }
}
