//! Deterministic fallback packages
//!
//! Two fixed packages exist: the "credential required" package returned when
//! no API key was supplied, and the templated mock package returned when the
//! completion call fails.

use crate::package::{ContentPackage, MetaTags, PillarContent, SupportingPage};
use crate::request::GenerationRequest;

/// Pillar title of the credential-required package
pub const CREDENTIAL_REQUIRED_TITLE: &str = "OpenAI API Key Required";

/// Author label used when the request names none
pub const DEFAULT_AUTHOR_LABEL: &str = "Expert Insights";

const CREDENTIAL_REQUIRED_BODY: &str = "# OpenAI API Key Required\n\n\
To generate high-quality, SEO-optimized content, you need to provide a valid OpenAI API key. \
Please enter your API key and try again.\n\n\
## Getting an API Key\n\n\
1. Go to [OpenAI's platform](https://platform.openai.com/)\n\
2. Sign up or log in to your account\n\
3. Navigate to the API section\n\
4. Generate a new API key\n\
5. Copy the key and pass it with `--api-key` or the `OPENAI_API_KEY` environment variable\n\n\
## Why We Need This\n\n\
An API key is required to access OpenAI's models, which generate the content for your SEO strategy. \
The key is never stored; it is used only for this request.";

/// Package returned when no credential was supplied
pub fn credential_required() -> ContentPackage {
    let page = |title: &str, summary: &str| SupportingPage {
        title: title.to_string(),
        summary: summary.to_string(),
    };

    ContentPackage {
        pillar_content: PillarContent {
            title: CREDENTIAL_REQUIRED_TITLE.to_string(),
            body: CREDENTIAL_REQUIRED_BODY.to_string(),
        },
        supporting_pages: [
            page(
                "How to Get Started with OpenAI for Content Creation",
                "A guide to setting up and using OpenAI's API for content creation, including best practices and tips for optimal results.",
            ),
            page(
                "Understanding API Usage and Billing",
                "Learn about OpenAI's pricing model, how API calls are billed, and strategies to optimize your usage for cost-effectiveness.",
            ),
            page(
                "Security Best Practices for API Keys",
                "Important security considerations when working with API keys, including how to protect your credentials and manage access securely.",
            ),
        ],
        meta_tags: MetaTags {
            title: "OpenAI API Key Required | Content Generation Tool".to_string(),
            description: "Learn how to set up and use your OpenAI API key with our content generation tool for SEO-optimized content creation.".to_string(),
            keywords: "OpenAI API, content generation, API key setup, GPT-4".to_string(),
        },
        social_posts: [
            "🔑 Using AI for content creation requires an API key. Learn how to set up your OpenAI API key and start generating high-quality, SEO-optimized content with our tool.".to_string(),
            "⚠️ Security alert: When working with API keys, always follow best practices for credential management. Never share your keys or commit them to public repositories.".to_string(),
            "💡 Did you know? Using an OpenAI API key gives you more control over the content generation process, allowing for customization and improved results tailored to your needs.".to_string(),
        ],
    }
}

/// Templated package used when the completion call fails
pub fn mock_package(request: &GenerationRequest) -> ContentPackage {
    let kw = request.main_keyword();
    let tag = hashtag(kw);
    let author = request.author().unwrap_or(DEFAULT_AUTHOR_LABEL);

    let body = format!(
        "# {kw}: A Comprehensive Guide\n\n\
## Introduction\n\n\
In today's digital landscape, {kw} has become increasingly important for businesses looking to establish a strong online presence. \
This guide explores the key aspects of {kw}, providing actionable insights and strategies.\n\n\
## Why {kw} Matters\n\n\
{kw} enables businesses to connect with their target audience more effectively. \
By implementing the right strategies, companies can increase visibility, drive engagement, and ultimately boost conversions.\n\n\
## Key Strategies for {kw}\n\n\
1. **Research and Planning**: Before diving into {kw}, thorough research is essential to understand your audience's needs and preferences.\n\n\
2. **Implementation**: Develop a structured approach to implementing {kw} strategies across your digital channels.\n\n\
3. **Measurement**: Track the performance of your {kw} efforts using relevant metrics and KPIs.\n\n\
4. **Optimization**: Continuously refine your {kw} approach based on performance data and emerging trends.\n\n\
## Best Practices for {kw}\n\n\
- Stay updated with the latest trends and developments in {kw}\n\
- Focus on creating value for your audience rather than just promoting your products or services\n\
- Integrate {kw} with your overall marketing strategy for a cohesive approach\n\
- Invest in the right tools and technologies to streamline your {kw} efforts\n\n\
## Conclusion\n\n\
{kw} is not just a trend but a fundamental aspect of modern business success. \
By following the strategies and best practices outlined in this guide, you can leverage {kw} to drive meaningful results for your business."
    );

    ContentPackage {
        pillar_content: PillarContent {
            title: format!("Complete Guide to {kw}: Strategies, Tips, and Best Practices"),
            body,
        },
        supporting_pages: [
            SupportingPage {
                title: format!("10 Essential {kw} Tools"),
                summary: format!(
                    "This guide explores the top 10 essential tools for {kw} that businesses should consider. \
From analytics platforms to content creation tools, we cover everything you need to enhance your {kw} strategy and stay ahead of the competition."
                ),
            },
            SupportingPage {
                title: format!("{kw} Case Studies: Success Stories and Lessons Learned"),
                summary: format!(
                    "Explore real-world examples of successful {kw} implementations. \
This page presents detailed case studies that highlight effective strategies, measurable results, and valuable lessons that can be applied to your own {kw} efforts."
                ),
            },
            SupportingPage {
                title: format!("The Future of {kw}: Trends and Predictions"),
                summary: format!(
                    "Stay ahead of the curve with our analysis of emerging trends and predictions for the future of {kw}. \
This forward-looking guide examines technological advancements, changing consumer behaviors, and industry shifts that will shape {kw} in the coming years."
                ),
            },
        ],
        meta_tags: MetaTags {
            title: format!("{kw} Guide: Strategies, Best Practices & Tools | {author}"),
            description: format!(
                "Comprehensive guide to {kw} covering essential strategies, best practices, and expert tips. \
Learn how to implement effective {kw} techniques for your business."
            ),
            keywords: format!(
                "{}, {kw} strategy, {kw} best practices, {kw} guide",
                request.keywords_joined()
            ),
        },
        social_posts: [
            format!(
                "📊 Just published: \"Complete Guide to {kw}\"\n\n\
After months of research and working with industry experts, I'm excited to share our comprehensive guide on {kw}.\n\n\
In this guide, you'll discover:\n✅ Proven strategies for implementing {kw}\n✅ Common pitfalls to avoid\n✅ Tools that can streamline your {kw} efforts\n\n\
Check out the full guide here: [Link]\n\n#{tag} #DigitalStrategy"
            ),
            format!(
                "🔍 Looking to improve your {kw} strategy?\n\n\
Our latest research shows that businesses effectively implementing {kw} see a 40% increase in engagement and 25% higher conversion rates.\n\n\
I've compiled our key findings in a new guide that breaks down exactly what works (and what doesn't).\n\n\
Read it here: [Link]\n\n#{tag} #BusinessGrowth"
            ),
            format!(
                "💡 \"The best time to focus on {kw} was yesterday. The second best time is now.\"\n\n\
If you're still on the fence about investing in {kw}, our new comprehensive guide might change your mind.\n\n\
It covers everything from beginner basics to advanced techniques used by industry leaders.\n\n\
Link in comments 👇\n\n#{tag} #ProfessionalDevelopment"
            ),
        ],
    }
}

/// Keyword with all whitespace removed, for use as a hashtag
pub fn hashtag(keyword: &str) -> String {
    keyword.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::new("content marketing, SEO", "B2B SaaS audience").unwrap()
    }

    #[test]
    fn test_credential_required_is_fixed() {
        let pkg = credential_required();
        assert_eq!(pkg.pillar_content.title, CREDENTIAL_REQUIRED_TITLE);
        assert!(pkg.pillar_content.body.starts_with("# OpenAI API Key Required"));
        assert!(pkg.is_complete());
        assert_eq!(pkg, credential_required());
    }

    #[test]
    fn test_mock_package_templates_keyword() {
        let pkg = mock_package(&request());
        assert_eq!(
            pkg.pillar_content.title,
            "Complete Guide to content marketing: Strategies, Tips, and Best Practices"
        );
        assert!(pkg.pillar_content.body.contains("## Why content marketing Matters"));
        assert!(pkg.meta_tags.title.ends_with("| Expert Insights"));
        assert!(pkg
            .meta_tags
            .keywords
            .starts_with("content marketing, SEO, content marketing strategy"));
        assert!(pkg.social_posts[0].contains("#contentmarketing #DigitalStrategy"));
        assert!(pkg.is_complete());
    }

    #[test]
    fn test_mock_package_uses_author() {
        let pkg = mock_package(&request().with_author("Dana Reyes"));
        assert!(pkg.meta_tags.title.ends_with("| Dana Reyes"));
    }

    #[test]
    fn test_hashtag() {
        assert_eq!(hashtag("content  marketing\ttips"), "contentmarketingtips");
        assert_eq!(hashtag("seo"), "seo");
    }
}
