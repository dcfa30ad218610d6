//! Pillarkit CLI
//!
//! Generates SEO content packages and works with keyword tables.

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use pillarkit::keywords::{research_demo, SortDirection, SortField};
use pillarkit::{
    Category, ContentExtractor, ContentPackage, ContentService, GenerationRequest,
    GeneratorConfig, KeywordDataset, KeywordTable, OpenAiClient,
};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pillarkit SEO content generator
#[derive(Parser, Debug)]
#[command(name = "pillarkit")]
#[command(version)]
#[command(about = "Generate SEO content packages from a keyword set")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a content package through the completion endpoint
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        /// API key for the completion endpoint
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Model name
        #[arg(long, env = "PILLARKIT_MODEL", default_value = pillarkit::config::DEFAULT_MODEL)]
        model: String,

        /// API base URL
        #[arg(long, env = "PILLARKIT_BASE_URL", default_value = pillarkit::config::DEFAULT_BASE_URL)]
        base_url: String,

        /// Sampling temperature
        #[arg(long, default_value = "0.7")]
        temperature: f32,

        /// Request timeout in seconds
        #[arg(long, default_value = "60")]
        timeout_secs: u64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract a content package from saved completion text
    Extract {
        #[command(flatten)]
        request: RequestArgs,

        /// Completion text file, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Search, sort and export keyword data
    Keywords {
        /// Keyword dataset JSON file (defaults to the demo dataset)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Case-insensitive keyword filter
        #[arg(long)]
        search: Option<String>,

        /// Sort column: keyword, volume, difficulty or cpc
        #[arg(long, default_value = "volume")]
        sort: SortField,

        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,

        /// Print CSV instead of a table
        #[arg(long)]
        csv: bool,

        /// Show the research panel's demo suggestions instead
        #[arg(long, conflicts_with_all = ["data", "csv"])]
        research: bool,
    },
}

#[derive(ClapArgs, Debug)]
struct RequestArgs {
    /// Comma-separated target keywords
    #[arg(short, long)]
    keywords: String,

    /// Audience, goals and requirements for the content
    #[arg(short, long)]
    context: String,

    /// Author name
    #[arg(short, long)]
    author: Option<String>,
}

#[derive(ClapArgs, Debug)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Print only one category: pillar, supporting, meta or social
    #[arg(long)]
    category: Option<Category>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Markdown,
}

impl RequestArgs {
    fn to_request(&self) -> anyhow::Result<GenerationRequest> {
        let mut request = GenerationRequest::new(&self.keywords, &self.context)?;
        if let Some(author) = &self.author {
            request = request.with_author(author.as_str());
        }
        Ok(request)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Generate {
            request,
            api_key,
            model,
            base_url,
            temperature,
            timeout_secs,
            output,
        } => {
            let mut request = request.to_request()?;
            if let Some(key) = api_key {
                request = request.with_credential(key);
            }

            let config = GeneratorConfig::builder()
                .model(model)
                .base_url(base_url)
                .temperature(temperature)
                .timeout_secs(timeout_secs)
                .build()?;
            let service = ContentService::new(OpenAiClient::new(config)?);

            tracing::info!("Pillarkit {} generating content", pillarkit::VERSION);
            let outcome = service.generate(&request).await;
            if let Some(notice) = &outcome.notice {
                eprintln!("warning: {}", notice);
            }

            println!("{}", render(&outcome.package, &outcome, &output)?);
        }
        Command::Extract {
            request,
            input,
            output,
        } => {
            let request = request.to_request()?;
            let raw = read_input(&input)?;
            let package = ContentExtractor::new().extract(&request, Some(raw.as_str()));
            println!("{}", render(&package, &package, &output)?);
        }
        Command::Keywords {
            data,
            search,
            sort,
            asc,
            csv,
            research,
        } => {
            if research {
                let term = search.unwrap_or_default().to_lowercase();
                println!("{:<36} {:>8} {:>10} {:>7}", "KEYWORD", "VOLUME", "DIFFICULTY", "CPC");
                for row in research_demo()
                    .iter()
                    .filter(|r| r.keyword.to_lowercase().contains(&term))
                {
                    println!(
                        "{:<36} {:>8} {:>10} {:>7}",
                        row.keyword, row.volume, row.difficulty, row.cpc
                    );
                }
                return Ok(());
            }

            let dataset = match data {
                Some(path) => KeywordDataset::from_path(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => KeywordDataset::demo(),
            };

            let mut table = KeywordTable::new(dataset.keywords);
            if let Some(term) = search {
                table.search(term);
            }
            let direction = if asc {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            };
            table.set_sort(sort, direction);

            if csv {
                println!("{}", table.to_csv());
            } else {
                println!("{:<36} {:>8} {:>10} {:>7}", "KEYWORD", "VOLUME", "DIFFICULTY", "CPC");
                for row in table.rows() {
                    println!(
                        "{:<36} {:>8} {:>10} {:>7}",
                        row.keyword, row.volume, row.difficulty, row.cpc
                    );
                }
            }
        }
    }

    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read completion text from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))
    }
}

/// Render a package for stdout; `json` is what the JSON format serializes
fn render<T: Serialize>(
    package: &ContentPackage,
    json: &T,
    output: &OutputArgs,
) -> anyhow::Result<String> {
    Ok(match (output.category, output.format) {
        (Some(category), _) => package.copy_text(category),
        (None, OutputFormat::Json) => serde_json::to_string_pretty(json)?,
        (None, OutputFormat::Markdown) => package.to_markdown(),
    })
}
