use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use newsletter_forge::{
    CliConfig, DraftChecklist, ExtractError, FileOutputWriter, NewsletterDraft, OutputWriter,
    PromptDocument, RawSource, StdoutWriter, decode_strict_json, extract_strict_json,
    parse_prompt_document, render_newsletter, render_prompt_document, slugify_truncate,
    validate_against_schema,
};

/// Newsletter-Forge CLI: turn raw LLM output and pasted prompt documents into structured data
#[derive(Parser, Debug)]
#[command(name = "newsletter-forge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write results into this directory instead of stdout
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the JSON body from an LLM response
    #[command(name = "extract-json")]
    ExtractJson {
        #[command(flatten)]
        input: InputArgs,

        /// Validate the extracted value against this JSON Schema
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Parse the extracted text and print it re-serialized
        #[arg(long)]
        decode: bool,
    },

    /// Parse a pasted prompt document into its fields
    #[command(name = "parse-prompt")]
    ParsePrompt {
        #[command(flatten)]
        input: InputArgs,

        /// Pad example prompts to at least this many entries
        #[arg(long)]
        pad: Option<usize>,
    },

    /// Parse a prompt document and re-render it in canonical layout
    #[command(name = "render-prompt")]
    RenderPrompt {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Render a newsletter draft returned by the model as Markdown
    #[command(name = "preview")]
    Preview {
        #[command(flatten)]
        input: InputArgs,

        /// Render even when blocking checks fail
        #[arg(long)]
        allow_incomplete: bool,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input file (stdin when omitted or "-")
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for results
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Load configuration and apply CLI overrides
    let mut config = CliConfig::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.output.dir = Some(dir);
    }

    let writer: Box<dyn OutputWriter> = match &config.output.dir {
        Some(dir) => Box::new(FileOutputWriter::new(dir.clone())),
        None => Box::new(StdoutWriter),
    };

    match cli.command {
        Command::ExtractJson {
            input,
            schema,
            decode,
        } => handle_extract_command(&config, writer.as_ref(), input, schema, decode).await,
        Command::ParsePrompt { input, pad } => {
            handle_parse_command(&config, writer.as_ref(), input, pad).await
        }
        Command::RenderPrompt { input } => {
            handle_render_command(&config, writer.as_ref(), input).await
        }
        Command::Preview {
            input,
            allow_incomplete,
        } => handle_preview_command(&config, writer.as_ref(), input, allow_incomplete).await,
    }
}

/// Log a hint for errors the caller can fix by regenerating
fn report_retryable(err: ExtractError) -> ExtractError {
    if err.is_retryable() {
        warn!("Model output was not usable; regenerating may help");
    }
    err
}

async fn handle_extract_command(
    config: &CliConfig,
    writer: &dyn OutputWriter,
    input: InputArgs,
    schema: Option<PathBuf>,
    decode: bool,
) -> Result<()> {
    let source = RawSource::from_arg(input.input);
    let raw = source.read().await?;
    let extracted = extract_strict_json(&raw);
    info!("Extracted {} of {} bytes", extracted.len(), raw.len());

    let schema_path = schema.or_else(|| config.extract.schema.clone());
    let slug = slugify_truncate(&source.stem(), "response");

    if !decode && schema_path.is_none() {
        writer.write_document(&slug, "json", extracted).await?;
        return Ok(());
    }

    let value: Value = decode_strict_json(&raw).map_err(report_retryable)?;

    if let Some(path) = schema_path {
        let schema_text = tokio::fs::read_to_string(&path)
            .await
            .context(format!("Failed to read schema: {:?}", path))?;
        let schema: Value = serde_json::from_str(&schema_text)
            .context(format!("Failed to parse schema JSON from {:?}", path))?;
        validate_against_schema(&value, &schema).map_err(report_retryable)?;
        info!("Value satisfies schema {:?}", path);
    }

    if decode {
        let format = config.output.format;
        writer
            .write_document(&slug, format.extension(), &format.to_string_pretty(&value)?)
            .await?;
    } else {
        writer.write_document(&slug, "json", extracted).await?;
    }
    Ok(())
}

async fn handle_parse_command(
    config: &CliConfig,
    writer: &dyn OutputWriter,
    input: InputArgs,
    pad: Option<usize>,
) -> Result<()> {
    let source = RawSource::from_arg(input.input);
    let raw = source.read().await?;
    let doc = parse_prompt_document(&raw);

    if doc.is_empty() {
        warn!("No data extracted from prompt document");
    }

    let min_slots = pad.unwrap_or(config.parser.min_example_slots);
    let display = PromptDocument {
        example_prompts: doc.padded_examples(min_slots),
        ..doc.clone()
    };

    let format = config.output.format;
    let slug = slugify_truncate(&doc.title, &source.stem());
    writer
        .write_document(&slug, format.extension(), &format.to_string_pretty(&display)?)
        .await?;
    Ok(())
}

async fn handle_render_command(
    config: &CliConfig,
    writer: &dyn OutputWriter,
    input: InputArgs,
) -> Result<()> {
    let source = RawSource::from_arg(input.input);
    let raw = source.read().await?;
    let doc = parse_prompt_document(&raw);

    if doc.is_empty() {
        anyhow::bail!("No data extracted from prompt document");
    }

    let markdown = render_prompt_document(&doc, config.render.templates_dir.as_deref())?;
    let slug = slugify_truncate(&doc.title, &source.stem());
    writer.write_document(&slug, "md", &markdown).await?;
    Ok(())
}

async fn handle_preview_command(
    config: &CliConfig,
    writer: &dyn OutputWriter,
    input: InputArgs,
    allow_incomplete: bool,
) -> Result<()> {
    let source = RawSource::from_arg(input.input);
    let raw = source.read().await?;
    let draft: NewsletterDraft = decode_strict_json(&raw).map_err(report_retryable)?;

    let results = DraftChecklist::default().run_all(&draft);
    for result in results.iter().filter(|r| !r.passed) {
        warn!("[{}] {}", result.check_name, result.message);
    }

    let blocking = DraftChecklist::blocking_failures(&results);
    if !blocking.is_empty() && !allow_incomplete {
        anyhow::bail!(
            "Draft failed {} blocking checks (use --allow-incomplete to render anyway)",
            blocking.len()
        );
    }

    let markdown = render_newsletter(&draft, config.render.templates_dir.as_deref())?;
    let slug = slugify_truncate(&draft.title, "newsletter");
    writer.write_document(&slug, "md", &markdown).await?;
    info!("Rendered preview with {} sections", draft.sections.len());
    Ok(())
}
