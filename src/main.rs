//! resume-fit - score a résumé against a job description.
//!
//! Prints the analysis as JSON on stdout; logs go to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use mimalloc::MiMalloc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use resume_fit::document::{DocumentFormat, extract_text_from_path};
use resume_fit::{
    Analyzer, Config, DocumentScoring, EmbeddingProvider, NegativePolicy, RawDocument,
    SkillStrategy,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Parser)]
#[command(name = "resume-fit", version, about)]
#[command(group(ArgGroup::new("job_source").required(true).args(["job", "job_text"])))]
struct Cli {
    /// Résumé document (.pdf or .docx)
    resume: PathBuf,

    /// Job description file (plain text, .pdf or .docx)
    #[arg(long, value_name = "FILE")]
    job: Option<PathBuf>,

    /// Job description given inline
    #[arg(long, value_name = "TEXT")]
    job_text: Option<String>,

    /// Skill matching: plain, categorized, context-aware
    #[arg(long, value_name = "STRATEGY")]
    strategy: Option<SkillStrategy>,

    /// Negative cosine handling: clamp, signed, absolute
    #[arg(long, value_name = "POLICY")]
    negative_policy: Option<NegativePolicy>,

    /// Overall score mode: sentence, whole
    #[arg(long, value_name = "MODE")]
    scoring: Option<DocumentScoring>,

    /// Local model directory (config.json, tokenizer.json, model.safetensors)
    #[arg(long, value_name = "DIR")]
    model_dir: Option<PathBuf>,

    /// Never download model files
    #[arg(long)]
    offline: bool,

    /// Use the deterministic test embedder instead of a real model
    #[arg(long, hide = true)]
    stub: bool,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress logs
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = build_config(cli)?;

    let provider = if cli.stub {
        tracing::warn!("--stub given, scores are not semantic");
        EmbeddingProvider::stub()
    } else {
        EmbeddingProvider::new(config.embedder_config())
    };
    let analyzer = Analyzer::new(Arc::new(provider), config.analyzer_options());

    let job = read_job(cli)?;
    let resume = RawDocument::from_path(&cli.resume)?;
    let result = analyzer.analyze_document(&job, resume)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}

/// Environment configuration with command-line overrides applied.
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env().context("invalid RESUME_FIT_* environment")?;

    if let Some(strategy) = cli.strategy {
        config.skill_strategy = strategy;
    }
    if let Some(policy) = cli.negative_policy {
        config.negative_policy = policy;
    }
    if let Some(scoring) = cli.scoring {
        config.document_scoring = scoring;
    }
    if let Some(dir) = &cli.model_dir {
        config.model_dir = Some(dir.clone());
    }
    config.offline |= cli.offline;

    config.validate()?;
    Ok(config)
}

fn read_job(cli: &Cli) -> anyhow::Result<String> {
    if let Some(text) = &cli.job_text {
        return Ok(text.clone());
    }

    let path = cli
        .job
        .as_deref()
        .context("either --job or --job-text is required")?;

    if is_document(path) {
        return Ok(extract_text_from_path(path)?);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read job description {}", path.display()))
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DocumentFormat::from_extension(ext).is_ok())
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,resume_fit=info",
        1 => "info,resume_fit=debug",
        _ => "debug,resume_fit=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
