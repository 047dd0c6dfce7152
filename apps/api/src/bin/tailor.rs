//! Command-line entry point: one pipeline run per invocation.
//! Exits nonzero with a readable message on any failure. An artifact is
//! only ever reported after the renderer verified it on disk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tailor_api::config::Config;
use tailor_api::errors::AppError;
use tailor_api::fetch::HttpFetcher;
use tailor_api::llm_client::LlmClient;
use tailor_api::orchestrator::{self, PipelineOutcome};
use tailor_api::render::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tailor",
    version,
    about = "Generate a CV tailored to a job posting",
    long_about = "Fetches a job posting, tailors the CV in your skills file to it with an LLM, \
                  and renders the result to a PDF.\n\nRequires GROQ_API_KEY in the environment or a .env file."
)]
struct Cli {
    /// URL of the job posting
    job_url: String,

    /// Skills/background file (read as plain text)
    #[arg(long, default_value = "my-skills.md")]
    skills_file: PathBuf,

    /// Directory the rendered CV is written to
    #[arg(long, default_value = "./output")]
    output_dir: PathBuf,

    /// Output format: pdf or text
    #[arg(long, default_value = "pdf")]
    format: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run(cli).await {
        Ok(outcome) => {
            println!("Tailored CV for \"{}\"", outcome.job_title);
            println!(
                "{} ({} bytes)",
                outcome.artifact.path.display(),
                outcome.artifact.byte_size
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<PipelineOutcome, AppError> {
    let format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(AppError::Validation)?;

    let config = Config::from_env()?;
    let fetcher = HttpFetcher::new();
    let llm = LlmClient::new(config.groq_api_key.clone());

    orchestrator::run(
        &fetcher,
        &llm,
        &cli.job_url,
        &cli.skills_file,
        &cli.output_dir,
        format,
    )
    .await
}
