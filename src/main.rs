// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use func_summarize::config::DEFAULT_CONFIG_PATH;
use func_summarize::utils::logging::{format_error, format_info, format_success, format_warning};
use func_summarize::{
    Config, GithubClient, OpenAiClient, OutputFormat, RepositoryRouter, SummaryThroughput,
    RunReport, SummaryPipeline, export,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "func_summarize")]
#[command(version)]
#[command(
    about = "Summarize function definitions across repositories with an LLM",
    long_about = None
)]
struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output file; overrides output.path from the configuration
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    func_summarize::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());
    let mut config = Config::load(&cli.config).with_context(|| {
        format!("Failed to load configuration from {}", cli.config.display())
    })?;

    config.apply_overrides(cli.output, cli.format);

    let github = GithubClient::new(&config.github).context("Failed to create GitHub client")?;
    if !github.is_authenticated() {
        warn!("GITHUB_TOKEN is not set, GitHub requests are unauthenticated");
    }

    let summarizer =
        OpenAiClient::new(config.llm.clone()).context("Failed to create OpenAI client")?;
    if !summarizer.has_api_key() {
        warn!("OPENAI_API_KEY is not set, every description will record an error");
    }

    let pipeline = SummaryPipeline::new(
        RepositoryRouter::new(github),
        summarizer,
        config.extraction.clone(),
    )
    .with_progress(!cli.verbose, cli.color);

    let report = pipeline.run(&config.repositories).await;

    export(config.output.format, &config.output.path, &report.records).with_context(|| {
        format!("Failed to write {}", config.output.path.display())
    })?;

    print_summary(&report);

    println!(
        "Function summary table created and saved to '{}'.",
        config.output.path.display()
    );

    Ok(())
}

fn print_summary(report: &RunReport) {
    let stats = &report.stats;

    println!(
        "{}",
        format_info(&format!(
            "Repositories: {} processed, {} failed ({:.1}% success)",
            stats.repositories_processed,
            stats.repositories_failed,
            stats.success_rate()
        ))
    );

    for failure in &report.failures {
        println!(
            "{}",
            format_error(&format!("{}: {}", failure.repository, failure.error))
        );
    }

    if stats.summaries_failed > 0 {
        println!(
            "{}",
            format_warning(&format!(
                "{} of {} summaries failed",
                stats.summaries_failed, stats.functions_found
            ))
        );
    }

    println!(
        "{}",
        format_success(&format!(
            "{} functions summarized from {} files",
            stats.summaries_succeeded(),
            stats.files_scanned
        ))
    );

    let throughput =
        SummaryThroughput::measure(stats.functions_found, stats.summaries_failed, stats.duration);
    info!("{}", throughput.describe());
}
