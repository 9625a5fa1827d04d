use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vidtrend_core::{AppConfig, Category, ChannelVideos, ConfigError, CorpusFixture};
use vidtrend_engine::{run_pipeline, PipelineOutput, RunOptions};
use vidtrend_youtube::YoutubeClient;

mod collect;
mod report;
mod store;

#[derive(Debug, Parser)]
#[command(name = "vidtrend-cli")]
#[command(about = "Trend research and content planning for AI video channels")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run every stage and write all six tables to the output directory
    Run {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print the influencer ranking
    Influencers {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print trending topics and hashtags
    Trends {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print generated video ideas
    Ideas {
        #[command(flatten)]
        common: CommonArgs,
    },
}

impl Commands {
    fn common(&self) -> &CommonArgs {
        match self {
            Commands::Run { common }
            | Commands::Influencers { common }
            | Commands::Trends { common }
            | Commands::Ideas { common } => common,
        }
    }
}

#[derive(Debug, Clone, Args)]
struct CommonArgs {
    /// Read channels and videos from a YAML corpus instead of the API
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Pipeline YAML file (overrides `VIDTREND_PIPELINE_PATH`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for the JSON tables
    #[arg(long)]
    out: Option<PathBuf>,

    /// Reference time for recency and growth, as RFC 3339
    #[arg(long, value_parser = parse_as_of)]
    as_of: Option<DateTime<Utc>>,

    /// Number of ideas to generate
    #[arg(long, default_value_t = 50)]
    ideas: usize,

    /// Number of top ideas to script
    #[arg(long, default_value_t = 10)]
    scripts: usize,

    /// Restrict ideas to these categories (comma-separated)
    #[arg(long, value_delimiter = ',', value_parser = parse_category)]
    category: Vec<Category>,
}

fn parse_as_of(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

fn parse_category(raw: &str) -> Result<Category, String> {
    raw.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    let common = command.common();

    let mut config = match &common.config {
        Some(path) => vidtrend_core::load_app_config_with_pipeline(path)?,
        None => vidtrend_core::load_app_config()?,
    };
    if let Some(out) = &common.out {
        config.output_dir.clone_from(out);
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let corpus = load_corpus(common, &config).await?;
    let options = run_options(&command);
    let output = run_pipeline(&corpus, &config.pipeline, &options)?;

    match command {
        Commands::Run { .. } => write_output(&output, &config)?,
        Commands::Influencers { .. } => report::print_influencers(&output.influencers),
        Commands::Trends { .. } => report::print_trends(&output.trends),
        Commands::Ideas { .. } => report::print_ideas(&output.ideas),
    }

    Ok(())
}

/// Per-run options from the command line. Only `run` synthesizes scripts.
fn run_options(command: &Commands) -> RunOptions {
    let common = command.common();
    let mut options = RunOptions::new(common.as_of.unwrap_or_else(Utc::now));
    options.idea_count = common.ideas;
    options.script_count = match command {
        Commands::Run { .. } => common.scripts,
        _ => 0,
    };
    if !common.category.is_empty() {
        options.categories.clone_from(&common.category);
    }
    options
}

async fn load_corpus(
    common: &CommonArgs,
    config: &AppConfig,
) -> anyhow::Result<Vec<ChannelVideos>> {
    if let Some(path) = &common.fixture {
        let fixture = CorpusFixture::load(path)?;
        tracing::info!(path = %path.display(), "using fixture corpus");
        let corpus =
            collect::collect_corpus(&fixture, &config.pipeline, collect::FETCH_CONCURRENCY)
                .await?;
        return Ok(corpus);
    }

    let api_key = config
        .youtube_api_key
        .as_deref()
        .ok_or_else(|| ConfigError::MissingEnvVar("YOUTUBE_API_KEY".to_string()))?;
    let client = YoutubeClient::new(api_key, config.request_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build YouTube client: {e}"))?
        .with_results_per_keyword(config.search_results_per_keyword);
    let corpus =
        collect::collect_corpus(&client, &config.pipeline, collect::FETCH_CONCURRENCY).await?;
    Ok(corpus)
}

fn write_output(output: &PipelineOutput, config: &AppConfig) -> anyhow::Result<()> {
    let mut sink = store::JsonTableSink::new(&config.output_dir);
    output.write_tables(&mut sink)?;
    output.log_summary();
    tracing::info!(dir = %config.output_dir.display(), "tables written");
    println!(
        "wrote {} influencers, {} videos, {} ideas, {} scripts to {}",
        output.influencers.len(),
        output.videos.len(),
        output.ideas.len(),
        output.scripts.len(),
        config.output_dir.display()
    );
    Ok(())
}
