use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use intentlens_ai::{
    distinct_markets, MarketOrchestrator, MarketProgress, MarketRequest, ProgressStage,
};
use intentlens_cli::logging::init_tracing;
use intentlens_cli::report::{print_report, render_table};
use intentlens_cli::{export_for_tier, rank_keywords, validate_selection};
use intentlens_core::{
    AccessTier, ConfigManager, InterfaceLanguage, LoggingConfig, MarketRegistry,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

#[derive(Parser)]
#[command(name = "intentlens")]
#[command(about = "IntentLens - Localized search keywords for every target market", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (json, pretty, table)
    #[arg(short, long, global = true, default_value = "pretty")]
    output: OutputFormat,

    /// Config file to use instead of the search path
    #[arg(short, long, global = true, env = "INTENTLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate localized keywords for one seed across markets
    Generate {
        /// English seed keyword, e.g. "Robot Lawn Mower"
        seed: String,

        /// Target market (repeat for several)
        #[arg(short, long = "market", value_name = "COUNTRY")]
        markets: Vec<String>,

        /// Model API key; sample data is shown when none is available
        #[arg(long)]
        api_key: Option<String>,

        /// Interface language (English, Chinese)
        #[arg(short, long)]
        language: Option<InterfaceLanguage>,

        /// Access tier (guest, registered, privileged)
        #[arg(short, long)]
        tier: Option<AccessTier>,

        /// Export ranked keywords as CSV, optionally to PATH
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// List supported markets and their languages
    Markets,

    /// Write a default configuration file
    Init {
        /// Where to write it (defaults to ~/.intentlens/config.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        output,
        config,
        verbose,
        command,
    } = Cli::parse();

    match command {
        Commands::Generate {
            seed,
            markets,
            api_key,
            language,
            tier,
            export,
        } => {
            let args = GenerateArgs {
                seed,
                markets,
                api_key,
                language,
                tier,
                export,
            };
            handle_generate(config.as_deref(), output, verbose, args).await?
        }
        Commands::Markets => {
            init_tracing(&LoggingConfig::default(), verbose);
            handle_markets(output)?
        }
        Commands::Init { path, force } => {
            init_tracing(&LoggingConfig::default(), verbose);
            handle_init(path, force)?
        }
    }

    Ok(())
}

struct GenerateArgs {
    seed: String,
    markets: Vec<String>,
    api_key: Option<String>,
    language: Option<InterfaceLanguage>,
    tier: Option<AccessTier>,
    export: Option<Option<PathBuf>>,
}

async fn handle_generate(
    config_path: Option<&Path>,
    output: OutputFormat,
    verbose: bool,
    args: GenerateArgs,
) -> Result<()> {
    let manager = match config_path {
        Some(path) => ConfigManager::load_from(path),
        None => ConfigManager::load(),
    }
    .context("Failed to load configuration")?;
    let config = manager.into_config();
    init_tracing(&config.logging, verbose);

    let mut session = config.session;
    if let Some(language) = args.language {
        session.interface_language = language;
    }
    if let Some(tier) = args.tier {
        session.tier = tier;
    }
    debug!(tier = %session.tier, language = %session.interface_language, "Session");

    if let Err(message) = validate_selection(&args.seed, &args.markets, &session) {
        bail!(message);
    }
    let markets = distinct_markets(&args.markets);

    let registry = MarketRegistry::builtin();
    for country in markets.iter().copied() {
        if !registry.contains(country) {
            eprintln!(
                "{} {} is not a known market; keywords will be requested in English",
                "⚠️".yellow(),
                country.bold()
            );
        }
    }

    let credential = args
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| config.llm.credential().map(str::to_string));

    let mut request = MarketRequest::new(args.seed.trim(), markets.iter().copied())
        .with_interface_language(session.interface_language);
    match credential {
        Some(key) => request = request.with_credential(key),
        None => eprintln!(
            "{}",
            "ℹ️  No API key provided, showing sample data.".cyan()
        ),
    }

    let orchestrator = MarketOrchestrator::new(registry, &config.llm);

    let pb = ProgressBar::new(markets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let outcome = orchestrator
        .run_with_progress(&request, &mut |p: &MarketProgress| {
            pb.set_length(p.total as u64);
            match p.stage {
                ProgressStage::Started => pb.set_message(format!(
                    "Processing {} ({})... ({}/{})",
                    p.country, p.language, p.position, p.total
                )),
                ProgressStage::Completed => pb.set_position(p.position as u64),
            }
        })
        .await;
    pb.finish_and_clear();

    let aggregate = match outcome {
        Ok(aggregate) => aggregate,
        Err(e) => {
            if e.is_generation() {
                eprintln!(
                    "{}",
                    "💡 Hint: check that your API key is valid and the network is reachable."
                        .yellow()
                );
            }
            return Err(e.into());
        }
    };

    let rows = rank_keywords(&aggregate);

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&aggregate)?),
        OutputFormat::Table => {
            if rows.is_empty() {
                eprintln!(
                    "{}",
                    "⚠️  No keywords generated. Please check API response format.".yellow()
                );
            } else {
                println!("{}", render_table(&rows));
            }
        }
        OutputFormat::Pretty => {
            println!("{}", "✓ Analysis complete!".green().bold());
            print_report(&aggregate, &rows);
        }
    }

    if let Some(path) = args.export {
        match export_for_tier(
            session.tier,
            &rows,
            path.as_deref(),
            &request.seed_keyword,
            &aggregate.countries(),
        )? {
            Some(written) => eprintln!("{} {}", "✓ Exported CSV:".green(), written.display()),
            None => eprintln!(
                "{}",
                "ℹ️  CSV export is available to privileged users only.".cyan()
            ),
        }
    }

    Ok(())
}

#[derive(Serialize, Tabled)]
struct MarketRow<'a> {
    #[tabled(rename = "Country")]
    country: &'a str,
    #[tabled(rename = "Language")]
    language: &'a str,
}

fn handle_markets(output: OutputFormat) -> Result<()> {
    let registry = MarketRegistry::builtin();
    let rows: Vec<MarketRow<'_>> = registry
        .entries()
        .map(|(country, language)| MarketRow { country, language })
        .collect();

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Pretty | OutputFormat::Table => {
            println!("{}", Table::new(&rows).with(Style::modern()));
            println!("{} {} markets", "Total:".bold(), rows.len());
        }
    }

    Ok(())
}

fn handle_init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path.or_else(ConfigManager::user_config_path) {
        Some(path) => path,
        None => PathBuf::from(".intentlens.toml"),
    };

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    ConfigManager::create_default_config(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} {}", "✓ Wrote default config:".green(), path.display());
    println!(
        "  Set {} or add api_key under [llm] to use a live model.",
        "DEEPSEEK_API_KEY".bold()
    );

    Ok(())
}
