//! xkcd-bot main entry point
//!
//! This is the command-line interface that loads configuration and runs the bot.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xkcd_bot::bot::start_bot;
use xkcd_bot::config::{load_config, Config};

/// xkcd-bot: xkcd comics in Discord
///
/// Serves the `/xkcd` slash command. The bot token, test guild and status
/// text can also be set with the TOKEN, TEST_SERVER and STATUS environment
/// variables.
#[derive(Parser, Debug)]
#[command(name = "xkcd-bot")]
#[command(version)]
#[command(about = "A Discord bot for the xkcd webcomic", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate configuration and print it without connecting to Discord
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Starting xkcd Bot v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration from the environment".to_string(),
    })?;

    if cli.dry_run {
        print_dry_run(&config);
        return Ok(());
    }

    start_bot(config).await.context("Bot stopped with an error")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("xkcd_bot=info,warn"),
            1 => EnvFilter::new("xkcd_bot=debug,info"),
            2 => EnvFilter::new("xkcd_bot=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn print_dry_run(config: &Config) {
    println!("=== xkcd-bot Dry Run ===\n");

    println!("Discord:");
    println!("  Token: {} characters", config.discord.token.len());
    match config.default_guild_id() {
        Some(guild) => println!("  Commands: guild {}", guild),
        None => println!("  Commands: global"),
    }
    println!("  Status: Watching {}", config.discord.status);

    println!("\nComic site:");
    println!("  Base URL: {}", config.xkcd.base_url);
    println!("  Explain URL: {}", config.xkcd.explain_url);
    println!("  Archive path: {}", config.xkcd.archive_path);
    println!(
        "  Canonical meta position: {}",
        config.xkcd.canonical_meta_position
    );
    println!("  Request timeout: {}s", config.xkcd.request_timeout_secs);
    println!("  User agent: {}", config.user_agent.header_value());

    println!("\nLimits:");
    println!(
        "  Index refresh: every {}h",
        config.index.refresh_interval_hours
    );
    println!("  Max range: {}", config.commands.max_range);
    println!(
        "  Navigators: {} active, {} min idle timeout",
        config.navigator.max_active, config.navigator.idle_timeout_minutes
    );

    println!("\n✓ Configuration is valid");
}
