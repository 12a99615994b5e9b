mod collectors;
mod config;
mod error;
mod models;
mod util;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use collectors::filesystem::{read_filesystems, CollectOptions};
use collectors::runner::SystemRunner;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fsinv", about = "Mounted filesystem inventory for node agents", version)]
struct Cli {
    /// Print a human-readable report instead of JSON
    #[arg(long)]
    report: bool,

    /// Print JSON on a single line
    #[arg(long, conflicts_with = "report")]
    compact: bool,

    /// Per-command timeout in seconds (overrides the config file)
    #[arg(long)]
    timeout: Option<u64>,

    /// Skip UUID / label collection (lsblk, blkid)
    #[arg(long)]
    no_identity: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Log source selection and skipped lines to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "fsinv", &mut io::stdout());
        return Ok(());
    }

    let mut cfg = config::Config::load();
    if let Some(secs) = cli.timeout {
        cfg.general.command_timeout_secs = secs;
    }
    if cli.no_identity {
        cfg.sources.identity = false;
    }

    if cli.config {
        return run_print_config(&cfg);
    }

    let opts = CollectOptions::from(&cfg);
    let set = read_filesystems(&SystemRunner, &opts);

    if cli.report {
        print!("{}", util::report::generate(&set));
        return Ok(());
    }
    run_json(&set, cli.compact)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run_json(set: &models::filesystem::FilesystemSet, compact: bool) -> Result<()> {
    use serde_json::json;

    let snapshot = json!({
        "collected_at": chrono::Local::now().to_rfc3339(),
        "filesystem":   set,
    });

    let text = if compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{}", text);
    Ok(())
}

fn run_print_config(cfg: &config::Config) -> Result<()> {
    let path = config::Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  command_timeout_secs = {}", cfg.general.command_timeout_secs);
    println!();
    println!("[sources]");
    println!("  proc_mounts = {}", cfg.sources.proc_mounts.display());
    println!("  lsblk_path  = {}", cfg.sources.lsblk_path.display());
    println!("  identity    = {}", cfg.sources.identity);
    Ok(())
}
