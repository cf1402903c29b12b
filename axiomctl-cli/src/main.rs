//! axiomctl CLI - create, select, scan with, and delete Axiom fleets
//!
//! Thin front-end over `axiomctl-core`:
//! - Fleet lifecycle (`ls`, `fleet`, `select`, `scan`, `rm`)
//! - Configuration file management (`config`)
//! - Shell completions (`completions`)

use std::path::PathBuf;

use anyhow::{Context, Result};
use axiomctl_core::AxiomConfig;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

use commands::fleet::{CreateArgs, RemoveArgs, ScanArgs, SelectArgs};
use commands::{Operation, OutputOptions};

#[derive(Parser, Debug)]
#[command(
    name = "axiomctl",
    author,
    version,
    about = "Create, select, scan with, and delete Axiom fleets",
    long_about = "Wraps the axiom-* commands with consistent argument handling and error \
                  reporting. Any output an Axiom command writes to stderr is treated as \
                  failure unless failure_policy says otherwise."
)]
struct Cli {
    /// Capture command output instead of streaming it to the terminal.
    /// Captured output is discarded unless --json is given.
    #[arg(long, short = 's', global = true)]
    silent: bool,

    /// Stream command output even when the config sets `silent = true`
    #[arg(long = "no-silent", global = true, conflicts_with = "silent")]
    no_silent: bool,

    /// Print the invocation result (argv, exit code, captured output) as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print the axiom command that would run, without running it
    #[arg(long = "dry-run", global = true)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ~/.axiomctl/config.toml)
    #[arg(long, global = true, env = "AXIOMCTL_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the axiom-* commands (default: search PATH)
    #[arg(long, global = true, env = "AXIOMCTL_BIN_DIR", value_name = "DIR")]
    bin_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List running instances (axiom-ls)
    Ls,
    /// Create a fleet of instances (axiom-fleet)
    Fleet(CreateArgs),
    /// Select instances for subsequent scans (axiom-select)
    Select(SelectArgs),
    /// Run a distributed scan across selected instances (axiom-scan)
    Scan(ScanArgs),
    /// Delete instances (axiom-rm)
    Rm(RemoveArgs),
    /// Manage axiomctl configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let config_path = cli.config.clone().unwrap_or_else(AxiomConfig::config_path);

    let operation = match cli.command {
        Commands::Ls => Operation::List,
        Commands::Fleet(args) => Operation::Create(args),
        Commands::Select(args) => Operation::Select(args),
        Commands::Scan(args) => Operation::Scan(args),
        Commands::Rm(args) => Operation::Remove(args),
        Commands::Config(args) => {
            return config::run_config(args, &config_path, cli.bin_dir.as_deref())
        }
        Commands::Completions(args) => return run_completions(args),
    };

    let mut axiom_config = AxiomConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(dir) = cli.bin_dir {
        axiom_config.bin_dir = Some(dir);
    }

    let output = OutputOptions {
        silent: resolve_silent(cli.silent, cli.no_silent, axiom_config.silent),
        json: cli.json,
        dry_run: cli.dry_run,
    };

    let code = commands::run_operation(operation, &axiom_config, output)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Command-line flags win over the config file's `silent` setting
fn resolve_silent(silent_flag: bool, no_silent_flag: bool, config_silent: bool) -> bool {
    if silent_flag {
        true
    } else if no_silent_flag {
        false
    } else {
        config_silent
    }
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
