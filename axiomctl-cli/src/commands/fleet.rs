//! Fleet lifecycle commands
//!
//! Commands: ls, fleet, select, scan, rm

use std::path::PathBuf;

use anyhow::{Context, Result};
use axiomctl_core::words::join_quoted;
use axiomctl_core::{Axiom, AxiomConfig, CommandBuilder, Invocation, ScanRequest};
use clap::Parser;
use tracing::debug;

// === Arg Structs ===

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Fleet name; instances are numbered after it (foo01, foo02, ...)
    pub name: String,

    /// Number of instances to provision
    pub instances: u32,
}

#[derive(Parser, Debug)]
pub struct SelectArgs {
    /// Instance or fleet name to select
    pub name: String,

    /// Select every instance whose name starts with NAME
    #[arg(long, short)]
    pub wildcard: bool,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Input file of targets
    pub input: PathBuf,

    /// Scan module to run (e.g. amass, nuclei, ffuf)
    pub module: String,

    /// Wordlist path on the instances
    #[arg(long = "wordlist", value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Where to write merged results
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Maximum scan runtime, forwarded to axiom-scan
    #[arg(long = "max-runtime", value_name = "N")]
    pub max_runtime: Option<u64>,

    /// Extra arguments appended verbatim (shell quoting respected)
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub raw: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Instance or fleet name to delete
    pub name: String,

    /// Delete the numbered instances of fleet NAME (NAME0*)
    #[arg(long, short)]
    pub wildcard: bool,
}

/// How results are surfaced to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Capture child output instead of streaming it
    pub silent: bool,
    /// Print the invocation result as JSON
    pub json: bool,
    /// Print the command instead of running it
    pub dry_run: bool,
}

/// One Axiom lifecycle operation
#[derive(Debug)]
pub enum Operation {
    List,
    Create(CreateArgs),
    Select(SelectArgs),
    Scan(ScanArgs),
    Remove(RemoveArgs),
}

impl Operation {
    fn scan_request(args: &ScanArgs) -> ScanRequest {
        ScanRequest {
            input: args.input.clone(),
            module: args.module.clone(),
            wordlist: args.wordlist.clone(),
            output_path: args.output.clone(),
            max_runtime: args.max_runtime,
            raw: args.raw.clone(),
        }
    }

    fn argv(&self, builder: &CommandBuilder) -> Result<Vec<String>> {
        Ok(match self {
            Self::List => builder.list(),
            Self::Create(args) => builder.create(&args.name, args.instances),
            Self::Select(args) => builder.select(&args.name, args.wildcard),
            Self::Scan(args) => builder.scan(&Self::scan_request(args))?,
            Self::Remove(args) => builder.delete(&args.name, args.wildcard),
        })
    }

    fn run(&self, axiom: &Axiom, silent: bool) -> axiomctl_core::Result<Invocation> {
        match self {
            Self::List => axiom.list(silent),
            Self::Create(args) => axiom.create(&args.name, args.instances, silent),
            Self::Select(args) => axiom.select(&args.name, args.wildcard, silent),
            Self::Scan(args) => axiom.scan(&Self::scan_request(args), silent),
            Self::Remove(args) => axiom.delete(&args.name, args.wildcard, silent),
        }
    }
}

// === Command Implementations ===

/// Run `operation` and return the exit code the CLI should finish with
pub fn run_operation(operation: Operation, config: &AxiomConfig, output: OutputOptions) -> Result<i32> {
    let builder = CommandBuilder::new(config.programs.clone());
    let argv = operation.argv(&builder)?;

    if output.dry_run {
        println!("{}", join_quoted(&argv));
        return Ok(0);
    }

    let axiom = Axiom::from_config(config)?;
    let silent = output.silent || output.json;
    debug!(?argv, silent, policy = ?axiom.policy(), "running axiom command");

    let invocation = operation
        .run(&axiom, silent)
        .with_context(|| format!("{} failed", argv[0]))?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&invocation)?);
    }

    Ok(match invocation.exit_code {
        code if code < 0 => 1,
        code => code,
    })
}
