//! Fleet lifecycle coordinator
//!
//! `Axiom` is constructed once, after probing the host for `axiom-ls`. Each
//! lifecycle method builds its argument vector, runs it, and normalizes the
//! result through the single [`Axiom::execute`] path.

use tracing::info;

use crate::command::{CommandBuilder, Programs, ScanRequest};
use crate::config::AxiomConfig;
use crate::error::{AxiomError, Result};
use crate::invoker::{Invocation, Invoker, OutputMode, ProcessInvoker};
use crate::normalize::{normalize, FailurePolicy};
use crate::resolver::{PathResolver, ToolResolver};

/// Handle on an installed Axiom toolkit
pub struct Axiom<I: Invoker = ProcessInvoker> {
    builder: CommandBuilder,
    invoker: I,
    policy: FailurePolicy,
}

impl Axiom<ProcessInvoker> {
    /// Probe `PATH` for Axiom with default program names and policy
    ///
    /// Fails with [`AxiomError::ToolNotInstalled`] when `axiom-ls` is missing.
    pub fn new() -> Result<Self> {
        Self::with_parts(
            &PathResolver::new(),
            ProcessInvoker::new(),
            Programs::default(),
            FailurePolicy::default(),
        )
    }

    /// Build from a loaded configuration, honoring its `bin_dir`
    pub fn from_config(config: &AxiomConfig) -> Result<Self> {
        let (resolver, invoker) = match &config.bin_dir {
            Some(dir) => (PathResolver::in_dir(dir), ProcessInvoker::with_bin_dir(dir)),
            None => (PathResolver::new(), ProcessInvoker::new()),
        };
        Self::with_parts(
            &resolver,
            invoker,
            config.programs.clone(),
            config.failure_policy,
        )
    }
}

impl<I: Invoker> Axiom<I> {
    /// Assemble from explicit collaborators, running the availability probe
    pub fn with_parts(
        resolver: &dyn ToolResolver,
        invoker: I,
        programs: Programs,
        policy: FailurePolicy,
    ) -> Result<Self> {
        let entry = programs.list.as_str();
        match resolver.resolve(entry) {
            Some(path) => info!(program = entry, path = %path.display(), "found axiom"),
            None => return Err(AxiomError::tool_not_installed(entry)),
        }

        Ok(Self {
            builder: CommandBuilder::new(programs),
            invoker,
            policy,
        })
    }

    pub fn builder(&self) -> &CommandBuilder {
        &self.builder
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Show running instances (`axiom-ls`)
    pub fn list(&self, silent: bool) -> Result<Invocation> {
        self.execute(self.builder.list(), silent)
    }

    /// Provision `instances` instances named after `name` (`axiom-fleet`)
    pub fn create(&self, name: &str, instances: u32, silent: bool) -> Result<Invocation> {
        self.execute(self.builder.create(name, instances), silent)
    }

    /// Make matching instances the active selection (`axiom-select`)
    pub fn select(&self, name: &str, wildcard: bool, silent: bool) -> Result<Invocation> {
        self.execute(self.builder.select(name, wildcard), silent)
    }

    /// Distribute a scan across the selected instances (`axiom-scan`)
    pub fn scan(&self, request: &ScanRequest, silent: bool) -> Result<Invocation> {
        let argv = self.builder.scan(request)?;
        self.execute(argv, silent)
    }

    /// Tear down matching instances (`axiom-rm`)
    pub fn delete(&self, name: &str, wildcard: bool, silent: bool) -> Result<Invocation> {
        self.execute(self.builder.delete(name, wildcard), silent)
    }

    /// Run a built argument vector and apply the failure policy
    pub fn execute(&self, argv: Vec<String>, silent: bool) -> Result<Invocation> {
        let invocation = self
            .invoker
            .invoke(&argv, OutputMode::from_silent(silent))?;
        normalize(invocation, self.policy)
    }
}
