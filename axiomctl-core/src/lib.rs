//! Build and run Axiom fleet commands
//!
//! ```no_run
//! use axiomctl_core::{Axiom, ScanRequest};
//!
//! # fn main() -> axiomctl_core::Result<()> {
//! let axiom = Axiom::new()?;
//! axiom.create("foo", 3, false)?;
//! axiom.select("foo", true, false)?;
//! axiom.scan(&ScanRequest::new("/home/ubuntu/targets.txt", "amass"), false)?;
//! axiom.delete("foo", true, false)?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod fleet;
pub mod invoker;
pub mod normalize;
pub mod resolver;
pub mod words;

pub use command::{CommandBuilder, Programs, ScanRequest};
pub use config::AxiomConfig;
pub use error::{AxiomError, Result};
pub use fleet::Axiom;
pub use invoker::{Invocation, InvokeError, Invoker, MockInvoker, MockResponse, OutputMode, ProcessInvoker};
pub use normalize::{normalize, FailurePolicy};
pub use resolver::{PathResolver, StaticResolver, ToolResolver};
