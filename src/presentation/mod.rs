//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Running one invocation end to end
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `runner` - Config resolution, asset list, output lock

pub mod cli;
pub mod factory;
pub mod runner;

pub use cli::Cli;
pub use factory::{create_event_sink, create_generate_use_case};
pub use runner::run;
