//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::GenerateUseCase;
use crate::config::{Config, Verbosity};
use crate::domain::ports::GenerateEventSink;
use crate::infrastructure::{
    CMakeFileList, ConsoleEventSink, CppEmitter, JsonEventSink, JsonManifestRepository, LocalFs,
};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase =
    GenerateUseCase<LocalFs, JsonManifestRepository, CppEmitter, CMakeFileList>;

/// Create a generate use case configured by `config`
pub fn create_generate_use_case(config: &Config) -> ConcreteGenerateUseCase {
    GenerateUseCase::new(
        LocalFs::new(),
        JsonManifestRepository::new(),
        CppEmitter::new(config.cpp_options()),
        CMakeFileList::new(config.build.variable.clone()),
    )
}

/// Event sink for the requested output mode
pub fn create_event_sink(json: bool, verbosity: Verbosity) -> Arc<dyn GenerateEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(verbosity))
    }
}
