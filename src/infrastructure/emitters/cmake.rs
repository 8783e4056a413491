//! CMake file list
//!
//! A single `set(<variable> "..." ...)` command naming every generated
//! source, meant to be `include()`d by the host project.

use std::fmt::Write as _;
use std::path::Path;

use crate::domain::entities::{GeneratedSource, GeneratedSourceSet};
use crate::domain::ports::BuildFileList;

pub const DEFAULT_VARIABLE: &str = "ASSET_SOURCES";

#[derive(Debug, Clone)]
pub struct CMakeFileList {
    variable: String,
}

impl CMakeFileList {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for CMakeFileList {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLE)
    }
}

impl BuildFileList for CMakeFileList {
    fn render(&self, sources: &GeneratedSourceSet, path: &Path) -> GeneratedSource {
        let mut out = format!("set({}", self.variable);
        for source in sources.paths() {
            let _ = write!(out, " \"{}\"", cmake_quote(source));
        }
        out.push_str(")\n");
        GeneratedSource::new(path, out)
    }
}

/// Path with forward slashes, escaped for a CMake quoted argument
fn cmake_quote(path: &Path) -> String {
    let mut out = String::new();
    for c in path.to_string_lossy().chars() {
        match c {
            '\\' => out.push('/'),
            '"' | '$' | ';' => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
