//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::FsError;
use crate::error::{BakeError, BakeResult};

use super::types::{Config, Verbosity};

/// Config file looked up in the asset directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "assetbake.toml";

pub const ENV_VERBOSITY: &str = "ASSETBAKE_VERBOSITY";
pub const ENV_NAMESPACE: &str = "ASSETBAKE_NAMESPACE";
pub const ENV_SYMBOL_PREFIX: &str = "ASSETBAKE_SYMBOL_PREFIX";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BakeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BakeError::FileAccess {
        path: path.to_path_buf(),
        source: FsError::from(e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BakeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration for a run
///
/// An explicit file must exist. Otherwise `<asset_dir>/assetbake.toml` is
/// used when present, falling back to defaults. Environment overrides are
/// applied on top and the result is validated.
pub fn resolve(
    explicit: Option<&Path>,
    asset_dir: &Path,
) -> BakeResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(asset_dir.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    };

    let (config, warnings, label) = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            (config, warnings, path)
        }
        None => (Config::default(), Vec::new(), PathBuf::from("<defaults>")),
    };

    let config = with_env_overrides(config);
    config.validate(&label)?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (ASSETBAKE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(verbosity) = lookup(ENV_VERBOSITY) {
        config.output.verbosity = Verbosity::parse_lenient(&verbosity);
    }

    if let Some(namespace) = lookup(ENV_NAMESPACE) {
        config.cpp.namespace = namespace.trim().to_string();
    }

    if let Some(prefix) = lookup(ENV_SYMBOL_PREFIX) {
        config.naming.symbol_prefix = prefix.trim().to_string();
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "naming",
        "filler",
        "symbol_prefix",
        "cpp",
        "namespace",
        "repository_class",
        "base_class",
        "base_header",
        "lookup_function",
        "values_per_line",
        "build",
        "variable",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
