//! Agent detection: nearest lockfile plus the manifest `packageManager`
//! field, with the manifest taking precedence. Pure filesystem reads; any
//! remediation (prompting, installing) is the caller's business.

use std::path::{Path, PathBuf};

use crate::agents::{self, Agent};
use crate::utils::log_error;

#[derive(Clone, Debug, Default)]
pub struct DetectOptions {
    /// Directory to start the upward walk from; defaults to the process cwd.
    pub cwd: Option<PathBuf>,
    /// Library callers set this; suppresses warnings.
    pub programmatic: bool,
}

/// Outcome of detection. `version` is the manifest-declared version when one
/// was present ("berry" sentinel for modern yarn, whose `packageManager`
/// number does not reflect the package's own versioning).
#[derive(Clone, Debug, Default)]
pub struct Detection {
    pub agent: Option<Agent>,
    pub version: Option<String>,
}

/// Walk ancestors of `from` until some directory contains one of `names`;
/// within a directory the slice order decides. Bounded by the fs root.
fn find_up(from: &Path, names: &[&str]) -> Option<PathBuf> {
    let mut dir = Some(from);
    while let Some(current) = dir {
        for name in names {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        dir = current.parent();
    }
    None
}

/// Major component of a version string. Full semver parses strictly; partial
/// declarations like "7" or "7.1" fall back to the leading integer.
fn parse_major(version: &str) -> Option<u64> {
    match semver::Version::parse(version) {
        Ok(v) => Some(v.major),
        Err(_) => version.split('.').next().and_then(|s| s.trim().parse().ok()),
    }
}

/// Read `packageManager: "name@version"` from a manifest. Malformed JSON is
/// swallowed (detection falls through to the lockfile); an unrecognized name
/// is warned about unless running programmatically.
fn agent_from_manifest(path: &Path, programmatic: bool) -> (Option<Agent>, Option<String>) {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return (None, None);
    };
    let Ok(manifest) = serde_json::from_str::<serde_json::Value>(&raw) else {
        return (None, None);
    };
    let Some(field) = manifest.get("packageManager").and_then(|v| v.as_str()) else {
        return (None, None);
    };

    let spec = field.strip_prefix('^').unwrap_or(field);
    let (name, version) = match spec.split_once('@') {
        Some((name, version)) if !version.is_empty() => (name, Some(version.to_string())),
        Some((name, _)) => (name, None),
        None => (spec, None),
    };
    let major = version.as_deref().and_then(parse_major);

    if name == "yarn" && major.map_or(false, |m| m > 1) {
        return (Some(Agent::YarnBerry), Some("berry".to_string()));
    }
    if name == "pnpm" && major.map_or(false, |m| m < 7) {
        return (Some(Agent::Pnpm6), version);
    }
    if let Some(agent) = Agent::from_name(name) {
        return (Some(agent), version);
    }
    if !programmatic {
        log_error(&format!("[anypm] Unknown packageManager: {}", field));
    }
    (None, version)
}

/// Determine which agent governs the directory. Order: nearest lockfile
/// locates the project root; the manifest `packageManager` field overrides;
/// otherwise the lockfile name decides via the signature table.
pub fn detect(options: &DetectOptions) -> Detection {
    let cwd = options
        .cwd
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let lock_names: Vec<&str> = agents::LOCKS.iter().map(|(name, _)| *name).collect();
    let lock_path = find_up(&cwd, &lock_names);

    let manifest_path = match &lock_path {
        Some(lock) => lock.parent().map(|dir| dir.join("package.json")),
        None => find_up(&cwd, &["package.json"]),
    };

    let (mut agent, mut version) = (None, None);
    if let Some(manifest) = manifest_path.filter(|p| p.is_file()) {
        let (found, declared) = agent_from_manifest(&manifest, options.programmatic);
        agent = found;
        version = declared;
    }

    if agent.is_none() {
        if let Some(lock) = &lock_path {
            agent = lock
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(agents::lock_agent);
        }
    }

    Detection { agent, version }
}
