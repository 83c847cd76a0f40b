//! Optional user settings from ~/.anypmrc (key=value lines). Read once by
//! the entry point and threaded through; the core never writes it.

use std::env;
use std::path::{Path, PathBuf};

use crate::agents::Agent;

/// The configured fallback when detection finds nothing: a concrete agent,
/// or an interactive prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefaultAgent {
    Agent(Agent),
    Prompt,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub default_agent: DefaultAgent,
    pub global_agent: Agent,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_agent: DefaultAgent::Prompt,
            global_agent: Agent::Npm,
        }
    }
}

impl Config {
    /// Resolve the default agent for a session. A `prompt` default cannot
    /// block programmatic or CI callers, so it short-circuits to npm there;
    /// `None` means the caller should actually prompt.
    pub fn default_agent_for(&self, programmatic: bool) -> Option<Agent> {
        match self.default_agent {
            DefaultAgent::Agent(agent) => Some(agent),
            DefaultAgent::Prompt if programmatic || in_ci() => Some(Agent::Npm),
            DefaultAgent::Prompt => None,
        }
    }
}

/// Whether we are running under a continuous-integration environment.
pub fn in_ci() -> bool {
    env::var("CI").map(|v| !v.is_empty()).unwrap_or(false)
}

/// Settings file path: ANYPM_CONFIG_FILE overrides ~/.anypmrc.
pub fn rc_path() -> PathBuf {
    if let Ok(path) = env::var("ANYPM_CONFIG_FILE") {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".anypmrc")
}

/// Parse a settings file. Missing file, unreadable lines, and unrecognized
/// values all resolve to the defaults.
pub fn load_config_from(path: &Path) -> Config {
    let mut config = Config::default();
    let Ok(raw) = std::fs::read_to_string(path) else {
        return config;
    };
    for raw_line in raw.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key == "defaultAgent" {
            config.default_agent = if value == "prompt" {
                DefaultAgent::Prompt
            } else if let Some(agent) = Agent::from_name(value) {
                DefaultAgent::Agent(agent)
            } else {
                continue;
            };
        } else if key == "globalAgent" {
            if let Some(agent) = Agent::from_name(value) {
                config.global_agent = agent;
            }
        }
    }
    config
}

/// Load settings from the standard location.
pub fn load_config() -> Config {
    load_config_from(&rc_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = load_config_from(Path::new("/nonexistent/.anypmrc"));
        assert_eq!(config.default_agent, DefaultAgent::Prompt);
        assert_eq!(config.global_agent, Agent::Npm);
    }

    #[test]
    fn rc_values_are_parsed() {
        let td = tempfile::tempdir().expect("tmp");
        let rc = td.path().join(".anypmrc");
        std::fs::write(&rc, "# settings\ndefaultAgent=pnpm\nglobalAgent=bun\n").expect("write");

        let config = load_config_from(&rc);
        assert_eq!(config.default_agent, DefaultAgent::Agent(Agent::Pnpm));
        assert_eq!(config.global_agent, Agent::Bun);
    }

    #[test]
    fn unknown_values_keep_defaults() {
        let td = tempfile::tempdir().expect("tmp");
        let rc = td.path().join(".anypmrc");
        std::fs::write(&rc, "defaultAgent=cargo\nglobalAgent=maven\n").expect("write");

        let config = load_config_from(&rc);
        assert_eq!(config.default_agent, DefaultAgent::Prompt);
        assert_eq!(config.global_agent, Agent::Npm);
    }

    #[test]
    fn variant_names_are_accepted() {
        let td = tempfile::tempdir().expect("tmp");
        let rc = td.path().join(".anypmrc");
        std::fs::write(&rc, "defaultAgent=yarn@berry\n").expect("write");

        let config = load_config_from(&rc);
        assert_eq!(config.default_agent, DefaultAgent::Agent(Agent::YarnBerry));
    }

    #[test]
    fn programmatic_prompt_default_resolves_to_npm() {
        let config = Config::default();
        assert_eq!(config.default_agent_for(true), Some(Agent::Npm));
    }
}
