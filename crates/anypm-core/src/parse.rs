//! Intent resolvers: one procedure per user-facing verb. Each pre-processes
//! the raw argument list (special flags stripped, manager quirks applied) and
//! hands the rest to the command templater.

use std::path::PathBuf;

use crate::agents::{Agent, Verb};
use crate::command::get_command;
use crate::error::Error;
use crate::utils::exclude;

/// Context threaded from the entry point into the resolvers.
#[derive(Clone, Debug, Default)]
pub struct RunnerContext {
    pub programmatic: bool,
    pub has_lock: bool,
    pub cwd: Option<PathBuf>,
}

/// bun spells the save-dev short flag `-d`; rewrite `-D` before any verb
/// logic sees the list. Other managers pass through untouched.
fn normalize_args(agent: Agent, args: &[String]) -> Vec<String> {
    if agent == Agent::Bun {
        args.iter()
            .map(|a| if a == "-D" { "-d".to_string() } else { a.clone() })
            .collect()
    } else {
        args.to_vec()
    }
}

fn contains(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// install-intent: global, frozen, bare install, or add.
pub fn parse_install(
    agent: Agent,
    args: &[String],
    ctx: Option<&RunnerContext>,
) -> Result<String, Error> {
    let args = normalize_args(agent, args);

    if contains(&args, "-g") {
        return get_command(agent, Verb::GlobalInstall, &exclude(&args, "-g"));
    }

    if contains(&args, "--frozen-if-present") {
        let args = exclude(&args, "--frozen-if-present");
        let verb = if ctx.map(|c| c.has_lock).unwrap_or(false) {
            Verb::FrozenInstall
        } else {
            Verb::Install
        };
        return get_command(agent, verb, &args);
    }

    if contains(&args, "--frozen") {
        return get_command(agent, Verb::FrozenInstall, &exclude(&args, "--frozen"));
    }

    if args.is_empty() || args.iter().all(|a| a.starts_with('-')) {
        return get_command(agent, Verb::Install, &args);
    }

    get_command(agent, Verb::Add, &args)
}

/// run-intent: default the script to `start`; fold `--if-present` into the
/// script token the way each manager's own flag convention expects.
pub fn parse_run(
    agent: Agent,
    args: &[String],
    _ctx: Option<&RunnerContext>,
) -> Result<String, Error> {
    let mut args = normalize_args(agent, args);

    if args.is_empty() {
        args.push("start".to_string());
    }

    if contains(&args, "--if-present") {
        args = exclude(&args, "--if-present");
        if let Some(first) = args.first_mut() {
            *first = format!("--if-present {}", first);
        }
    }

    get_command(agent, Verb::Run, &args)
}

/// upgrade-intent: `-i` selects the interactive variant.
pub fn parse_upgrade(
    agent: Agent,
    args: &[String],
    _ctx: Option<&RunnerContext>,
) -> Result<String, Error> {
    let args = normalize_args(agent, args);
    if contains(&args, "-i") {
        return get_command(agent, Verb::UpgradeInteractive, &exclude(&args, "-i"));
    }
    get_command(agent, Verb::Upgrade, &args)
}

/// uninstall-intent: `-g` selects the global variant.
pub fn parse_uninstall(
    agent: Agent,
    args: &[String],
    _ctx: Option<&RunnerContext>,
) -> Result<String, Error> {
    let args = normalize_args(agent, args);
    if contains(&args, "-g") {
        return get_command(agent, Verb::GlobalUninstall, &exclude(&args, "-g"));
    }
    get_command(agent, Verb::Uninstall, &args)
}

/// execute-intent: args pass through unchanged.
pub fn parse_execute(
    agent: Agent,
    args: &[String],
    _ctx: Option<&RunnerContext>,
) -> Result<String, Error> {
    let args = normalize_args(agent, args);
    get_command(agent, Verb::Execute, &args)
}

/// agent-intent: direct passthrough to the manager's own CLI.
pub fn parse_agent(
    agent: Agent,
    args: &[String],
    _ctx: Option<&RunnerContext>,
) -> Result<String, Error> {
    let args = normalize_args(agent, args);
    get_command(agent, Verb::Agent, &args)
}
