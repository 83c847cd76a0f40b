//! Orchestration glue: pick the agent (detection, configured default, or an
//! interactive picker), remediate a missing executable, then render the
//! intent and hand the command to the shell.

use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Select};

use anypm_core::{
    cmd_exists, detect, in_ci, init_data_dir, install_agent_globally, load_config, load_storage,
    log, parse_agent, parse_execute, parse_install, parse_run, parse_uninstall, parse_upgrade,
    run_command, save_storage, volta_prefix, Agent, DetectOptions, Error, RunnerContext,
};

/// Which user-facing verb the CLI was invoked with.
#[derive(Clone, Copy, Debug)]
pub enum Intent {
    Install,
    Run,
    Upgrade,
    Uninstall,
    Execute,
    Agent,
}

pub struct RunOptions {
    pub cwd: PathBuf,
    pub dry_run: bool,
}

/// Trailing `?` prints the resolved command instead of running it.
const DEBUG_SIGN: &str = "?";

pub fn run_intent(intent: Intent, mut args: Vec<String>, opts: &RunOptions) -> Result<i32, String> {
    init_data_dir().map_err(|e| format!("Failed to initialize data dir: {}", e))?;

    let dry_run = opts.dry_run || args.iter().any(|a| a == DEBUG_SIGN);
    args.retain(|a| a != DEBUG_SIGN);

    let config = load_config();

    // -g anywhere routes to the configured global agent, skipping detection.
    let is_global = args.iter().any(|a| a == "-g");

    let (agent, version, detected) = if is_global {
        (config.global_agent, None, false)
    } else {
        let detection = detect(&DetectOptions {
            cwd: Some(opts.cwd.clone()),
            programmatic: false,
        });
        match detection.agent {
            Some(agent) => (agent, detection.version, true),
            None => match config.default_agent_for(false) {
                Some(agent) => (agent, None, false),
                None => match prompt_agent()? {
                    Some(agent) => (agent, None, false),
                    // picker dismissed; nothing to do
                    None => return Ok(0),
                },
            },
        }
    };

    if detected && !dry_run && !cmd_exists(agent.command_name()) {
        remediate_missing(agent, version.as_deref(), &opts.cwd)?;
    }

    let ctx = RunnerContext {
        programmatic: false,
        has_lock: detected,
        cwd: Some(opts.cwd.clone()),
    };

    // `run -` repeats the last stored script.
    let mut storage = None;
    if matches!(intent, Intent::Run) {
        let loaded = load_storage();
        if args.first().map(|a| a == "-").unwrap_or(false) {
            match &loaded.last_run_command {
                Some(last) => args[0] = last.clone(),
                None => return Err("No previous run command stored.".to_string()),
            }
        }
        storage = Some(loaded);
    }

    let rendered = match intent {
        Intent::Install => parse_install(agent, &args, Some(&ctx)),
        Intent::Run => parse_run(agent, &args, Some(&ctx)),
        Intent::Upgrade => parse_upgrade(agent, &args, Some(&ctx)),
        Intent::Uninstall => parse_uninstall(agent, &args, Some(&ctx)),
        Intent::Execute => parse_execute(agent, &args, Some(&ctx)),
        Intent::Agent => parse_agent(agent, &args, Some(&ctx)),
    }
    .map_err(|e| e.to_string())?;

    if let Some(mut storage) = storage {
        let script = args.first().cloned().unwrap_or_else(|| "start".to_string());
        storage.last_run_command = Some(script);
        let _ = save_storage(&storage);
    }

    let command = match volta_prefix() {
        Some(prefix) => format!("{} {}", prefix, rendered),
        None => rendered,
    };

    if dry_run {
        println!("{}", command);
        return Ok(0);
    }

    let status = run_command(&command, &opts.cwd).map_err(|e| e.to_string())?;
    Ok(status.code().unwrap_or(1))
}

/// No lockfile, no manifest, no configured default: ask.
fn prompt_agent() -> Result<Option<Agent>, String> {
    let choices: Vec<Agent> = Agent::ALL
        .iter()
        .copied()
        .filter(|a| !a.is_variant())
        .collect();
    let names: Vec<&str> = choices.iter().map(|a| a.name()).collect();
    let picked = Select::new()
        .with_prompt("Choose the agent")
        .items(&names)
        .default(0)
        .interact_opt()
        .map_err(|e| format!("Prompt failed: {}", e))?;
    Ok(picked.map(|i| choices[i]))
}

/// The detected manager's binary is not on PATH. CI fails fast; otherwise
/// offer a global install through npm, and abort the run if declined.
fn remediate_missing(agent: Agent, version: Option<&str>, cwd: &Path) -> Result<(), String> {
    crate::warning(&format!(
        "Detected {} but it doesn't seem to be installed.",
        agent
    ));

    if in_ci() {
        return Err(Error::MissingExecutable { agent }.to_string());
    }

    crate::dim(&format!("Install docs: {}", agent.install_page()));
    let install = Confirm::new()
        .with_prompt(format!("Would you like to globally install {}?", agent))
        .default(true)
        .interact()
        .map_err(|e| format!("Prompt failed: {}", e))?;
    if !install {
        return Err(Error::Aborted.to_string());
    }

    log(&format!("Installing {} globally via npm", agent));
    let status = install_agent_globally(agent, version, cwd).map_err(|e| e.to_string())?;
    if !status.success() {
        return Err(format!("Failed to install {} globally.", agent));
    }
    Ok(())
}
