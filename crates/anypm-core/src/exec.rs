//! Process-executor collaborators: run a rendered command line through the
//! system shell with inherited stdio, and install a missing agent globally.

use std::path::Path;
use std::process::ExitStatus;

use crate::agents::Agent;
use crate::error::Error;

/// Run a rendered command string in `cwd`. The string goes through the
/// user's shell so quoting in the rendered command is honored.
pub fn run_command(command: &str, cwd: &Path) -> Result<ExitStatus, Error> {
    #[cfg(unix)]
    let (shell, shell_arg) = (
        std::env::var("SHELL").unwrap_or_else(|_| "sh".to_string()),
        "-c",
    );

    #[cfg(windows)]
    let (shell, shell_arg) = ("cmd".to_string(), "/c");

    std::process::Command::new(&shell)
        .arg(shell_arg)
        .arg(command)
        .current_dir(cwd)
        .status()
        .map_err(|e| Error::Exec {
            command: command.to_string(),
            source: e.to_string(),
        })
}

/// Globally install an agent through npm, the fallback manager that is
/// assumed present. Carries the manifest-declared version when known.
pub fn install_agent_globally(
    agent: Agent,
    version: Option<&str>,
    cwd: &Path,
) -> Result<ExitStatus, Error> {
    let spec = match version {
        Some(v) => format!("{}@{}", agent.command_name(), v),
        None => agent.command_name().to_string(),
    };
    run_command(&format!("npm i -g {}", spec), cwd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn run_command_propagates_the_exit_status() {
        let td = tempfile::tempdir().expect("tmp");
        let ok = run_command("true", td.path()).expect("spawn");
        assert!(ok.success());
        let bad = run_command("exit 3", td.path()).expect("spawn");
        assert_eq!(bad.code(), Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn run_command_honors_the_working_directory() {
        let td = tempfile::tempdir().expect("tmp");
        std::fs::write(td.path().join("marker"), "x").expect("write");
        let status = run_command("test -f marker", td.path()).expect("spawn");
        assert!(status.success());
    }
}
