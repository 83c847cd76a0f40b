//! Thin CLI layer: parse args, styled output, and call into anypm-core.
//! Crash-proof: panic caught and reported; all errors return Result.

mod runner;

use clap::{Arg, ArgAction, Command};
use colored::Colorize;
use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

use runner::{Intent, RunOptions};

// ---- UI helpers (no-op when stdout isn't a TTY) ----

fn use_color() -> bool {
    std::io::stdout().is_terminal()
        && env::var("NO_COLOR").unwrap_or_default().is_empty()
}

fn error(msg: &str) {
    if use_color() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{}", msg);
    }
}

pub(crate) fn warning(msg: &str) {
    if use_color() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{}", msg);
    }
}

pub(crate) fn dim(msg: &str) {
    if use_color() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

fn args_arg(help: &'static str) -> Arg {
    Arg::new("args")
        .num_args(0..)
        .allow_hyphen_values(true)
        .trailing_var_arg(true)
        .help(help)
}

fn run() -> Result<i32, String> {
    let matches = Command::new("anypm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Use the right package manager — npm, yarn, pnpm, and bun behind one CLI")
        .after_help(
            "Examples:\n  anypm i lodash\n  anypm i -D typescript\n  anypm r dev --host\n  anypm up -i\n  anypm x vitest\n  anypm a config list\n\nAppend `?` to any invocation to print the command instead of running it.",
        )
        .arg(
            Arg::new("dir")
                .short('C')
                .long("dir")
                .value_name("DIR")
                .global(true)
                .help("Run as if started in DIR"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print the resolved command instead of running it"),
        )
        .subcommand(
            Command::new("install")
                .visible_alias("i")
                .about("Install dependencies, or add the named packages")
                .arg(args_arg(
                    "Packages and flags (-g global, --frozen, --frozen-if-present)",
                )),
        )
        .subcommand(
            Command::new("run")
                .visible_alias("r")
                .about("Run a package.json script (`run -` repeats the last one)")
                .arg(args_arg("Script name and its arguments")),
        )
        .subcommand(
            Command::new("upgrade")
                .visible_alias("up")
                .about("Upgrade dependencies (-i interactive where supported)")
                .arg(args_arg("Packages and flags")),
        )
        .subcommand(
            Command::new("uninstall")
                .visible_alias("un")
                .about("Remove packages (-g for global)")
                .arg(args_arg("Packages and flags")),
        )
        .subcommand(
            Command::new("exec")
                .visible_alias("x")
                .about("Fetch and execute a package binary")
                .arg(args_arg("Binary name and its arguments")),
        )
        .subcommand(
            Command::new("agent")
                .visible_alias("a")
                .about("Pass arguments straight to the resolved manager")
                .arg(args_arg("Arguments for the manager's own CLI")),
        )
        .get_matches();

    let mut cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if let Some(dir) = matches.get_one::<String>("dir") {
        cwd = cwd.join(dir);
    }
    let dry_run = matches.get_flag("dry-run");

    let (intent, sub) = match matches.subcommand() {
        Some(("install", m)) => (Intent::Install, m),
        Some(("run", m)) => (Intent::Run, m),
        Some(("upgrade", m)) => (Intent::Upgrade, m),
        Some(("uninstall", m)) => (Intent::Uninstall, m),
        Some(("exec", m)) => (Intent::Execute, m),
        Some(("agent", m)) => (Intent::Agent, m),
        _ => {
            if use_color() {
                println!("{}", "anypm".bright_cyan().bold());
                dim("Use the right package manager — npm, yarn, pnpm, and bun behind one CLI.");
            } else {
                println!("anypm — use the right package manager");
            }
            dim("\nRun `anypm --help` for details.");
            return Ok(0);
        }
    };

    let args: Vec<String> = sub
        .get_many::<String>("args")
        .map(|it| it.cloned().collect())
        .unwrap_or_default();

    runner::run_intent(intent, args, &RunOptions { cwd, dry_run })
}

fn main() {
    if !use_color() {
        colored::control::set_override(false);
    }

    let code = match std::panic::catch_unwind(run) {
        Ok(Ok(code)) => code,
        Ok(Err(e)) => {
            error(&e);
            1
        }
        Err(_) => {
            error("An unexpected error occurred. Please report this issue.");
            1
        }
    };
    std::process::exit(code);
}
