//! Agent catalog: the closed set of supported package managers, their
//! per-verb command templates, and the lockfile signature table.

use std::fmt;

/// A supported package manager.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Agent {
    Npm,
    Yarn,
    YarnBerry,
    Pnpm,
    Pnpm6,
    Bun,
}

impl Agent {
    /// All agents, base managers before their version variants.
    pub const ALL: [Agent; 6] = [
        Agent::Npm,
        Agent::Yarn,
        Agent::YarnBerry,
        Agent::Pnpm,
        Agent::Pnpm6,
        Agent::Bun,
    ];

    /// Surface name as written in `packageManager` and user config.
    pub fn name(self) -> &'static str {
        match self {
            Agent::Npm => "npm",
            Agent::Yarn => "yarn",
            Agent::YarnBerry => "yarn@berry",
            Agent::Pnpm => "pnpm",
            Agent::Pnpm6 => "pnpm@6",
            Agent::Bun => "bun",
        }
    }

    /// Parse a surface name back to an agent.
    pub fn from_name(name: &str) -> Option<Agent> {
        Agent::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// Executable looked up on PATH; version variants share the base binary.
    pub fn command_name(self) -> &'static str {
        match self {
            Agent::Npm => "npm",
            Agent::Yarn | Agent::YarnBerry => "yarn",
            Agent::Pnpm | Agent::Pnpm6 => "pnpm",
            Agent::Bun => "bun",
        }
    }

    /// True for version variants (yarn@berry, pnpm@6). The interactive
    /// picker only offers base managers.
    pub fn is_variant(self) -> bool {
        self.name().contains('@')
    }

    /// Installation docs shown when the executable is missing.
    pub fn install_page(self) -> &'static str {
        match self {
            Agent::Npm => "https://docs.npmjs.com/cli/v8/configuring-npm/install",
            Agent::Yarn => "https://classic.yarnpkg.com/en/docs/install",
            Agent::YarnBerry => "https://yarnpkg.com/getting-started/install",
            Agent::Pnpm => "https://pnpm.io/installation",
            Agent::Pnpm6 => "https://pnpm.io/6.x/installation",
            Agent::Bun => "https://bun.sh",
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An abstract user intent, independent of any manager's CLI syntax.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Verb {
    Agent,
    Run,
    Install,
    FrozenInstall,
    GlobalInstall,
    Add,
    Upgrade,
    UpgradeInteractive,
    Execute,
    Uninstall,
    GlobalUninstall,
}

impl Verb {
    pub const ALL: [Verb; 11] = [
        Verb::Agent,
        Verb::Run,
        Verb::Install,
        Verb::FrozenInstall,
        Verb::GlobalInstall,
        Verb::Add,
        Verb::Upgrade,
        Verb::UpgradeInteractive,
        Verb::Execute,
        Verb::Uninstall,
        Verb::GlobalUninstall,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Agent => "agent",
            Verb::Run => "run",
            Verb::Install => "install",
            Verb::FrozenInstall => "frozen-install",
            Verb::GlobalInstall => "global-install",
            Verb::Add => "add",
            Verb::Upgrade => "upgrade",
            Verb::UpgradeInteractive => "upgrade-interactive",
            Verb::Execute => "execute",
            Verb::Uninstall => "uninstall",
            Verb::GlobalUninstall => "global-uninstall",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A manager-specific command template: a literal with a single `{0}`
/// placeholder, or a function that owns its own formatting.
#[derive(Clone, Copy)]
pub enum CommandTemplate {
    Literal(&'static str),
    Computed(fn(&[String]) -> String),
}

/// npm-style run: the script name is positional and anything after it needs
/// a `--` separator before it reaches the script.
fn npm_style_run(bin: &str, args: &[String]) -> String {
    match args.split_first() {
        None => format!("{} run", bin),
        Some((script, rest)) if rest.is_empty() => format!("{} run {}", bin, script),
        Some((script, rest)) => format!("{} run {} -- {}", bin, script, rest.join(" ")),
    }
}

fn npm_run(args: &[String]) -> String {
    npm_style_run("npm", args)
}

fn pnpm6_run(args: &[String]) -> String {
    npm_style_run("pnpm", args)
}

fn npm_template(verb: Verb) -> Option<CommandTemplate> {
    use CommandTemplate::{Computed, Literal};
    let t = match verb {
        Verb::Agent => Literal("npm {0}"),
        Verb::Run => Computed(npm_run),
        Verb::Install => Literal("npm i {0}"),
        Verb::FrozenInstall => Literal("npm ci"),
        Verb::GlobalInstall => Literal("npm i -g {0}"),
        Verb::Add => Literal("npm i {0}"),
        Verb::Upgrade => Literal("npm update {0}"),
        // npm has no interactive upgrade
        Verb::UpgradeInteractive => return None,
        Verb::Execute => Literal("npx {0}"),
        Verb::Uninstall => Literal("npm uninstall {0}"),
        Verb::GlobalUninstall => Literal("npm uninstall -g {0}"),
    };
    Some(t)
}

fn yarn_template(verb: Verb) -> Option<CommandTemplate> {
    use CommandTemplate::Literal;
    let t = match verb {
        Verb::Agent => Literal("yarn {0}"),
        Verb::Run => Literal("yarn run {0}"),
        Verb::Install => Literal("yarn install {0}"),
        Verb::FrozenInstall => Literal("yarn install --frozen-lockfile"),
        Verb::GlobalInstall => Literal("yarn global add {0}"),
        Verb::Add => Literal("yarn add {0}"),
        Verb::Upgrade => Literal("yarn upgrade {0}"),
        Verb::UpgradeInteractive => Literal("yarn upgrade-interactive {0}"),
        Verb::Execute => Literal("npx {0}"),
        Verb::Uninstall => Literal("yarn remove {0}"),
        Verb::GlobalUninstall => Literal("yarn global remove {0}"),
    };
    Some(t)
}

/// yarn@berry: explicit overrides on top of classic yarn. Yarn 2+ removed
/// global installs (yarnpkg/berry#821), so the global verbs delegate to npm.
fn yarn_berry_template(verb: Verb) -> Option<CommandTemplate> {
    use CommandTemplate::Literal;
    match verb {
        Verb::FrozenInstall => Some(Literal("yarn install --immutable")),
        Verb::Upgrade => Some(Literal("yarn up {0}")),
        Verb::UpgradeInteractive => Some(Literal("yarn up -i {0}")),
        Verb::Execute => Some(Literal("yarn dlx {0}")),
        Verb::GlobalInstall => Some(Literal("npm i -g {0}")),
        Verb::GlobalUninstall => Some(Literal("npm uninstall -g {0}")),
        other => yarn_template(other),
    }
}

fn pnpm_template(verb: Verb) -> Option<CommandTemplate> {
    use CommandTemplate::Literal;
    let t = match verb {
        Verb::Agent => Literal("pnpm {0}"),
        Verb::Run => Literal("pnpm run {0}"),
        Verb::Install => Literal("pnpm i {0}"),
        Verb::FrozenInstall => Literal("pnpm i --frozen-lockfile"),
        Verb::GlobalInstall => Literal("pnpm add -g {0}"),
        Verb::Add => Literal("pnpm add {0}"),
        Verb::Upgrade => Literal("pnpm update {0}"),
        Verb::UpgradeInteractive => Literal("pnpm update -i {0}"),
        Verb::Execute => Literal("pnpm dlx {0}"),
        Verb::Uninstall => Literal("pnpm remove {0}"),
        Verb::GlobalUninstall => Literal("pnpm remove --global {0}"),
    };
    Some(t)
}

/// pnpm 6.x and below required the script name positionally, so only `run`
/// differs from modern pnpm.
fn pnpm6_template(verb: Verb) -> Option<CommandTemplate> {
    match verb {
        Verb::Run => Some(CommandTemplate::Computed(pnpm6_run)),
        other => pnpm_template(other),
    }
}

fn bun_template(verb: Verb) -> Option<CommandTemplate> {
    use CommandTemplate::Literal;
    let t = match verb {
        Verb::Agent => Literal("bun {0}"),
        Verb::Run => Literal("bun run {0}"),
        Verb::Install => Literal("bun install {0}"),
        // bun has no strict frozen flag; --no-save is the closest it offers
        Verb::FrozenInstall => Literal("bun install --no-save"),
        Verb::GlobalInstall => Literal("bun add -g {0}"),
        Verb::Add => Literal("bun add {0}"),
        Verb::Upgrade => Literal("bun update {0}"),
        Verb::UpgradeInteractive => Literal("bun update {0}"),
        Verb::Execute => Literal("bunx {0}"),
        Verb::Uninstall => Literal("bun remove {0}"),
        Verb::GlobalUninstall => Literal("bun remove -g {0}"),
    };
    Some(t)
}

/// Template for a (manager, verb) pair; `None` means the manager has no
/// equivalent command.
pub fn template(agent: Agent, verb: Verb) -> Option<CommandTemplate> {
    match agent {
        Agent::Npm => npm_template(verb),
        Agent::Yarn => yarn_template(verb),
        Agent::YarnBerry => yarn_berry_template(verb),
        Agent::Pnpm => pnpm_template(verb),
        Agent::Pnpm6 => pnpm6_template(verb),
        Agent::Bun => bun_template(verb),
    }
}

/// Lockfile name -> owning agent. Array order is the precedence order when a
/// directory improbably contains several lockfiles; mtime never matters.
pub const LOCKS: [(&str, Agent); 5] = [
    ("bun.lockb", Agent::Bun),
    ("pnpm-lock.yaml", Agent::Pnpm),
    ("yarn.lock", Agent::Yarn),
    ("package-lock.json", Agent::Npm),
    ("npm-shrinkwrap.json", Agent::Npm),
];

/// Agent owning the given lockfile name, if any.
pub fn lock_agent(file_name: &str) -> Option<Agent> {
    LOCKS
        .iter()
        .find(|(name, _)| *name == file_name)
        .map(|(_, agent)| *agent)
}
