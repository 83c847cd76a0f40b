//! Structured errors surfaced by the core. The CLI maps these to styled
//! messages; programmatic callers get the values themselves.

use std::fmt;

use crate::agents::{Agent, Verb};

#[derive(Debug, Clone)]
pub enum Error {
    /// The manager has no template for the requested verb.
    UnsupportedVerb { agent: Agent, verb: Verb },
    /// The detected manager's binary is not resolvable on PATH.
    MissingExecutable { agent: Agent },
    /// The user declined a remediation step; the whole operation stops.
    Aborted,
    /// A spawned command could not be run.
    Exec { command: String, source: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedVerb { agent, verb } => {
                write!(f, "Command \"{}\" is not supported by agent \"{}\"", verb, agent)
            }
            Error::MissingExecutable { agent } => {
                write!(
                    f,
                    "Detected {} but it doesn't seem to be installed (see {})",
                    agent,
                    agent.install_page()
                )
            }
            Error::Aborted => write!(f, "Operation aborted"),
            Error::Exec { command, source } => {
                write!(f, "Failed to run \"{}\": {}", command, source)
            }
        }
    }
}

impl std::error::Error for Error {}
