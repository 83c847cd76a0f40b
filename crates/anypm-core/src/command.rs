//! Render a (manager, verb, args) triple into the final command string.

use crate::agents::{self, Agent, CommandTemplate, Verb};
use crate::error::Error;

/// Wrap an argument in double quotes when it contains a space and is not a
/// `--` flag; `--` arguments are assumed pre-escaped by the caller.
fn quote(arg: &str) -> String {
    if !arg.starts_with("--") && arg.contains(' ') {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}

/// Look up the template for `(agent, verb)` and substitute `args` into it.
/// Computed templates own their formatting and receive the args untouched.
pub fn get_command(agent: Agent, verb: Verb, args: &[String]) -> Result<String, Error> {
    let template =
        agents::template(agent, verb).ok_or(Error::UnsupportedVerb { agent, verb })?;
    match template {
        CommandTemplate::Computed(render) => Ok(render(args)),
        CommandTemplate::Literal(template) => {
            let joined = args.iter().map(|a| quote(a)).collect::<Vec<_>>().join(" ");
            Ok(template.replace("{0}", &joined).trim().to_string())
        }
    }
}
