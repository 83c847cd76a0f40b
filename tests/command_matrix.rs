//! Rendering matrix: every (agent, verb) pair, quoting rules, and the
//! verb round-trip property.

use std::collections::HashMap;

use anypm_core::{get_command, parse_install, parse_run, parse_uninstall, Agent, Verb};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn every_supported_pair_renders_without_placeholder_residue() {
    for agent in Agent::ALL {
        for verb in Verb::ALL {
            let Ok(rendered) = get_command(agent, verb, &[]) else {
                continue;
            };
            assert!(!rendered.contains("{0}"), "{} {}: {}", agent, verb, rendered);
            assert_eq!(rendered, rendered.trim(), "{} {}: {}", agent, verb, rendered);
            assert!(!rendered.is_empty());
        }
    }
}

#[test]
fn only_npm_lacks_upgrade_interactive() {
    for agent in Agent::ALL {
        for verb in Verb::ALL {
            let result = get_command(agent, verb, &[]);
            if agent == Agent::Npm && verb == Verb::UpgradeInteractive {
                assert!(result.is_err());
            } else {
                assert!(result.is_ok(), "{} {} should render", agent, verb);
            }
        }
    }
}

#[test]
fn quoting_applies_to_spaced_args_but_never_double_dash_flags() {
    for agent in Agent::ALL {
        let rendered =
            get_command(agent, Verb::Add, &args(&["left pad", "--registry=http://x y"])).unwrap();
        assert!(
            rendered.contains("\"left pad\""),
            "{}: {}",
            agent,
            rendered
        );
        assert!(
            rendered.contains("--registry=http://x y"),
            "{}: {}",
            agent,
            rendered
        );
        assert!(!rendered.contains("\"--registry"), "{}: {}", agent, rendered);
    }
}

#[test]
fn rendered_commands_map_back_to_their_verb() {
    for agent in Agent::ALL {
        let mut by_command: HashMap<String, Vec<Verb>> = HashMap::new();
        for verb in Verb::ALL {
            if let Ok(cmd) = get_command(agent, verb, &[]) {
                by_command.entry(cmd).or_default().push(verb);
            }
        }
        for verb in Verb::ALL {
            let Ok(cmd) = get_command(agent, verb, &[]) else {
                continue;
            };
            let mapped = &by_command[&cmd];
            assert!(mapped.contains(&verb), "{} {} lost in round-trip", agent, verb);
            if mapped.len() > 1 {
                // the only tolerated collisions are verbs sharing a template
                // verbatim (npm install/add, bun upgrade/upgrade-interactive)
                let expanded: Vec<String> = mapped
                    .iter()
                    .map(|v| get_command(agent, *v, &args(&["pkg"])).unwrap())
                    .collect();
                assert!(
                    expanded.windows(2).all(|w| w[0] == w[1]),
                    "{}: ambiguous verbs {:?} diverge with args",
                    agent,
                    mapped
                );
            }
        }
    }
}

#[test]
fn frozen_install_matrix_matches_each_manager() {
    let cases = [
        (Agent::Npm, "npm ci"),
        (Agent::Yarn, "yarn install --frozen-lockfile"),
        (Agent::YarnBerry, "yarn install --immutable"),
        (Agent::Pnpm, "pnpm i --frozen-lockfile"),
        (Agent::Pnpm6, "pnpm i --frozen-lockfile"),
        (Agent::Bun, "bun install --no-save"),
    ];
    for (agent, expected) in cases {
        assert_eq!(get_command(agent, Verb::FrozenInstall, &[]).unwrap(), expected);
    }
}

#[test]
fn execute_matrix_matches_each_manager() {
    let cases = [
        (Agent::Npm, "npx vitest"),
        (Agent::Yarn, "npx vitest"),
        (Agent::YarnBerry, "yarn dlx vitest"),
        (Agent::Pnpm, "pnpm dlx vitest"),
        (Agent::Pnpm6, "pnpm dlx vitest"),
        (Agent::Bun, "bunx vitest"),
    ];
    for (agent, expected) in cases {
        assert_eq!(
            get_command(agent, Verb::Execute, &args(&["vitest"])).unwrap(),
            expected
        );
    }
}

#[test]
fn intent_edge_cases_render_the_expected_commands() {
    assert_eq!(
        parse_install(Agent::Bun, &args(&["-D", "lodash"]), None).unwrap(),
        "bun add -d lodash"
    );
    assert_eq!(
        parse_install(Agent::Npm, &args(&["-g", "typescript"]), None).unwrap(),
        "npm i -g typescript"
    );
    assert_eq!(parse_run(Agent::Npm, &[], None).unwrap(), "npm run start");
    assert_eq!(
        parse_uninstall(Agent::Yarn, &args(&["-g", "eslint"]), None).unwrap(),
        "yarn global remove eslint"
    );
}
