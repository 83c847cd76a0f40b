//! Shared helpers: data directory, file-backed logging, PATH lookups, and
//! small argument-list utilities.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

pub const LOG_FILE: &str = "logs.txt";

/// State directory. Uses ANYPM_DATA_DIR if set; otherwise ~/.anypm.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("ANYPM_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".anypm")
}

pub fn init_data_dir() -> std::io::Result<()> {
    fs::create_dir_all(data_dir())
}

fn is_quiet() -> bool {
    env::var("ANYPM_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Append a timestamped line to the log file; echo to stdout unless quiet.
pub fn log(message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let log_message = format!("[{}] {}", timestamp, message);

    if !is_quiet() {
        println!("{}", log_message);
    }

    let log_path = data_dir().join(LOG_FILE);
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) {
        let _ = writeln!(file, "{}", log_message);
    }
}

/// Like `log`, but the console copy goes to stderr and is never suppressed.
pub fn log_error(message: &str) {
    eprintln!("{}", message);
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let log_path = data_dir().join(LOG_FILE);
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) {
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

/// Whether an executable resolves on PATH.
pub fn cmd_exists(command: &str) -> bool {
    which::which(command).is_ok()
}

/// New list with every occurrence of `flag` removed.
pub fn exclude(args: &[String], flag: &str) -> Vec<String> {
    args.iter().filter(|a| *a != flag).cloned().collect()
}

/// Volta pins manager versions per project; when it is installed, commands
/// should be routed through `volta run` so the pin is honored.
pub fn volta_prefix() -> Option<&'static str> {
    if env::var("VOLTA_HOME").is_ok() && cmd_exists("volta") {
        Some("volta run")
    } else {
        None
    }
}
