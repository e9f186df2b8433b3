use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const FILE_ENV_VAR: &str = "FINLEDGER_FILE";
const DEFAULT_FILE_NAME: &str = "transactions.csv";

/// Where the ledger file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) csv_path: PathBuf,
}

impl Config {
    /// Resolve from the process arguments and environment.
    ///
    /// Returns the config plus `args` with any `--file <path>` pair removed,
    /// so the command dispatch only sees the command words.
    pub(crate) fn from_args(args: &[String]) -> Result<(Self, Vec<String>)> {
        let (file_arg, rest) = split_file_flag(args)?;
        let env_value = std::env::var(FILE_ENV_VAR).ok();
        let config = Self::resolve(file_arg.as_deref(), env_value.as_deref(), default_csv_path)?;
        Ok((config, rest))
    }

    /// `--file` beats the environment, which beats the platform data dir.
    pub(crate) fn resolve(
        file_arg: Option<&str>,
        env_value: Option<&str>,
        default_path: impl FnOnce() -> Result<PathBuf>,
    ) -> Result<Self> {
        let csv_path = match file_arg.or(env_value).filter(|s| !s.trim().is_empty()) {
            Some(path) => PathBuf::from(shellexpand(path.trim())),
            None => default_path()?,
        };
        Ok(Self { csv_path })
    }
}

fn split_file_flag(args: &[String]) -> Result<(Option<String>, Vec<String>)> {
    let mut file = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--file" || arg == "-f" {
            let value = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("{arg} requires a path"))?;
            file = Some(value.clone());
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((file, rest))
}

fn default_csv_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "finledger", "FinLedger")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join(DEFAULT_FILE_NAME))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
