//! Service Configuration
//!
//! Settings come from command-line flags first, then environment variables,
//! then built-in defaults.
//!
//! | Flag        | Environment         | Default          |
//! |-------------|---------------------|------------------|
//! | `--bind`    | `MOVIE_API_BIND`    | `127.0.0.1:5000` |
//! | `--data`    | `MOVIE_API_DATA`    | required         |
//! | `--verbose` | `MOVIE_API_VERBOSE` | off              |

use anyhow::{Context, Result, anyhow};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

pub const USAGE: &str = "Usage: movie_api --data <movies.json> [--bind <addr:port>] [--verbose]";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub log_level: tracing::Level,
}

impl Config {
    /// Builds the config from the process arguments and environment.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_parts(&args, |key| std::env::var(key).ok())
    }

    /// `args` excludes the program name; `env` looks up a variable by name.
    pub fn from_parts<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind: Option<String> = None;
        let mut data: Option<String> = None;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = Some(flag_value(args, i, "--bind")?);
                    i += 2;
                }
                "--data" => {
                    data = Some(flag_value(args, i, "--data")?);
                    i += 2;
                }
                "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument: {}", other);
                    i += 1;
                }
            }
        }

        let bind = bind
            .or_else(|| env("MOVIE_API_BIND"))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;

        let data_path = data
            .or_else(|| env("MOVIE_API_DATA"))
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("--data is required"))?;

        let verbose = verbose
            || env("MOVIE_API_VERBOSE").is_some_and(|v| matches!(v.as_str(), "1" | "true"));
        let log_level = if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        Ok(Self {
            bind_addr,
            data_path,
            log_level,
        })
    }
}

fn flag_value(args: &[String], i: usize, flag: &str) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| anyhow!("{} expects a value", flag))
}
