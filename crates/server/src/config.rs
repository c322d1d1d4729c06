// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Server configuration.
//!
//! Every flag falls back to an environment variable, and a `.env` file in
//! the working directory is loaded before parsing.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use clap::Parser;
use thiserror::Error;

/// Courtside Server - REST backend for basketball league records
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "COURTSIDE_DATABASE")]
    pub database: Option<PathBuf>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[arg(long, env = "DATABASE_URL")]
    pub mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(long, env = "COURTSIDE_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Origin allowed to call the API from a browser. Any origin when unset.
    #[arg(long, env = "FRONTEND_URL")]
    pub frontend_origin: Option<String>,

    /// Directory of a prebuilt frontend to serve for unmatched paths
    #[arg(long, env = "COURTSIDE_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Errors detected while turning arguments into a `ServerConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address '{bind}': {source}")]
    InvalidBindAddress {
        bind: String,
        #[source]
        source: AddrParseError,
    },
    #[error("invalid frontend origin '{origin}': {source}")]
    InvalidFrontendOrigin {
        origin: String,
        #[source]
        source: InvalidHeaderValue,
    },
    #[error("MySQL URL must start with mysql://")]
    InvalidMysqlUrl,
    #[error("static directory '{}' does not exist", .0.display())]
    MissingStaticDir(PathBuf),
}

/// Where league records are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    InMemory,
    SqliteFile(PathBuf),
    Mysql(String),
}

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database: DatabaseTarget,
    pub addr: SocketAddr,
    /// `None` allows any origin.
    pub frontend_origin: Option<HeaderValue>,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Validates parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the bind address, frontend origin, or `MySQL`
    /// URL is malformed, or the static directory is missing.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let ip: IpAddr = args
            .bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                bind: args.bind.clone(),
                source,
            })?;

        let database: DatabaseTarget = match (args.mysql_url, args.database) {
            (Some(url), _) => {
                if !url.starts_with("mysql://") {
                    return Err(ConfigError::InvalidMysqlUrl);
                }
                DatabaseTarget::Mysql(url)
            }
            (None, Some(path)) => DatabaseTarget::SqliteFile(path),
            (None, None) => DatabaseTarget::InMemory,
        };

        let frontend_origin: Option<HeaderValue> = args
            .frontend_origin
            .map(|origin| {
                HeaderValue::from_str(origin.trim_end_matches('/')).map_err(|source| {
                    ConfigError::InvalidFrontendOrigin { origin, source }
                })
            })
            .transpose()?;

        if let Some(dir) = &args.static_dir
            && !dir.is_dir()
        {
            return Err(ConfigError::MissingStaticDir(dir.clone()));
        }

        Ok(Self {
            database,
            addr: SocketAddr::new(ip, args.port),
            frontend_origin,
            static_dir: args.static_dir,
        })
    }
}
