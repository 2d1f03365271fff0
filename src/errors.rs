//! Error types for content loading, configuration and link launching
//!
//! None of these are raised while a screen is running: content and config are
//! read once before the terminal is taken over, and a failed link launch is
//! reported in the status line instead of aborting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or parse a content document
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid content document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failure to read or parse the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failure to hand a URL to the platform opener
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("failed to launch {program} for {url}: {source}")]
    Spawn {
        program: &'static str,
        url: String,
        #[source]
        source: io::Error,
    },
}
