//! Command-line interface configuration.

use argh::FromArgs;
use std::{net::SocketAddr, path::PathBuf};

use crate::config::MappingEntry;

/// Redirects request paths to URLs listed in YAML or JSON rule files
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// path to a YAML file with a sequence of 'path'/'url' rules
    #[argh(option)]
    pub yaml: Option<PathBuf>,

    /// path to a JSON file with an array of 'path'/'url' rules
    #[argh(option)]
    pub json: Option<PathBuf>,

    /// inline rule 'path=url', may be repeated
    #[argh(option, short = 'r', long = "redirect")]
    pub redirects: Vec<MappingEntry>,

    /// server bind address (default: '127.0.0.1:8080')
    #[argh(option, default = "\"127.0.0.1:8080\".parse().unwrap()")]
    pub bind: SocketAddr,
}
