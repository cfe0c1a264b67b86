//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use soarep_client::Params;

/// soarep - query an SOA repository server
#[derive(Parser, Debug)]
#[command(name = "soarep", version)]
#[command(about = "Query the resources of an SOA repository server", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Server root, overriding the config file and SOAREP_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the registered resources
    Resources {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run a resource's query and print the decoded body
    Query {
        /// Resource name (e.g. Team, service-not-uses)
        resource: String,

        /// Parameter as key=value; placeholders fill the path, others go in the query string
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Print compact JSON on one line
        #[arg(long)]
        compact: bool,
    },

    /// Print the URL a query would request, without sending it
    Url {
        /// Resource name
        resource: String,

        /// Parameter as key=value
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Configuration file management
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `soarep config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Show the effective configuration after all overrides
    Show,

    /// Write a default configuration file
    Init {
        /// Where to write it (defaults to the resolved config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    Params::parse_pair(s).ok_or_else(|| format!("expected key=value, got {s:?}"))
}

/// Collect parsed `--param` pairs.
pub fn to_params(pairs: &[(String, String)]) -> Params {
    pairs.iter().cloned().collect()
}
