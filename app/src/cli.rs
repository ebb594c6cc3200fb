use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "news-app", version, about = "Browse news categories, articles and authors")]
pub struct Cli {
    #[arg(long, global = true, help = "API base URL (overrides NEWS_API_BASE_URL)")]
    pub base_url: Option<String>,
    #[arg(long, global = true, value_enum, help = "Log output format (overrides LOG_FORMAT)")]
    pub log_format: Option<LogFormat>,
    #[arg(short, long, global = true, help = "Log requests and route resolution")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a location (e.g. `#/category/1`), load its view and print it
    Open { location: String },
    /// Print the route table
    Routes,
    /// Print the location of a named route
    Href {
        name: String,
        #[arg(value_parser = parse_key_value, help = "Route parameters as key=value")]
        params: Vec<(String, String)>,
    },
    /// Run a single API query and print the raw JSON payload
    Fetch {
        #[arg(value_enum)]
        query: Query,
        #[arg(help = "Category id, author id or search text")]
        argument: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Query {
    Categories,
    Category,
    Articles,
    Author,
    Search,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}
