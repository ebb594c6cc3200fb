use anyhow::{Context, Result};
use clap::Parser;
use news_app::cli::{Cli, Commands, Query};
use news_app::{telemetry, App, Config};
use news_core::RouteTable;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    telemetry::init(&config);

    match cli.command {
        Commands::Open { location } => {
            let app = App::from_config(&config)?;
            let page = app
                .open(&location)
                .await
                .with_context(|| format!("failed to open `{location}`"))?;
            print!("{page}");
        }
        Commands::Routes => {
            let routes = RouteTable::news()?;
            for entry in routes.entries() {
                let props = if entry.forward_params { "props" } else { "" };
                println!("{:<22} {:<12} {:<10} {props}", entry.pattern, entry.name, format!("{:?}", entry.view));
            }
        }
        Commands::Href { name, params } => {
            let routes = RouteTable::news()?;
            let href = routes.href(&name, params.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
            println!("{href}");
        }
        Commands::Fetch { query, argument } => {
            let app = App::from_config(&config)?;
            let api = &app.api;
            let arg = || argument.as_deref().context("this query needs an argument");
            let payload = match query {
                Query::Categories => api.list_categories().await,
                Query::Category => api.get_category_details(arg()?).await,
                Query::Articles => api.list_articles_by_category(arg()?).await,
                Query::Author => api.get_author_details(arg()?).await,
                Query::Search => api.search(arg()?).await,
            }?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(())
}
