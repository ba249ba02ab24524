mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use colored::*;
use github_trending_plugin::{ClientConfig, DisplayItem, GitHubClient, Reply, TrendingPlugin};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Results go to stdout, so keep logging quiet unless asked for
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = ClientConfig {
        api_base: cli.api_base,
        token: cli.token,
        window_days: cli.window_days,
        per_page: cli.per_page,
    };
    let client = GitHubClient::new(config).context("Failed to create GitHub client")?;
    let plugin = TrendingPlugin::with_source(Arc::new(client));

    match cli.command {
        Command::Search { query, json } => {
            plugin.startup();

            let items = plugin
                .search(&query, |reply| print_reply(&reply, json))
                .await
                .context("Failed to fetch trending repositories")?;

            if json {
                println!("{}", serde_json::to_string(&items)?);
            } else {
                print_items(&items);
            }
        }
        Command::Open { id } => {
            plugin
                .execute(&id, &serde_json::Value::Null)
                .await
                .with_context(|| format!("Failed to open {}", id))?;
        }
    }

    Ok(())
}

fn print_reply(reply: &Reply, json: bool) {
    if json {
        match serde_json::to_string(reply) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("Failed to encode reply: {}", e),
        }
        return;
    }

    match reply {
        Reply::Items(items) => {
            for item in items {
                eprintln!("{} {}", item.title.dimmed(), item.desc.dimmed());
            }
        }
        Reply::Remove { .. } => {}
    }
}

fn print_items(items: &[DisplayItem]) {
    println!("{}", "Trending on GitHub".bold().green());
    println!("{}", "=".repeat(50).dimmed());

    for (index, item) in items.iter().enumerate() {
        println!("{:>3}. {}", index + 1, strip_markup(&item.title).bold());
        println!("     {}", strip_markup(&item.desc));
        println!("     {}", item.id.cyan());
    }
}

/// Drops tags from formatter output; assumes the well-formed markup `format` produces.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
