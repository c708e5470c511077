//! Command-line front end for the comments command.
//!
//! `comments <query...>` runs the command once and prints the reply.
//! `comments --import <items.json>` loads item rows into the database.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use comments_bot::{CommentsCommand, StdoutReply};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (items, config) = comments_bot::init_foundation()?;

    if args.first().map(String::as_str) == Some("--import") {
        let path = args.get(1).context("--import needs a JSON file path")?;
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {path}"))?;
        let count = items.database().import_json(&json)?;
        println!("Imported {count} items");
        return Ok(());
    }

    let query = args.join(" ");
    if query.trim().is_empty() {
        anyhow::bail!("usage: comments <item name | pasted item link>");
    }

    let command = CommentsCommand::new(items, &config)?;
    command.run(&query, &StdoutReply).await?;
    Ok(())
}
