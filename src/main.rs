mod cli;
mod collection_schema;
mod nomic_embed_text;
mod weaviate_client;
mod weaviate_util;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use crate::cli::Cli;
use crate::weaviate_client::Weaviate;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout only carries the usage text.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let Some(collection_name) = cli.collection_name() else {
        println!("{}", cli::USAGE);
        std::process::exit(1);
    };

    // Dropped on return, error or not.
    let weaviate = Weaviate::connect_to_local().await?;
    weaviate_util::recreate_collection(&weaviate, collection_name).await
}
