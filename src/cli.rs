use clap::Parser;

pub const USAGE: &str = concat!("Usage: ", env!("CARGO_PKG_NAME"), " <collection_name>");

/// Delete and recreate a Weaviate collection with a text/number schema
/// vectorized by nomic-embed-text.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version)]
pub struct Cli {
    /// Collection to (re)create. Any existing collection with this name is deleted.
    #[arg(value_name = "collection_name")]
    collection_name: Option<String>,

    /// Anything after the collection name is ignored.
    #[arg(hide = true)]
    _rest: Vec<String>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn collection_name(&self) -> Option<&str> {
        self.collection_name.as_deref().filter(|name| !name.is_empty())
    }
}
