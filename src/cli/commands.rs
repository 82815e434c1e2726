use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedjson")]
#[command(about = "Convert RSS 2.0, RDF/RSS 1.0 and Atom feeds to JSON Feed")]
#[command(version)]
pub struct Cli {
    /// Dialect to try, in order (rss2, rdf, atom). Repeat to set the order;
    /// overrides FEEDJSON_DIALECTS
    #[arg(long = "dialect", global = true, value_name = "NAME")]
    pub dialects: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a feed to JSON Feed
    Convert {
        /// Path to the feed XML (reads stdin if not specified)
        path: Option<String>,

        /// Print compact JSON instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,

        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print which dialect a feed is written in
    Detect {
        /// Path to the feed XML (reads stdin if not specified)
        path: Option<String>,
    },
}
