pub mod context;
pub mod descend;
pub mod longest;
pub mod render;
pub mod routes;
pub mod select;
pub mod shortest;
pub mod validate;

pub use context::{load_config, QueryContext};
pub use descend::handle_descend;
pub use longest::handle_longest;
pub use routes::handle_routes;
pub use select::{NodeArgs, QueryError};
pub use shortest::{handle_shortest, ShortestArgs};
pub use validate::handle_validate;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use routetree_config::{Config, OutputFormat};
use routetree_core::Side;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "routetree")]
#[command(about = "Query flight routes modelled as binary trees of airport stops")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .routetree.{toml,yml,yaml,json})
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Route catalog file, overriding catalog.path
    #[arg(long, value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format, overriding output.format
    #[arg(long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List routes and their stops
    Routes,
    /// Check every route for structural problems
    Validate {
        /// Also reject duplicate same-side children and side labels on roots
        #[arg(long)]
        strict: bool,
    },
    /// Last stop reached by always taking the left (or right) child
    Descend {
        #[command(flatten)]
        node: NodeArgs,

        /// Direction to follow (left or right)
        #[arg(long)]
        side: Side,
    },
    /// Farthest descendant by total travel time
    Longest {
        #[command(flatten)]
        node: NodeArgs,
    },
    /// Minimum travel time between two airports of one route
    Shortest(ShortestArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum CliFormat {
    Text,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// Loads the catalog named by `config` and runs one command against it.
pub fn run(command: Commands, config: &Config, out: &mut impl Write) -> Result<()> {
    let ctx = match command {
        Commands::Validate { .. } => QueryContext::load_unchecked(config.clone())?,
        _ => QueryContext::load(config.clone())?,
    };

    match command {
        Commands::Routes => handle_routes(&ctx, out),
        Commands::Validate { strict } => handle_validate(&ctx, strict, out),
        Commands::Descend { node, side } => handle_descend(&ctx, &node, side, out),
        Commands::Longest { node } => handle_longest(&ctx, &node, out),
        Commands::Shortest(args) => handle_shortest(&ctx, &args, out),
    }
}
