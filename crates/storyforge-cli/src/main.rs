mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{assist::AssistSubcommand, story::StorySubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "storyforge",
    about = "AI-assisted user story authoring — analyze, improve, and manage story records",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .storyforge/ or .git/)
    #[arg(long, global = true, env = "STORYFORGE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize storyforge in the current project
    Init,

    /// Manage story records
    Story {
        #[command(subcommand)]
        subcommand: StorySubcommand,
    },

    /// AI assistance: analyze, improve, apply suggestions, create from notes
    Assist {
        #[command(subcommand)]
        subcommand: AssistSubcommand,
    },

    /// Start the relay and story API server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value_t = storyforge_server::DEFAULT_PORT)]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Story { subcommand } => cmd::story::run(&root, subcommand, cli.json),
        Commands::Assist { subcommand } => cmd::assist::run(&root, subcommand, cli.json),
        Commands::Serve { port, no_open } => cmd::serve::run(&root, port, no_open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
