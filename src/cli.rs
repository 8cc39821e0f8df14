use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "beauti-tex",
    about = "Use beauti-tex from the terminal",
    version
)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a structured project for a LaTeX paper
    MakeProject {
        /// The name of the project
        #[arg(short = 'N', long)]
        name: String,

        /// Target directory for the new project (default: current directory)
        #[arg(short = 'p', long)]
        project_path: Option<String>,

        /// Path to a configuration file
        #[arg(short = 'c', long)]
        config_path: Option<String>,

        /// Show the files that would be created without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve the configuration and validate its template directory
    Check {
        /// Path to a configuration file
        #[arg(short = 'c', long)]
        config_path: Option<String>,

        /// Print the resolved configuration as JSON
        #[arg(long)]
        json: bool,
    },
}
