//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use selah::{ActiveView, HistoricalEra, Language, VisualStyle};
use std::path::PathBuf;

/// Selah - turn a scripture reference into a cinematic video script
#[derive(Parser, Debug)]
#[command(name = "selah")]
#[command(about = "Turn a scripture reference into a cinematic text-to-video script", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep history in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a video script
    Generate(GenerateArgs),

    /// Recommend a color tone for a verse
    Tone {
        /// Scripture reference or passage
        #[arg(long)]
        verse: String,
    },

    /// Inspect saved generations
    #[command(subcommand)]
    History(HistoryCommands),

    /// Start an interactive session
    Session,

    /// List the accepted option values
    Options,
}

/// Parameters for a single generation.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Scripture reference or passage
    #[arg(long)]
    pub verse: String,

    /// Output language
    #[arg(long)]
    pub language: Option<Language>,

    /// Total video length in seconds
    #[arg(long)]
    pub video_length: Option<String>,

    /// Average cut length in seconds
    #[arg(long)]
    pub cut_length: Option<String>,

    /// Visual style
    #[arg(long)]
    pub style: Option<VisualStyle>,

    /// Historical era
    #[arg(long)]
    pub era: Option<HistoricalEra>,

    /// Cultural or national backdrop
    #[arg(long)]
    pub country: Option<String>,

    /// Color grading and artistic reference
    #[arg(long)]
    pub color_tone: Option<String>,

    /// Ask for a color tone first when none is given
    #[arg(long)]
    pub recommend_tone: bool,

    /// Result view to print
    #[arg(long, default_value = "full")]
    pub view: ActiveView,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List saved generations, most recent first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show one saved generation
    Show {
        /// Entry id
        id: String,

        /// Result view to print
        #[arg(long, default_value = "full")]
        view: ActiveView,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Delete one saved generation
    Delete {
        /// Entry id
        id: String,
    },

    /// Delete every saved generation
    Clear,

    /// Copy part of a saved generation: full, character <n> or cut <n>
    Copy {
        /// Entry id
        id: String,

        /// What to copy
        #[arg(num_args = 1..=2, required = true)]
        target: Vec<String>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
