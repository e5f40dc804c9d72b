use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(version)]
#[command(about = "Pinboard-style note keeper for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory override (defaults to .jot/ here, else the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note
    #[command(alias = "a")]
    Add {
        /// Note text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Category for the note
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List notes, pinned first
    #[command(alias = "ls")]
    List {
        /// Only show notes matching this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search notes by text or category
    Search { term: String },

    /// Replace a note's text
    #[command(alias = "e")]
    Edit {
        /// Display position of the note (e.g. 1)
        position: usize,

        /// Replacement text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Display positions of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Pin one or more notes
    #[command(alias = "p")]
    Pin {
        /// Display positions of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Unpin one or more notes
    #[command(alias = "u")]
    Unpin {
        /// Display positions of the notes (e.g. 1 2)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Show or change the display theme
    Theme {
        /// "toggle", "dark" or "light" (omit to show the current theme)
        mode: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (default-category, categories)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
