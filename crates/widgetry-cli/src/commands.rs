//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_DATA_FILE;

/// Widgetry: a power-switched calculator and two note boards
#[derive(Parser, Debug)]
#[command(name = "widgetry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// JSON file the note boards persist to
    #[arg(
        long,
        global = true,
        env = "WIDGETRY_DATA_FILE",
        default_value = DEFAULT_DATA_FILE
    )]
    pub data_file: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression, or open the terminal calculator
    Calc(CalcArgs),

    /// Heading/content notes
    Notes(NotesArgs),

    /// Title/content sticky notes
    Sticky(StickyArgs),
}

/// Arguments for the calc command
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Expression using digits, + - * / % ( ) and '.'
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,
}

/// Arguments for the notes command
#[derive(Args, Debug)]
pub struct NotesArgs {
    /// Start a fresh board empty instead of with the sample notes
    #[arg(long)]
    pub no_samples: bool,

    /// Action to run; omit to open the terminal notes app
    #[command(subcommand)]
    pub command: Option<NotesCommand>,
}

/// Heading/content notes actions
#[derive(Subcommand, Debug)]
pub enum NotesCommand {
    /// Add a note with the given heading
    Add {
        /// Heading shown in the list
        heading: String,
    },

    /// List headings
    List(ListArgs),

    /// Print a note's heading and content
    Show {
        /// 1-based position
        position: usize,
    },

    /// Replace a note's content
    Edit(NotesEditArgs),

    /// Delete a note
    Delete {
        /// 1-based position
        position: usize,
    },
}

/// Arguments for `notes edit`
#[derive(Args, Debug)]
pub struct NotesEditArgs {
    /// 1-based position
    pub position: usize,

    /// New content
    #[arg(long, conflicts_with = "stdin", required_unless_present = "stdin")]
    pub content: Option<String>,

    /// Read the new content from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the sticky command
#[derive(Args, Debug)]
pub struct StickyArgs {
    /// Action to run
    #[command(subcommand)]
    pub command: StickyCommand,
}

/// Sticky notes actions
#[derive(Subcommand, Debug)]
pub enum StickyCommand {
    /// Add a note with the given title
    Add {
        /// Title shown in the list
        title: String,
    },

    /// List titles
    List(ListArgs),

    /// Replace a note's content
    Edit {
        /// 1-based position
        position: usize,

        /// New content
        #[arg(long)]
        content: String,
    },

    /// Delete a note
    Delete {
        /// 1-based position
        position: usize,
    },
}

/// Arguments shared by the list actions
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Print the notes as JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
