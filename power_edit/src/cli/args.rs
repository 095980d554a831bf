use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use word_align::BuiltinNormalizer;

/// Proofread a text word by word against another version of it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file, created with defaults when missing
    /// [default: ~/.powerEdit/config.yml]
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    #[arg(
            long,
            value_name = "WHEN",
            default_value_t = ColorChoice::Auto,
            default_missing_value = "always",
            value_enum,
            global = true
        )]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Start a new job proofreading EDIT against SOURCE
    New {
        /// The text being corrected
        edit: PathBuf,
        /// The text it is checked against
        source: PathBuf,
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Continue a job where its last session stopped
    Resume {
        /// Job name as listed by `jobs`, or the path of its .yml record
        job: String,
        #[command(flatten)]
        session: SessionArgs,
    },

    /// List every job
    Jobs,

    /// Replace curly quotes with straight ones
    PlainQuotes(FilterArgs),

    /// Replace straight quotes with curly ones
    CurlyQuotes(FilterArgs),

    /// Remove whitespace before punctuation
    TidyPunctuation(FilterArgs),
}

#[derive(clap::Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionArgs {
    /// Word index to start comparing from in the file under edit
    #[arg(long = "ei", value_name = "INDEX")]
    pub edit_index: Option<usize>,

    /// Word index to start comparing from in the source file
    #[arg(long = "si", value_name = "INDEX")]
    pub source_index: Option<usize>,

    /// How words are compared, overriding the configuration
    #[arg(long, value_name = "NORMALIZER")]
    pub normalizer: Option<BuiltinNormalizer>,

    /// Keep earlier output on screen instead of redrawing for every
    /// discrepancy
    #[arg(long)]
    pub keep_screen: bool,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct FilterArgs {
    pub file: PathBuf,

    /// Overwrite FILE instead of writing a modified_ copy next to it
    #[arg(long)]
    pub in_place: bool,
}
