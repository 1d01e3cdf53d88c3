//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::describe::SubmissionKind;
use crate::labels::Locale;

/// Input path meaning standard input.
const STDIN_PATH: &str = "-";

/// Output representation of a rendered description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Markdown as stored with the submission
    #[default]
    Markdown,
    /// HTML fragment as sent to the work item
    Html,
    /// Standalone HTML preview page
    Page,
}

impl Format {
    /// File extension conventionally used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Html | Format::Page => "html",
        }
    }
}

/// Command line configuration for Issuemark.
#[derive(Debug, Clone, Parser)]
#[command(name = "issuemark", version, about, long_about = None)]
pub struct Config {
    /// JSON submission file, `-` reads standard input
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Output file, standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Kind of submission the input holds
    #[arg(short, long, value_enum, default_value_t = SubmissionKind::Issue)]
    pub kind: SubmissionKind,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
    pub format: Format,

    /// Language of headings and field labels
    #[arg(long, value_enum, default_value_t = Locale::English)]
    pub locale: Locale,

    /// Open the written output with the system viewer
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist, or if `--open` is
    /// requested without an output file to open.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if self.open && self.output.is_none() {
            bail!("--open requires an output file (-o)");
        }

        Ok(())
    }

    /// Whether the submission is read from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }
}
