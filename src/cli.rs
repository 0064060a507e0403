//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for shelfr using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive tag picker (default)
//! - **tags**: List the tags found in the library
//! - **search**: Print the books carrying every given tag
//! - **tag**: Write tags to a book
//! - **config**: Inspect or change the configuration
//!
//! # Examples
//!
//! ```
//! use shelfr::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["shelfr", "search", "-t", "philosophy"]);
//! match cli.get_command() {
//!     Commands::Search { tags, .. } => assert_eq!(tags, vec!["philosophy"]),
//!     _ => unreachable!(),
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tag-based e-book picker
#[derive(Parser, Debug)]
#[command(name = "shelfr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library directory (overrides config)
    #[arg(short = 'd', long = "dir", value_name = "DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Book file extension, leading dot included (overrides config)
    #[arg(short = 'e', long = "ext", value_name = "EXT", global = true)]
    pub ext: Option<String>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive tag picker (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Print the books listed when the picker closes
        #[arg(short = 'p', long = "print")]
        print: bool,
    },

    /// List every tag in the library
    Tags {
        /// Show how many books carry each tag
        #[arg(short = 'c', long = "counts")]
        counts: bool,

        /// Output as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Find books carrying all of the given tags
    #[command(visible_alias = "s")]
    Search {
        /// Tags to match (can specify multiple: -t tag1 -t tag2 or -t tag1 tag2)
        #[arg(short = 't', long = "tag", value_name = "TAG", num_args = 1.., required = true)]
        tags: Vec<String>,

        /// Output as JSON
        #[arg(long = "json")]
        json: bool,

        /// Show book titles next to paths
        #[arg(long = "titles")]
        titles: bool,
    },

    /// Write tags to a book
    #[command(visible_alias = "t")]
    Tag {
        /// Book to tag
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Tags to apply
        #[arg(value_name = "TAG", num_args = 1.., required = true)]
        tags: Vec<String>,

        /// Merge with the existing tags instead of replacing them
        #[arg(short = 'a', long = "add")]
        add: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the location of the config file
    Path,

    /// Change the library directory
    SetDir {
        /// New library directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { print: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_browse() {
        let cli = Cli::parse_from(["shelfr"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.get_command(), Commands::Browse { print: false });
    }

    #[test]
    fn test_explicit_browse_with_print() {
        let cli = Cli::parse_from(["shelfr", "b", "--print"]);
        assert_eq!(cli.get_command(), Commands::Browse { print: true });
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::parse_from(["shelfr", "tags", "--dir", "/srv/books", "--ext", ".pdf", "-q"]);
        assert_eq!(cli.dir, Some(PathBuf::from("/srv/books")));
        assert_eq!(cli.ext.as_deref(), Some(".pdf"));
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_tags_flags() {
        let cli = Cli::parse_from(["shelfr", "tags", "--counts", "--json"]);
        assert_eq!(
            cli.get_command(),
            Commands::Tags {
                counts: true,
                json: true
            }
        );
    }

    #[test]
    fn test_parse_search_with_multiple_tags() {
        let cli = Cli::parse_from(["shelfr", "search", "-t", "philosophy", "religion"]);
        let Commands::Search { tags, json, titles } = cli.get_command() else {
            panic!("Expected Search command");
        };
        assert_eq!(tags, vec!["philosophy", "religion"]);
        assert!(!json);
        assert!(!titles);

        let cli = Cli::parse_from(["shelfr", "s", "-t", "a", "-t", "b", "--titles"]);
        let Commands::Search { tags, titles, .. } = cli.get_command() else {
            panic!("Expected Search command");
        };
        assert_eq!(tags, vec!["a", "b"]);
        assert!(titles);
    }

    #[test]
    fn test_search_requires_tags() {
        assert!(Cli::try_parse_from(["shelfr", "search"]).is_err());
    }

    #[test]
    fn test_parse_tag() {
        let cli = Cli::parse_from(["shelfr", "tag", "book.epub", "history", "rome", "--add"]);
        assert_eq!(
            cli.get_command(),
            Commands::Tag {
                file: PathBuf::from("book.epub"),
                tags: vec!["history".to_string(), "rome".to_string()],
                add: true,
            }
        );
    }

    #[test]
    fn test_tag_requires_tags() {
        assert!(Cli::try_parse_from(["shelfr", "tag", "book.epub"]).is_err());
    }

    #[test]
    fn test_parse_config_commands() {
        let cli = Cli::parse_from(["shelfr", "config", "set-dir", "/srv/books"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::SetDir {
                    dir: PathBuf::from("/srv/books")
                }
            }
        );

        let cli = Cli::parse_from(["shelfr", "config", "path"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Path
            }
        );
    }
}
