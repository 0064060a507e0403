//! Shelfr CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Pick books interactively (default command)
//! shelfr
//! shelfr browse --print
//!
//! # List tags, with counts
//! shelfr tags --counts
//!
//! # Books tagged both philosophy and religion
//! shelfr search -t philosophy religion
//!
//! # Tag a book (replace, or merge with --add)
//! shelfr tag book.epub philosophy stoicism
//! shelfr tag --add book.epub classics
//!
//! # Point shelfr at another library for one run
//! shelfr --dir /mnt/books tags
//! ```
//!
//! # Configuration
//!
//! On first run, shelfr prompts for the library location. Configuration is
//! stored in the user's config directory (`~/.config/shelfr/config.toml` on
//! Linux).

use shelfr::{
    ShelfrError,
    cli::{Cli, Commands},
    commands,
    config::ShelfrConfig,
    logging,
    tags::XattrStore,
    title::{EpubTitles, TitleCache},
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, ShelfrError>;

/// Configuration with the one-off `--dir` and `--ext` overrides applied
fn effective_config(config: &ShelfrConfig, cli: &Cli) -> ShelfrConfig {
    let mut effective = config.clone();
    if let Some(dir) = &cli.dir {
        effective.ebook_dir.clone_from(dir);
    }
    if let Some(ext) = &cli.ext {
        effective.extension.clone_from(ext);
    }
    effective
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = ShelfrConfig::load_or_setup()?;
    let effective = effective_config(&config, cli);
    let quiet = cli.quiet || config.quiet;
    let store = XattrStore::new(effective.attribute.clone());
    let command = cli.get_command();

    tracing::debug!(
        dir = %effective.resolved_ebook_dir().display(),
        extension = %effective.extension,
        ?command,
        "dispatching"
    );

    match command {
        Commands::Browse { print } => {
            commands::browse(&effective, &store, print, quiet)?;
        }
        Commands::Tags { counts, json } => {
            let index = commands::load_index(&effective, &store)?;
            commands::tags(&index, counts, json, quiet)?;
        }
        Commands::Search { tags, json, titles } => {
            let index = commands::load_index(&effective, &store)?;
            let cache = titles.then(|| TitleCache::build(&index, &EpubTitles));
            commands::search(&index, &tags, cache.as_ref(), json, quiet)?;
        }
        Commands::Tag { file, tags, add } => {
            commands::tag(&store, &file, &tags, add, quiet)?;
        }
        // edits go to the saved file, not to the one-off overrides
        Commands::Config { command } => {
            commands::config(&mut config, &command, quiet)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("Warning: could not open log file: {e}");
    }

    let cli = Cli::parse_args();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
