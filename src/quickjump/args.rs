use clap::{ArgGroup, Parser};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "qj")]
#[command(version = VERSION)]
#[command(about = "Bookmark directories and jump back to them", long_about = None)]
#[command(group(
    ArgGroup::new("action").args(["bookmark", "add", "list", "delete", "edit", "check"])
))]
pub struct Cli {
    /// Bookmark to jump to; its directory is printed on stdout.
    /// Without any action, qj starts the interactive browser.
    pub bookmark: Option<String>,

    /// Bookmark a directory (default: the current directory)
    #[arg(short, long, value_name = "DIR", num_args = 0..=1)]
    pub add: Option<Option<PathBuf>>,

    /// List all bookmarks (`qj l` and `qj list` work too)
    #[arg(short, long)]
    pub list: bool,

    /// Remove a bookmark
    #[arg(short, long, value_name = "KEY")]
    pub delete: Option<String>,

    /// Edit the bookmark database in $EDITOR
    #[arg(short, long)]
    pub edit: bool,

    /// Report directories bookmarked more than once
    #[arg(long)]
    pub check: bool,

    /// Bookmark database file
    #[arg(long, env = "QUICKJUMP_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Bare words that list instead of jumping.
const LIST_WORDS: [&str; 2] = ["l", "list"];

impl Cli {
    pub fn wants_list(&self) -> bool {
        self.list
            || self
                .bookmark
                .as_deref()
                .is_some_and(|word| LIST_WORDS.contains(&word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("qj").chain(args.iter().copied()))
    }

    #[test]
    fn bare_key_is_a_jump() {
        let cli = parse(&["k3x"]).unwrap();
        assert_eq!(cli.bookmark.as_deref(), Some("k3x"));
        assert!(cli.add.is_none());
        assert!(!cli.list);
    }

    #[test]
    fn add_with_and_without_dir() {
        assert_eq!(parse(&["-a"]).unwrap().add, Some(None));
        assert_eq!(
            parse(&["--add", "/tmp"]).unwrap().add,
            Some(Some(PathBuf::from("/tmp")))
        );
    }

    #[test]
    fn no_args_is_browse() {
        let cli = parse(&[]).unwrap();
        assert!(cli.bookmark.is_none());
        assert!(cli.add.is_none());
        assert!(cli.delete.is_none());
        assert!(!cli.list && !cli.edit && !cli.check);
    }

    #[test]
    fn list_words_are_list_aliases() {
        let spellings: [&[&str]; 4] = [&["l"], &["list"], &["-l"], &["--list"]];
        for args in spellings {
            assert!(parse(args).unwrap().wants_list(), "{:?}", args);
        }
        assert!(!parse(&["k3x"]).unwrap().wants_list());
        assert!(!parse(&[]).unwrap().wants_list());
    }

    #[test]
    fn actions_are_exclusive() {
        assert!(parse(&["-l", "k3x"]).is_err());
        assert!(parse(&["-l", "-e"]).is_err());
        assert!(parse(&["-d", "abc", "--check"]).is_err());
    }

    #[test]
    fn db_and_verbose_combine_with_actions() {
        let cli = parse(&["--db", "/tmp/db.json", "-v", "-l"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/db.json")));
        assert!(cli.verbose);
        assert!(cli.list);
    }
}
