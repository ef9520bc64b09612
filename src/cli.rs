//! src/cli.rs
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// 为每次 Git Commit 记录 why 与 notes，并生成可搜索的时间线
///
/// Run without a subcommand to annotate the latest commit.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    allow_external_subcommands = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the post-commit hook that prompts for an annotation after each commit.
    Init {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Print every recorded annotation.
    List {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Print annotations whose message, why or notes contain the query (case-insensitive).
    Search {
        /// Words to search for; joined with spaces.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Write a timeline of all annotations to .devlog/timeline.md.
    Timeline {
        /// Write .devlog/timeline.html instead of Markdown.
        #[arg(long)]
        html: bool,

        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Anything else falls through to annotating the latest commit.
    #[command(external_subcommand)]
    Annotate(Vec<String>),
}

/// `--html` counts wherever it appears after `timeline`.
pub fn wants_html(html: bool, extra: &[String]) -> bool {
    html || extra.iter().any(|arg| arg == "--html")
}

/// Parses `args`, treating anything clap rejects (other than `--help`/`--version`)
/// as a request to annotate the latest commit.
pub fn parse_lenient<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            log::debug!("Unrecognised arguments, annotating the last commit: {e}");
            Cli { command: None }
        }
    }
}

/// Joined search query, or `None` when the first word is missing or empty.
pub fn search_query(words: &[String]) -> Option<String> {
    match words.first() {
        Some(first) if !first.is_empty() => Some(words.join(" ")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Commands> {
        parse_lenient(std::iter::once("gitdevlog").chain(args.iter().copied())).command
    }

    #[test]
    fn trailing_arguments_are_ignored() {
        assert!(matches!(parse(&["list", "extra"]), Some(Commands::List { .. })));
        assert!(matches!(parse(&["init", "now", "--force"]), Some(Commands::Init { .. })));
    }

    #[test]
    fn html_flag_is_found_before_or_after_extra_words() {
        for args in [&["timeline", "--html", "x"][..], &["timeline", "x", "--html"][..]] {
            match parse(args) {
                Some(Commands::Timeline { html, extra }) => {
                    assert!(wants_html(html, &extra), "args: {args:?}")
                }
                other => panic!("unexpected parse for {args:?}: {other:?}"),
            }
        }
        match parse(&["timeline", "x"]) {
            Some(Commands::Timeline { html, extra }) => assert!(!wants_html(html, &extra)),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn unknown_words_and_flags_fall_through_to_annotation() {
        assert!(matches!(parse(&["help"]), Some(Commands::Annotate(_))));
        assert!(matches!(parse(&["whatever", "else"]), Some(Commands::Annotate(_))));
        assert!(parse(&["--foo"]).is_none());
        assert!(parse(&[]).is_none());
    }

    #[test]
    fn search_keeps_hyphenated_words() {
        match parse(&["search", "fix", "--no-verify"]) {
            Some(Commands::Search { query }) => assert_eq!(query, vec!["fix", "--no-verify"]),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn empty_first_word_is_a_missing_query() {
        assert_eq!(search_query(&[]), None);
        assert_eq!(search_query(&[String::new()]), None);
        assert_eq!(search_query(&[String::new(), "bug".to_string()]), None);
        assert_eq!(
            search_query(&["null".to_string(), "deref".to_string()]),
            Some("null deref".to_string())
        );
    }
}
