use clap::Parser;

use cheat_sheet_core::{Action, Request, Topic};

/// Personal cheat-sheets on top of tldr
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "cs")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Print usage
    #[arg(short = 'h')]
    pub help: bool,

    /// Print version
    #[arg(short = 'v')]
    pub version: bool,

    /// Update tldr cache
    #[arg(short = 'u')]
    pub update: bool,

    /// List local cheat-sheets
    #[arg(short = 'l')]
    pub list: bool,

    /// Edit cheat-sheet name; every following argument is part of the name
    #[arg(
        short = 'e',
        value_name = "NAME",
        num_args = 1..,
        allow_hyphen_values = true
    )]
    pub edit: Option<Vec<String>>,

    /// Print log
    #[arg(long = "log")]
    pub log: bool,

    /// Cheat-sheet name, possibly several words
    #[arg(value_name = "NAME", num_args = 1.., trailing_var_arg = true)]
    pub names: Vec<String>,
}

impl Cli {
    /// Turn parsed flags into a request. Flags win over positional names in
    /// the order help, version, update, list, edit; no arguments at all
    /// means help.
    pub fn into_request(self) -> Request {
        let verbose = self.log;

        let request = if self.help {
            Request::new(Action::Help)
        } else if self.version {
            Request::new(Action::Version)
        } else if self.update {
            Request::new(Action::Update)
        } else if self.list {
            Request::new(Action::List)
        } else if let Some(tokens) = self.edit {
            match Topic::new(tokens) {
                Some(topic) => Request::edit(topic),
                None => Request::new(Action::Help),
            }
        } else {
            match Topic::new(self.names) {
                Some(topic) => Request::find(topic),
                None => Request::new(Action::Help),
            }
        };

        request.with_verbose(verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::normalize_args;

    fn parse(args: &[&str]) -> Request {
        let argv = normalize_args(std::iter::once("cs").chain(args.iter().copied()));
        Cli::try_parse_from(argv).unwrap().into_request()
    }

    fn topic(tokens: &[&str]) -> Topic {
        Topic::new(tokens.iter().copied()).unwrap()
    }

    #[test]
    fn test_no_args_shows_help() {
        assert_eq!(parse(&[]), Request::new(Action::Help));
    }

    #[test]
    fn test_find() {
        assert_eq!(parse(&["git"]), Request::find(topic(&["git"])));
        assert_eq!(
            parse(&["git", "commit"]),
            Request::find(topic(&["git", "commit"]))
        );
    }

    #[test]
    fn test_hyphenated_tokens_after_name_are_kept() {
        assert_eq!(parse(&["tar", "-x"]), Request::find(topic(&["tar", "-x"])));
    }

    #[test]
    fn test_edit_appends_remaining_names() {
        assert_eq!(parse(&["-e", "git"]), Request::edit(topic(&["git"])));
        assert_eq!(
            parse(&["-e", "git", "commit"]),
            Request::edit(topic(&["git", "commit"]))
        );
    }

    #[test]
    fn test_hyphenated_tokens_in_edit_are_kept() {
        assert_eq!(
            parse(&["-e", "tar", "-x"]),
            Request::edit(topic(&["tar", "-x"]))
        );
        assert_eq!(
            parse(&["-log", "-e", "git", "commit", "--amend"]),
            Request::edit(topic(&["git", "commit", "--amend"])).with_verbose(true)
        );
    }

    #[test]
    fn test_log_after_name_is_part_of_the_topic() {
        assert_eq!(
            parse(&["git", "-log"]),
            Request::find(topic(&["git", "-log"]))
        );
        assert_eq!(
            parse(&["-e", "git", "-log"]),
            Request::edit(topic(&["git", "-log"]))
        );
    }

    #[test]
    fn test_flag_precedence() {
        assert_eq!(parse(&["-h", "-v"]).action, Action::Help);
        assert_eq!(parse(&["-v", "-u"]).action, Action::Version);
        assert_eq!(parse(&["-u", "-e", "git"]).action, Action::Update);
        assert_eq!(parse(&["-v", "git"]).action, Action::Version);
        assert_eq!(parse(&["-l", "git"]).action, Action::List);
    }

    #[test]
    fn test_log_flag_single_and_double_dash() {
        let single = parse(&["-log", "git"]);
        assert!(single.verbose);
        assert_eq!(single.topic, Some(topic(&["git"])));

        assert!(parse(&["--log", "-e", "git"]).verbose);
        assert!(!parse(&["git"]).verbose);
    }

    #[test]
    fn test_edit_requires_a_name() {
        let argv = normalize_args(["cs", "-e"]);
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let argv = normalize_args(["cs", "-x"]);
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
