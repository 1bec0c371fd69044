use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

/// What the user asked the program to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file to read instead of the default one
    pub(crate) config: Option<PathBuf>,

    /// Log file to write to, overriding the configuration file
    pub(crate) log_file: Option<PathBuf>,

    /// Seed for the random number generator used to place food
    pub(crate) seed: Option<u64>,
}

impl Cli {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => {
                    args.seed = Some(parser.value()?.parse()?);
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

pub(crate) static USAGE: &str = "\
Usage: gridsnake [<options>]

Play snake in the terminal

Options:
  -c, --config <path>   Read configuration from the given file
      --log-file <path> Write log messages to the given file
      --seed <int>      Seed the random number generator
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Cli::Run(Arguments::default()));
    }

    #[test]
    fn all_options() {
        assert_eq!(
            parse(&["-c", "snake.toml", "--log-file=snake.log", "--seed", "42"]).unwrap(),
            Cli::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log")),
                seed: Some(42),
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Cli::Help)]
    #[case(&["--help"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    #[case(&["--version"], Cli::Version)]
    #[case(&["--seed", "7", "--help"], Cli::Help)]
    fn test_info(#[case] args: &[&str], #[case] cli: Cli) {
        assert_eq!(parse(args).unwrap(), cli);
    }

    #[rstest]
    #[case(&["--seed", "many"])]
    #[case(&["--seed", "-1"])]
    #[case(&["--seed"])]
    #[case(&["--config"])]
    #[case(&["--speed", "fast"])]
    #[case(&["extra"])]
    fn test_bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
