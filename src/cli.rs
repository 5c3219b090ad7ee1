use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(name = "tunedeck")]
#[command(about = "Command-line music player with a hand-ordered track list", long_about = None)]
pub struct Cli {
    /// Music folder (overrides `library.dir`)
    #[arg(env = "TUNEDECK_MUSIC_DIR")]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of the XDG default
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dir_config_and_verbosity() {
        let cli = Cli::try_parse_from(["tunedeck", "-vv", "--config", "/tmp/c.toml", "songs"])
            .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("songs")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.print_config);
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
