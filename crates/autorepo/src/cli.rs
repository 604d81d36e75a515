//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;

/// Bootstrap a new project: git repository, GitHub remote, Python virtual
/// environment, and editor launch
#[derive(Parser, Debug)]
#[command(name = "auto-repo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the new project directory is created under
    #[arg(value_name = "REPOSITORY_PARENT_DIRECTORY")]
    pub repository_parent_directory: Utf8PathBuf,

    /// Name of the new project and its hosted repository
    #[arg(value_name = "REPOSITORY_NAME")]
    pub repository_name: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_arguments() {
        let cli = Cli::try_parse_from(["auto-repo", "/tmp", "demo123"]).unwrap();

        assert_eq!(cli.repository_parent_directory, Utf8PathBuf::from("/tmp"));
        assert_eq!(cli.repository_name, "demo123");
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_both_positionals_required() {
        assert!(Cli::try_parse_from(["auto-repo"]).is_err());
        assert!(Cli::try_parse_from(["auto-repo", "/tmp"]).is_err());
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["auto-repo", "-vv", "/tmp", "demo123"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["auto-repo", "--quiet", "/tmp", "demo123"]).unwrap();
        assert!(cli.quiet);
    }
}
