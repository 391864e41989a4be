// Command-line flags. Every action flag is independent; `ui::run` checks
// them one after another in declaration order.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    version,
    about = "Retrieve YouTube channel information and manage creators in the registry"
)]
pub struct Cli {
    // --- Channel reader ---
    /// YouTube handle (without the leading @) to read the latest uploads from
    #[arg(long, value_name = "HANDLE")]
    pub channel: Option<String>,

    /// Print the channel info to the screen
    #[arg(long, requires = "channel")]
    pub dump: bool,

    /// Write the channel info to FILE, replacing it if it exists
    #[arg(long, value_name = "FILE", requires = "channel")]
    pub write: Option<PathBuf>,

    /// Path to the yt-dlp binary
    #[arg(long = "yt-dlp", value_name = "PATH")]
    pub ytdlp: Option<PathBuf>,

    // --- Creator registry ---
    /// Get a list of creators
    #[arg(long)]
    pub get_creators: bool,

    /// Create a creator
    #[arg(long, value_name = "NAME")]
    pub create_creator: Option<String>,

    /// Get a creator by ID
    #[arg(long, value_name = "ID")]
    pub get_creator_by_id: Option<String>,

    /// Replace a creator by ID
    #[arg(long, num_args = 2, value_names = ["CREATOR_ID", "NEW_NAME"])]
    pub replace_creator: Option<Vec<String>>,

    /// Update fields in a creator by ID
    #[arg(long, num_args = 2, value_names = ["CREATOR_ID", "NAME"])]
    pub update_creator: Option<Vec<String>>,

    /// Delete a creator by ID
    #[arg(long, value_name = "ID")]
    pub delete_creator: Option<String>,

    /// List a creator's videos
    #[arg(long, value_name = "ID")]
    pub get_videos: Option<String>,

    // --- Connection ---
    /// Registry host, optionally with a port
    #[arg(long)]
    pub host: Option<String>,

    /// Registry URL scheme
    #[arg(long, value_parser = ["http", "https"])]
    pub scheme: Option<String>,

    /// Skip TLS certificate verification (insecure)
    #[arg(long)]
    pub insecure: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Split a two-value flag into its parts. clap guarantees exactly two.
pub fn pair(values: &[String]) -> (&str, &str) {
    (values[0].as_str(), values[1].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_value_flags() {
        let cli = Cli::parse_from([
            "snarf",
            "--replace-creator",
            "5",
            "New Name",
            "--update-creator",
            "6",
            "Other",
        ]);
        assert_eq!(pair(cli.replace_creator.as_deref().unwrap()), ("5", "New Name"));
        assert_eq!(pair(cli.update_creator.as_deref().unwrap()), ("6", "Other"));
    }

    #[test]
    fn replace_needs_two_values() {
        let res = Cli::try_parse_from(["snarf", "--replace-creator", "5"]);
        assert!(res.is_err());
    }

    #[test]
    fn dump_requires_a_channel() {
        assert!(Cli::try_parse_from(["snarf", "--dump"]).is_err());
        let cli = Cli::parse_from(["snarf", "--channel", "someone", "--dump", "--write", "out.txt"]);
        assert_eq!(cli.channel.as_deref(), Some("someone"));
        assert!(cli.dump);
        assert_eq!(cli.write, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn simple_flags() {
        let cli = Cli::parse_from([
            "snarf",
            "--get-creators",
            "--create-creator",
            "Bob",
            "--delete-creator",
            "9",
            "--host",
            "localhost:8000",
            "--scheme",
            "http",
            "--insecure",
        ]);
        assert!(cli.get_creators);
        assert_eq!(cli.create_creator.as_deref(), Some("Bob"));
        assert_eq!(cli.delete_creator.as_deref(), Some("9"));
        assert_eq!(cli.host.as_deref(), Some("localhost:8000"));
        assert_eq!(cli.scheme.as_deref(), Some("http"));
        assert!(cli.insecure);
        assert!(cli.get_creator_by_id.is_none());
    }

    #[test]
    fn rejects_unknown_scheme() {
        assert!(Cli::try_parse_from(["snarf", "--scheme", "ftp"]).is_err());
    }
}
