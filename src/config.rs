// Configuration: where the creator registry lives and where to find the
// `yt-dlp` binary. Both structs are read from the environment first and
// may then be overridden by command-line flags (see `ui::run`).

use std::path::PathBuf;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_HOST: &str = "35.161.49.69";

/// Connection settings for the creator registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub scheme: String,
    pub host: String,
    /// Skip TLS certificate verification. Off unless explicitly requested.
    pub accept_invalid_certs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            scheme: DEFAULT_SCHEME.into(),
            host: DEFAULT_HOST.into(),
            accept_invalid_certs: false,
        }
    }
}

impl ApiConfig {
    /// Build a config from `SNARF_API_SCHEME`, `SNARF_API_HOST` and
    /// `SNARF_INSECURE`, falling back to the defaults for unset variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ApiConfig::default();
        ApiConfig {
            scheme: lookup("SNARF_API_SCHEME").unwrap_or(defaults.scheme),
            host: lookup("SNARF_API_HOST").unwrap_or(defaults.host),
            accept_invalid_certs: lookup("SNARF_INSECURE")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.accept_invalid_certs),
        }
    }

    /// `scheme://host`, also sent as the `Referer` header.
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin(), path)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Settings for the channel reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelConfig {
    pub ytdlp_path: PathBuf,
}

impl ChannelConfig {
    /// Use `SNARF_YTDLP` when set, otherwise look for `yt-dlp` in the usual
    /// install locations and finally fall back to whatever is on `PATH`.
    pub fn from_env() -> Self {
        let ytdlp_path = std::env::var_os("SNARF_YTDLP")
            .map(PathBuf::from)
            .unwrap_or_else(find_ytdlp);
        ChannelConfig { ytdlp_path }
    }
}

fn find_ytdlp() -> PathBuf {
    let mut candidates = vec![
        PathBuf::from("/opt/homebrew/bin/yt-dlp"),
        PathBuf::from("/usr/local/bin/yt-dlp"),
        PathBuf::from("/usr/bin/yt-dlp"),
    ];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local").join("bin").join("yt-dlp"));
    }
    first_existing(&candidates).unwrap_or_else(|| PathBuf::from("yt-dlp"))
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.is_file()).cloned()
}
