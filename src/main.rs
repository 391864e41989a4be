// Entrypoint for the CLI application.
// - Keeps `main` small: parse flags, set up logging, build the API client
//   and hand everything to `ui::run`.
// - Returns `anyhow::Result` so transport failures end the process non-zero.

use clap::Parser;
use snarf::{api::ApiClient, cli::Cli, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Connection settings come from SNARF_API_* variables, then flags.
    let api = ApiClient::new(ui::api_config(&cli))?;

    ui::run(&cli, &api)
}
