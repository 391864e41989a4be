// UI layer: walks the parsed flags in a fixed order and runs one operation
// per flag. Nothing is shared between operations except the client.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::Duration;

use crate::api::ApiClient;
use crate::channel::{self, ChannelExtractor, YtDlp};
use crate::cli::{pair, Cli};
use crate::config::{ApiConfig, ChannelConfig};

/// Environment configuration with command-line overrides applied.
pub fn api_config(cli: &Cli) -> ApiConfig {
    let mut config = ApiConfig::from_env();
    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(scheme) = &cli.scheme {
        config.scheme = scheme.clone();
    }
    if cli.insecure {
        config.accept_invalid_certs = true;
    }
    config
}

pub fn channel_config(cli: &Cli) -> ChannelConfig {
    match &cli.ytdlp {
        Some(path) => ChannelConfig {
            ytdlp_path: path.clone(),
        },
        None => ChannelConfig::from_env(),
    }
}

/// Run every requested operation in order. Registry errors stop the run;
/// non-200 responses have already been reported and do not.
pub fn run(cli: &Cli, api: &ApiClient) -> Result<()> {
    if let Some(handle) = &cli.channel {
        let extractor = YtDlp::new(&channel_config(cli));
        read_channel(cli, &extractor, handle)?;
    }

    if cli.get_creators {
        api.get_creators()?;
    }

    if let Some(name) = &cli.create_creator {
        api.create_creator(name)?;
    }

    if let Some(id) = &cli.get_creator_by_id {
        api.get_creator_by_id(id)?;
    }

    if let Some(values) = &cli.replace_creator {
        let (id, new_name) = pair(values);
        api.replace_creator(id, new_name)?;
    }

    if let Some(values) = &cli.update_creator {
        let (id, name) = pair(values);
        match api.update_creator(id, name)? {
            Some(creator) => println!(
                "Updated Creator - ID: {}, Name: {}",
                creator.display_id(),
                creator.display_name()
            ),
            None => println!("Failed to update creator."),
        }
    }

    if let Some(id) = &cli.delete_creator {
        if api.delete_creator(id)? {
            println!("Deleted creator {}.", id);
        } else {
            println!("Failed to delete creator {}.", id);
        }
    }

    if let Some(id) = &cli.get_videos {
        api.get_videos(id)?;
    }

    Ok(())
}

fn read_channel(cli: &Cli, extractor: &dyn ChannelExtractor, handle: &str) -> Result<()> {
    // `indicatif` hides the spinner automatically when stderr is not a terminal.
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Reading @{}...", handle));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let entries = channel::get_channel_info(extractor, handle);
    spinner.finish_and_clear();
    info!("read {} entries for @{}", entries.len(), handle);

    if cli.dump {
        channel::dump_info(&entries)?;
    }
    if let Some(path) = &cli.write {
        channel::write_info(&entries, handle, path)?;
    }
    Ok(())
}
