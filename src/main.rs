#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use termtvlib::cli::Args;
use termtvlib::config::Settings;
use termtvlib::ui::UI;

fn main() -> Result<()> {
    lovely_env_logger::init_default();
    let args = Args::parse();

    let mut config = Settings::default();
    config.load()?;
    info!("config loaded");

    if let Some(playlist) = args.playlist {
        config.playlist_from_cli = Some(expand_path(&playlist));
    }
    config.play_from_cli = args.play;

    let mut ui = UI::new(&config);
    ui.run();

    Ok(())
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
