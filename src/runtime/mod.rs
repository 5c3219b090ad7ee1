use std::io;

use anyhow::Context;
use clap::Parser;

use crate::app::Session;
use crate::cli::Cli;
use crate::download::Downloader;

mod logging;
mod settings;
mod transport;

use transport::TerminalPlayer;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut settings = settings::load_settings(cli.config.as_deref());
    if let Some(dir) = cli.dir {
        settings.library.dir = dir;
    }

    if cli.print_config {
        print!("{}", settings.to_toml().context("failed to render config")?);
        return Ok(());
    }

    let downloader = Downloader::new(settings.download.clone(), settings.library.clone());
    let player = TerminalPlayer::new(settings.playback.clone());
    let dir = settings.library.dir.clone();
    let mut session = Session::new(settings, player, downloader);

    session
        .load_folder()
        .with_context(|| format!("failed to load music folder {}", dir.display()))?;
    println!(
        "Loaded {} tracks from '{}'.",
        session.tracks.len(),
        dir.display()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    session.run(&mut input, &mut stdout)
}
