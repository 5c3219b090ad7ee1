mod app;
mod audio;
mod cli;
mod config;
mod download;
mod library;
mod runtime;
mod tracklist;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
