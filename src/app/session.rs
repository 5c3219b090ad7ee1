//! The interactive menu session.
//!
//! `Session` owns the track list and drives it from a line-oriented reader and
//! writer. Playback and downloads go through the `TrackPlayer` and `Fetcher`
//! seams so the session can run against in-memory I/O.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::download::{DownloadError, DownloadRequest, Downloader};
use crate::library::{ScanError, Track, scan};
use crate::tracklist::{TrackId, TrackList};
use crate::ui;

use super::menu::{Answer, MenuChoice, prompt_line, prompt_parsed};

/// How a playback handed to a `TrackPlayer` ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The track played to its end.
    Finished,
    /// The user stopped playback.
    Stopped,
    Next,
    Prev,
}

pub trait TrackPlayer {
    /// Play `track` until it ends or the user leaves the transport controls.
    fn play(&mut self, track: &Track) -> anyhow::Result<PlayOutcome>;
}

pub trait Fetcher {
    fn fetch(&self, request: &DownloadRequest) -> Result<PathBuf, DownloadError>;
}

impl Fetcher for Downloader {
    fn fetch(&self, request: &DownloadRequest) -> Result<PathBuf, DownloadError> {
        Downloader::fetch(self, request)
    }
}

pub struct Session<P, F> {
    pub tracks: TrackList,
    pub(super) settings: Settings,
    pub(super) player: P,
    pub(super) fetcher: F,
}

impl<P: TrackPlayer, F: Fetcher> Session<P, F> {
    pub fn new(settings: Settings, player: P, fetcher: F) -> Self {
        Self {
            tracks: TrackList::new(),
            settings,
            player,
            fetcher,
        }
    }

    /// Append every audio file of the music folder to the list.
    pub fn load_folder(&mut self) -> Result<usize, ScanError> {
        let found = scan(&self.settings.library.dir, &self.settings.library)?;
        let n = found.len();
        for track in found {
            self.tracks.push_back(track);
        }
        Ok(n)
    }

    /// Rebuild the list from the music folder. Ids keep counting up.
    pub fn rescan(&mut self) -> Result<usize, ScanError> {
        let found = scan(&self.settings.library.dir, &self.settings.library)?;
        let n = found.len();
        self.tracks.replace_all(found);
        Ok(n)
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<()> {
        loop {
            write!(out, "{}", ui::MENU)?;
            let Some(line) = prompt_line(input, out, "Select an option: ")? else {
                writeln!(out)?;
                break;
            };

            let keep_going = match MenuChoice::parse(&line) {
                Some(MenuChoice::List) => {
                    self.list(out)?;
                    true
                }
                Some(MenuChoice::Play) => self.play_prompt(input, out)?,
                Some(MenuChoice::Delete) => self.delete_prompt(input, out)?,
                Some(MenuChoice::Add) => self.add_prompt(input, out)?,
                Some(MenuChoice::Search) => self.search_prompt(input, out)?,
                Some(MenuChoice::Rescan) => {
                    match self.rescan() {
                        Ok(n) => writeln!(out, "Reloaded {n} tracks.")?,
                        Err(e) => writeln!(out, "Rescan failed: {e}")?,
                    }
                    true
                }
                Some(MenuChoice::Quit) => false,
                None => {
                    writeln!(out, "Invalid option, try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(out, "Leaving the player...")?;
        Ok(())
    }

    pub fn list<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.tracks.is_empty() {
            return writeln!(out, "No tracks in the list.");
        }
        writeln!(out, "\nAvailable tracks:")?;
        for entry in self.tracks.iter() {
            writeln!(out, "{}", ui::track_row(entry, &self.settings.ui))?;
        }
        Ok(())
    }

    /// Play `id`, then follow next/prev requests until playback stops.
    pub fn play<W: Write>(&mut self, id: TrackId, out: &mut W) -> anyhow::Result<()> {
        let mut current = id;
        loop {
            let Some(entry) = self.tracks.get(current) else {
                writeln!(out, "Track not found.")?;
                return Ok(());
            };
            writeln!(out, "Playing: {}", ui::track_label(&entry.track))?;
            out.flush()?;

            let outcome = match self.player.play(&entry.track) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("playback of {} failed: {e:#}", entry.track.path.display());
                    writeln!(out, "Could not play {}: {e:#}", entry.track.path.display())?;
                    return Ok(());
                }
            };

            let forward = match outcome {
                PlayOutcome::Finished | PlayOutcome::Stopped => return Ok(()),
                PlayOutcome::Next => true,
                PlayOutcome::Prev => false,
            };
            let step = if self.settings.playback.shuffle {
                self.tracks.random_other(current)
            } else if forward {
                self.tracks.next_after(current)
            } else {
                self.tracks.prev_before(current)
            };
            match step {
                Some(id) => current = id,
                None => return Ok(()),
            }
        }
    }

    pub fn delete<W: Write>(&mut self, id: TrackId, out: &mut W) -> std::io::Result<()> {
        match self.tracks.remove(id) {
            Some(entry) => {
                tracing::info!("removed track {id} ({})", entry.track.path.display());
                writeln!(out, "Track deleted.")
            }
            None => writeln!(out, "Track with id {id} was not found."),
        }
    }

    /// Download `request`, read the new file's tags and insert it at `position`.
    ///
    /// The list is left untouched when the download fails.
    pub fn add<W: Write>(
        &mut self,
        request: &DownloadRequest,
        position: usize,
        out: &mut W,
    ) -> std::io::Result<Option<TrackId>> {
        writeln!(out, "Searching for \"{}\"...", request.query())?;
        out.flush()?;

        let path = match self.fetcher.fetch(request) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("download failed: {e}");
                writeln!(out, "Download failed: {e}")?;
                return Ok(None);
            }
        };

        if self.tracks.contains_path(&path) {
            writeln!(out, "Note: {} was already in the list.", path.display())?;
        }

        let track = Track::from_path(&path).with_fallbacks(&request.title, &request.artist);
        let title = track.title.clone();
        let id = self.tracks.insert_at(track, position);
        let actual = self.tracks.position_of(id).unwrap_or(position);
        writeln!(out, "Download complete. Added \"{title}\" at position {actual} (id {id}).")?;
        Ok(Some(id))
    }

    pub fn search<W: Write>(&self, query: &str, out: &mut W) -> std::io::Result<()> {
        let hits = self.tracks.search(query);
        if hits.is_empty() {
            return writeln!(out, "No tracks match \"{}\".", query.trim());
        }
        for entry in hits {
            writeln!(out, "{}", ui::track_row(entry, &self.settings.ui))?;
        }
        Ok(())
    }

    fn play_prompt<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<bool> {
        match prompt_parsed::<TrackId, _, _>(input, out, "Enter the id of the track to play: ")? {
            Answer::Value(id) => self.play(id, out)?,
            Answer::Invalid(raw) => writeln!(out, "\"{raw}\" is not a valid id.")?,
            Answer::Eof => return Ok(false),
        }
        Ok(true)
    }

    fn delete_prompt<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<bool> {
        match prompt_parsed::<TrackId, _, _>(input, out, "Enter the id of the track to delete: ")? {
            Answer::Value(id) => self.delete(id, out)?,
            Answer::Invalid(raw) => writeln!(out, "\"{raw}\" is not a valid id.")?,
            Answer::Eof => return Ok(false),
        }
        Ok(true)
    }

    fn add_prompt<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<bool> {
        let Some(title) = prompt_line(input, out, "Enter the name of the new song: ")? else {
            return Ok(false);
        };
        if title.trim().is_empty() {
            writeln!(out, "A song title is required.")?;
            return Ok(true);
        }
        let Some(artist) = prompt_line(input, out, "Enter the artist: ")? else {
            return Ok(false);
        };
        let position = match prompt_parsed::<i64, _, _>(
            input,
            out,
            "Enter the position to insert the song at: ",
        )? {
            // Zero and negative positions mean the head of the list.
            Answer::Value(p) => usize::try_from(p.max(0)).unwrap_or(usize::MAX),
            Answer::Invalid(raw) => {
                writeln!(out, "\"{raw}\" is not a valid position.")?;
                return Ok(true);
            }
            Answer::Eof => return Ok(false),
        };

        self.add(&DownloadRequest::new(title, artist), position, out)?;
        Ok(true)
    }

    fn search_prompt<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<bool> {
        let Some(query) = prompt_line(input, out, "Search for: ")? else {
            return Ok(false);
        };
        self.search(&query, out)?;
        Ok(true)
    }
}
