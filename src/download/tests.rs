use super::detect::{DirSnapshot, detect_new_file};
use super::*;
use crate::config::{DownloadSettings, LibrarySettings};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

fn library_in(dir: &Path) -> LibrarySettings {
    LibrarySettings {
        dir: dir.to_path_buf(),
        ..LibrarySettings::default()
    }
}

fn set_mtime(path: &Path, t: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(t)
        .unwrap();
}

#[test]
fn query_joins_title_and_artist() {
    assert_eq!(
        DownloadRequest::new("  Clocks ", " Coldplay ").query(),
        "Clocks Coldplay"
    );
    assert_eq!(DownloadRequest::new("Clocks", "   ").query(), "Clocks");
}

#[test]
fn command_matches_the_yt_dlp_invocation() {
    let downloader = Downloader::new(
        DownloadSettings::default(),
        library_in(Path::new("musica")),
    );
    let cmd = downloader.command(&DownloadRequest::new("Clocks", "Coldplay"));

    assert_eq!(cmd.get_program(), OsStr::new("yt-dlp"));
    let args: Vec<&OsStr> = cmd.get_args().collect();
    let expected_output = Path::new("musica").join("%(title)s.%(ext)s");
    assert_eq!(
        args,
        vec![
            OsStr::new("-x"),
            OsStr::new("--audio-format"),
            OsStr::new("mp3"),
            OsStr::new("-o"),
            expected_output.as_os_str(),
            OsStr::new("ytsearch:Clocks Coldplay"),
        ]
    );
}

#[test]
fn command_places_extra_args_before_the_search() {
    let settings = DownloadSettings {
        program: "/opt/bin/yt-dlp".into(),
        search_prefix: "scsearch".into(),
        audio_format: "opus".into(),
        extra_args: vec!["--no-playlist".into()],
        ..DownloadSettings::default()
    };
    let downloader = Downloader::new(settings, library_in(Path::new("/srv/music")));
    let cmd = downloader.command(&DownloadRequest::new("Song \"quoted\"", ""));

    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(args[2], "opus");
    assert_eq!(args[5], "--no-playlist");
    assert_eq!(args[6], "scsearch:Song \"quoted\"");
}

#[test]
fn detect_prefers_a_file_missing_from_the_snapshot() {
    let dir = tempdir().unwrap();
    let settings = library_in(dir.path());
    fs::write(dir.path().join("old.mp3"), b"x").unwrap();

    let before = DirSnapshot::capture(dir.path(), &settings);
    assert!(before.contains(&dir.path().join("old.mp3")));
    let started_at = SystemTime::now();

    // Touch the old file too; the brand-new one must still win.
    set_mtime(&dir.path().join("old.mp3"), started_at + Duration::from_secs(60));
    fs::write(dir.path().join("new.mp3"), b"x").unwrap();
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();

    let found = detect_new_file(&before, dir.path(), &settings, started_at).unwrap();
    assert_eq!(found, dir.path().join("new.mp3"));
}

#[test]
fn detect_picks_the_newest_of_several_new_files() {
    let dir = tempdir().unwrap();
    let settings = library_in(dir.path());
    let before = DirSnapshot::capture(dir.path(), &settings);
    assert!(!before.contains(&dir.path().join("a.mp3")));
    let now = SystemTime::now();

    fs::write(dir.path().join("a.mp3"), b"x").unwrap();
    fs::write(dir.path().join("b.mp3"), b"x").unwrap();
    set_mtime(&dir.path().join("a.mp3"), now + Duration::from_secs(10));
    set_mtime(&dir.path().join("b.mp3"), now - Duration::from_secs(10));

    let found = detect_new_file(&before, dir.path(), &settings, now).unwrap();
    assert_eq!(found, dir.path().join("a.mp3"));
}

#[test]
fn detect_falls_back_to_a_rewritten_file() {
    let dir = tempdir().unwrap();
    let settings = library_in(dir.path());
    let song = dir.path().join("same name.mp3");
    fs::write(&song, b"x").unwrap();
    let started_at = SystemTime::now();
    set_mtime(&song, started_at - Duration::from_secs(3600));

    let before = DirSnapshot::capture(dir.path(), &settings);
    assert!(detect_new_file(&before, dir.path(), &settings, started_at).is_none());

    set_mtime(&song, started_at + Duration::from_secs(1));
    assert_eq!(
        detect_new_file(&before, dir.path(), &settings, started_at),
        Some(song)
    );
}

#[test]
fn fetch_rejects_an_empty_title_without_running_anything() {
    let dir = tempdir().unwrap();
    let settings = DownloadSettings {
        program: "/nonexistent/should-not-run".into(),
        ..DownloadSettings::default()
    };
    let downloader = Downloader::new(settings, library_in(dir.path()));
    let err = downloader
        .fetch(&DownloadRequest::new("   ", "Artist"))
        .unwrap_err();
    assert!(matches!(err, DownloadError::EmptyQuery));
}

#[test]
fn fetch_reports_a_missing_program() {
    let dir = tempdir().unwrap();
    let settings = DownloadSettings {
        program: "/nonexistent/yt-dlp-missing".into(),
        ..DownloadSettings::default()
    };
    let downloader = Downloader::new(settings, library_in(dir.path()));
    let err = downloader
        .fetch(&DownloadRequest::new("Song", "Artist"))
        .unwrap_err();
    assert!(matches!(err, DownloadError::Spawn { .. }));
}

#[cfg(unix)]
#[test]
fn fetch_reports_a_failing_program() {
    let dir = tempdir().unwrap();
    let settings = DownloadSettings {
        program: "false".into(),
        ..DownloadSettings::default()
    };
    let downloader = Downloader::new(settings, library_in(dir.path()));
    let err = downloader
        .fetch(&DownloadRequest::new("Song", "Artist"))
        .unwrap_err();
    assert!(matches!(err, DownloadError::Failed { .. }));
}

#[cfg(unix)]
#[test]
fn fetch_reports_when_nothing_was_written() {
    let dir = tempdir().unwrap();
    let settings = DownloadSettings {
        program: "true".into(),
        ..DownloadSettings::default()
    };
    let downloader = Downloader::new(settings, library_in(dir.path()));
    let err = downloader
        .fetch(&DownloadRequest::new("Song", "Artist"))
        .unwrap_err();
    assert!(matches!(err, DownloadError::NoNewFile(_)));
}

#[cfg(unix)]
#[test]
fn fetch_finds_the_file_written_by_the_downloader() {
    use std::os::unix::fs::PermissionsExt;

    let work = tempdir().unwrap();
    let music = work.path().join("musica");
    let log = work.path().join("args.log");
    let script = work.path().join("fake-dl.sh");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\ntouch '{}/Fetched Song.mp3'\n",
            log.display(),
            music.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let settings = DownloadSettings {
        program: script.to_string_lossy().into_owned(),
        ..DownloadSettings::default()
    };
    let downloader = Downloader::new(settings, library_in(&music));

    let path = downloader
        .fetch(&DownloadRequest::new("Fetched Song", "Some Artist"))
        .unwrap();
    assert_eq!(path, music.join("Fetched Song.mp3"));

    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.lines().any(|l| l == "ytsearch:Fetched Song Some Artist"));
    assert!(logged.lines().any(|l| l == "-x"));
}
