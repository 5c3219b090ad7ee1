use super::clock::PlaybackClock;
use super::player::{seek_target, step_volume};
use super::types::{PlaybackStatus, TransportCmd};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::thread;
use std::time::Duration;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn transport_keys_map_to_commands() {
    assert_eq!(
        TransportCmd::from_key(&press(KeyCode::Char(' '))),
        Some(TransportCmd::TogglePause)
    );
    assert_eq!(
        TransportCmd::from_key(&press(KeyCode::Enter)),
        Some(TransportCmd::Stop)
    );
    assert_eq!(
        TransportCmd::from_key(&press(KeyCode::Right)),
        Some(TransportCmd::SeekForward)
    );
    assert_eq!(
        TransportCmd::from_key(&press(KeyCode::Char('h'))),
        Some(TransportCmd::SeekBackward)
    );
    assert_eq!(
        TransportCmd::from_key(&press(KeyCode::Char('+'))),
        Some(TransportCmd::VolumeUp)
    );
    assert_eq!(
        TransportCmd::from_key(&press(KeyCode::Down)),
        Some(TransportCmd::VolumeDown)
    );
    assert_eq!(
        TransportCmd::from_key(&press(KeyCode::Char('n'))),
        Some(TransportCmd::Next)
    );
    assert_eq!(
        TransportCmd::from_key(&press(KeyCode::Char('b'))),
        Some(TransportCmd::Prev)
    );
    assert_eq!(TransportCmd::from_key(&press(KeyCode::Char('z'))), None);
}

#[test]
fn ctrl_c_stops_and_releases_are_ignored() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(TransportCmd::from_key(&ctrl_c), Some(TransportCmd::Stop));

    let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
    assert_eq!(TransportCmd::from_key(&ctrl_n), None);

    let mut release = press(KeyCode::Char(' '));
    release.kind = KeyEventKind::Release;
    assert_eq!(TransportCmd::from_key(&release), None);
}

#[test]
fn step_volume_clamps_to_range() {
    assert!((step_volume(1.0, 0.1) - 1.1).abs() < 1e-6);
    assert_eq!(step_volume(0.05, -0.1), 0.0);
    assert_eq!(step_volume(1.95, 0.1), 2.0);
}

#[test]
fn seek_target_clamps_to_zero_and_duration() {
    let secs = Duration::from_secs;
    assert_eq!(seek_target(secs(10), 5, None), secs(15));
    assert_eq!(seek_target(secs(3), -5, None), secs(0));
    assert_eq!(seek_target(secs(58), 5, Some(secs(60))), secs(60));
    assert_eq!(seek_target(secs(30), -5, Some(secs(60))), secs(25));
}

#[test]
fn clock_accumulates_only_while_running() {
    let mut clock = PlaybackClock::default();
    assert_eq!(clock.elapsed(), Duration::ZERO);
    thread::sleep(Duration::from_millis(5));
    assert_eq!(clock.elapsed(), Duration::ZERO);

    clock.start_at(Duration::from_secs(5));
    assert!(clock.elapsed() >= Duration::from_secs(5));

    clock.pause();
    let frozen = clock.elapsed();
    thread::sleep(Duration::from_millis(20));
    assert_eq!(clock.elapsed(), frozen);

    clock.resume();
    thread::sleep(Duration::from_millis(20));
    assert!(clock.elapsed() > frozen);

    clock.reset();
    assert_eq!(clock.elapsed(), Duration::ZERO);
}

#[test]
fn clock_seek_keeps_the_paused_state() {
    let mut clock = PlaybackClock::default();
    clock.start_at(Duration::ZERO);
    clock.pause();
    clock.seek_to(Duration::from_secs(42));
    thread::sleep(Duration::from_millis(5));
    assert_eq!(clock.elapsed(), Duration::from_secs(42));
}

#[test]
fn default_status_is_stopped() {
    assert_eq!(PlaybackStatus::default(), PlaybackStatus::Stopped);
}
