//! Announcement sinks.
//!
//! The tracker only describes what should be said.  A sink decides what that
//! means: write a log line, keep a transcript, play an audio clip.  Sinks are
//! fire-and-forget; nothing they do feeds back into progress.

use std::path::{Path, PathBuf};

use ra_core::Direction;
use ra_progress::AnnouncementEvent;

/// Receives announcements from a [`Session`][crate::Session].
///
/// Only [`announce`][Self::announce] is required; the other hooks default to
/// no-ops.
///
/// # Example — console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl AnnouncementSink for Printer {
///     fn announce(&mut self, event: &AnnouncementEvent) {
///         println!("{}", event.message());
///     }
/// }
/// ```
pub trait AnnouncementSink {
    /// Called once per announcement, in the order they fire.
    fn announce(&mut self, event: &AnnouncementEvent);

    /// Called after the direction of travel has been reversed.
    fn on_reverse(&mut self, _direction: Direction) {}

    /// Called when a new traversal starts.
    fn on_start(&mut self, _direction: Direction) {}
}

impl<S: AnnouncementSink + ?Sized> AnnouncementSink for &mut S {
    fn announce(&mut self, event: &AnnouncementEvent) {
        (**self).announce(event);
    }

    fn on_reverse(&mut self, direction: Direction) {
        (**self).on_reverse(direction);
    }

    fn on_start(&mut self, direction: Direction) {
        (**self).on_start(direction);
    }
}

/// A sink that discards everything.
pub struct NoopSink;

impl AnnouncementSink for NoopSink {
    fn announce(&mut self, _event: &AnnouncementEvent) {}
}

/// Writes each announcement's spoken text at `info` level.
pub struct LogSink;

impl AnnouncementSink for LogSink {
    fn announce(&mut self, event: &AnnouncementEvent) {
        log::info!("{}", event.message());
    }

    fn on_reverse(&mut self, direction: Direction) {
        log::info!("now travelling {direction}");
    }
}

/// Keeps every announcement in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events:    Vec<AnnouncementEvent>,
    pub reversals: Vec<Direction>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spoken text of every recorded announcement.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(|e| e.message()).collect()
    }
}

impl AnnouncementSink for RecordingSink {
    fn announce(&mut self, event: &AnnouncementEvent) {
        self.events.push(event.clone());
    }

    fn on_reverse(&mut self, direction: Direction) {
        self.reversals.push(direction);
    }
}

/// Resolves each announcement to `{dir}/{clip_key}.{ext}` and hands the path
/// to a player callback.
///
/// Events with no matching file are logged and skipped; the route may define
/// stops that have no recording.
pub struct ClipSink<P: FnMut(&Path)> {
    dir:    PathBuf,
    ext:    String,
    player: P,
}

impl<P: FnMut(&Path)> ClipSink<P> {
    /// Clips are looked up as `{dir}/{clip_key}.mp3`.
    pub fn new(dir: impl Into<PathBuf>, player: P) -> Self {
        Self { dir: dir.into(), ext: "mp3".to_string(), player }
    }

    /// Use a different file extension.
    pub fn extension(mut self, ext: &str) -> Self {
        self.ext = ext.trim_start_matches('.').to_string();
        self
    }

    /// Path the clip for `event` would be loaded from.
    pub fn clip_path(&self, event: &AnnouncementEvent) -> PathBuf {
        self.dir.join(format!("{}.{}", event.clip_key(), self.ext))
    }
}

impl<P: FnMut(&Path)> AnnouncementSink for ClipSink<P> {
    fn announce(&mut self, event: &AnnouncementEvent) {
        let path = self.clip_path(event);
        if !path.is_file() {
            log::warn!("no clip for {event}: {} not found", path.display());
            return;
        }
        (self.player)(&path);
    }
}
