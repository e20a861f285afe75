//! Console announcer that fans each event out to the optional CSV log and
//! clip player.

use std::fs::File;
use std::path::Path;

use ra_core::Direction;
use ra_progress::AnnouncementEvent;
use ra_session::{AnnouncementSink, ClipSink, CsvAnnouncementLog, SessionResult};

pub type Player = fn(&Path);

pub struct Announcer {
    csv:       Option<CsvAnnouncementLog<File>>,
    clips:     Option<ClipSink<Player>>,
    pub count: usize,
}

impl Announcer {
    pub fn new(csv: Option<CsvAnnouncementLog<File>>, clips: Option<ClipSink<Player>>) -> Self {
        Self { csv, clips, count: 0 }
    }

    /// Flush the CSV log and surface the first write error, if any.
    pub fn finish(&mut self) -> SessionResult<()> {
        if let Some(csv) = self.csv.as_mut() {
            csv.finish()?;
            if let Some(e) = csv.take_error() {
                return Err(e);
            }
        }
        Ok(())
    }
}

impl AnnouncementSink for Announcer {
    fn announce(&mut self, event: &AnnouncementEvent) {
        self.count += 1;
        println!("  >> {}", event.message());
        if let Some(csv) = self.csv.as_mut() {
            csv.announce(event);
        }
        if let Some(clips) = self.clips.as_mut() {
            clips.announce(event);
        }
    }

    fn on_reverse(&mut self, direction: Direction) {
        println!("  <> reversed, now travelling {direction}");
        if let Some(csv) = self.csv.as_mut() {
            csv.on_reverse(direction);
        }
    }

    fn on_start(&mut self, direction: Direction) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_start(direction);
        }
    }
}

/// Stand-in audio player: prints the clip it would play.
pub fn print_clip(path: &Path) {
    println!("     (clip {})", path.display());
}
